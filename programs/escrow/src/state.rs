use anchor_lang::prelude::*;

/// Seed prefix for the offer PDA
pub const OFFER_SEED: &[u8] = b"offer";

/// One open escrow. Created by `initialize`, destroyed by `cancel` or
/// `accept`, never mutated in between.
#[account]
#[derive(InitSpace)]
pub struct Offer {
    /// Caller-chosen nonce, part of the PDA seeds so one initializer can
    /// keep several offers open at once
    pub seed: u64,
    /// Creator of the offer; the only identity allowed to cancel it
    pub initializer: Pubkey,
    /// Mint of the token locked in the vault
    pub offered_mint: Pubkey,
    /// Mint the initializer wants in return
    pub wanted_mint: Pubkey,
    /// Quantity locked in the vault at creation
    pub offered_amount: u64,
    /// Quantity of the wanted token the taker must deliver
    pub wanted_amount: u64,
    /// Cached PDA bump, reused as a signer seed
    pub bump: u8,
}
