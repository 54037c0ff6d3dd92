use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{transfer_checked, Mint, Token, TokenAccount, TransferChecked},
};

use crate::errors::EscrowError;
use crate::state::{Offer, OFFER_SEED};

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct Initialize<'info> {
    /// The initializer who sets the terms and funds the vault
    #[account(mut)]
    pub initializer: Signer<'info>,

    /// Offer record for this escrow. `init` fails if a live offer already
    /// sits at this address, so an open offer cannot be overwritten
    #[account(
        init,
        payer = initializer,
        space = 8 + Offer::INIT_SPACE,
        seeds = [OFFER_SEED, initializer.key().as_ref(), seed.to_le_bytes().as_ref()],
        bump,
    )]
    pub offer: Account<'info, Offer>,

    /// Mint of the token being locked
    pub offered_mint: Account<'info, Mint>,

    /// Mint of the token the initializer wants in return
    pub wanted_mint: Account<'info, Mint>,

    /// Initializer's token account the locked funds are drawn from
    #[account(
        mut,
        associated_token::mint = offered_mint,
        associated_token::authority = initializer,
    )]
    pub initializer_offered_ata: Account<'info, TokenAccount>,

    /// Vault holding the offered tokens. Its authority is the offer PDA,
    /// so no user-held key can move the funds
    #[account(
        init,
        payer = initializer,
        associated_token::mint = offered_mint,
        associated_token::authority = offer,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    /// Persist the offer record with the exchange terms
    pub fn record_offer(
        &mut self,
        seed: u64,
        offered_amount: u64,
        wanted_amount: u64,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        self.offer.set_inner(Offer {
            seed,
            initializer: self.initializer.key(),
            offered_mint: self.offered_mint.key(),
            wanted_mint: self.wanted_mint.key(),
            offered_amount,
            wanted_amount,
            bump: bumps.offer,
        });
        Ok(())
    }

    /// Move the offered tokens from the initializer into the vault
    pub fn lock_offered_tokens(&mut self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.initializer_offered_ata.to_account_info(),
            mint: self.offered_mint.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.initializer.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);

        transfer_checked(cpi_ctx, amount, self.offered_mint.decimals)
    }
}

/// Handler for the initialize instruction
pub fn handler(
    ctx: Context<Initialize>,
    seed: u64,
    offered_amount: u64,
    wanted_amount: u64,
) -> Result<()> {
    // Zero-amount offers are rejected before any account is touched
    require_gt!(offered_amount, 0, EscrowError::InvalidAmount);
    require_gt!(wanted_amount, 0, EscrowError::InvalidAmount);

    ctx.accounts
        .record_offer(seed, offered_amount, wanted_amount, &ctx.bumps)?;

    // A failed transfer (insufficient source balance) aborts the whole
    // transaction, so neither the record nor the vault survives
    ctx.accounts.lock_offered_tokens(offered_amount)?;

    Ok(())
}
