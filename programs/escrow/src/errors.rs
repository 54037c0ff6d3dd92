use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Invalid amount: amount must be greater than zero")]
    InvalidAmount,
    #[msg("Invalid initializer: signer does not match the offer's initializer")]
    InvalidInitializer,
    #[msg("Invalid offered mint: account does not match the offer's offered mint")]
    InvalidOfferedMint,
    #[msg("Invalid wanted mint: account does not match the offer's wanted mint")]
    InvalidWantedMint,
}
