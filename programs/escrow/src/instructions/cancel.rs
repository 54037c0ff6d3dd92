use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{
        close_account, transfer_checked, CloseAccount, Mint, Token, TokenAccount, TransferChecked,
    },
};

use crate::errors::EscrowError;
use crate::state::{Offer, OFFER_SEED};

#[derive(Accounts)]
pub struct Cancel<'info> {
    /// The initializer reclaiming the vaulted tokens; must match the
    /// identity stored in the offer
    #[account(mut)]
    pub initializer: Signer<'info>,

    /// Offer record, closed on success with rent back to the initializer
    #[account(
        mut,
        close = initializer,
        has_one = initializer @ EscrowError::InvalidInitializer,
        has_one = offered_mint @ EscrowError::InvalidOfferedMint,
        seeds = [OFFER_SEED, initializer.key().as_ref(), offer.seed.to_le_bytes().as_ref()],
        bump = offer.bump,
    )]
    pub offer: Account<'info, Offer>,

    /// Mint of the vaulted token
    pub offered_mint: Account<'info, Mint>,

    /// Vault holding the offered tokens (authority: the offer PDA)
    #[account(
        mut,
        associated_token::mint = offered_mint,
        associated_token::authority = offer,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Initializer's token account the funds are returned to
    #[account(
        init_if_needed,
        payer = initializer,
        associated_token::mint = offered_mint,
        associated_token::authority = initializer,
    )]
    pub initializer_offered_ata: Account<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Cancel<'info> {
    /// Sweep the vault back to the initializer and close it, both signed
    /// by the offer PDA
    pub fn refund_and_close_vault(&mut self) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[
            OFFER_SEED,
            self.initializer.key.as_ref(),
            &self.offer.seed.to_le_bytes(),
            &[self.offer.bump],
        ]];

        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.offered_mint.to_account_info(),
            to: self.initializer_offered_ata.to_account_info(),
            authority: self.offer.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

        transfer_checked(cpi_ctx, self.vault.amount, self.offered_mint.decimals)?;

        let cpi_accounts = CloseAccount {
            account: self.vault.to_account_info(),
            destination: self.initializer.to_account_info(),
            authority: self.offer.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

        close_account(cpi_ctx)
    }
}

/// Handler for the cancel instruction
pub fn handler(ctx: Context<Cancel>) -> Result<()> {
    let returned = ctx.accounts.vault.amount;
    ctx.accounts.refund_and_close_vault()?;

    msg!("offer cancelled, {} tokens returned to initializer", returned);

    Ok(())
}
