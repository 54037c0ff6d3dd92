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
pub struct Accept<'info> {
    /// The taker fulfilling the offer
    #[account(mut)]
    pub taker: Signer<'info>,

    /// The initializer who created the offer; receives the wanted tokens
    /// and the rent of the closed accounts
    #[account(mut)]
    pub initializer: SystemAccount<'info>,

    /// Offer record, closed on success with rent back to the initializer
    #[account(
        mut,
        close = initializer,
        has_one = initializer @ EscrowError::InvalidInitializer,
        has_one = offered_mint @ EscrowError::InvalidOfferedMint,
        has_one = wanted_mint @ EscrowError::InvalidWantedMint,
        seeds = [OFFER_SEED, initializer.key().as_ref(), offer.seed.to_le_bytes().as_ref()],
        bump = offer.bump,
    )]
    pub offer: Box<Account<'info, Offer>>,

    /// Mint of the vaulted token
    pub offered_mint: Box<Account<'info, Mint>>,

    /// Mint of the token the initializer is owed
    pub wanted_mint: Box<Account<'info, Mint>>,

    /// Vault holding the offered tokens (authority: the offer PDA)
    #[account(
        mut,
        associated_token::mint = offered_mint,
        associated_token::authority = offer,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    /// Taker's token account the vaulted tokens land in
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = offered_mint,
        associated_token::authority = taker,
    )]
    pub taker_offered_ata: Box<Account<'info, TokenAccount>>,

    /// Taker's token account the wanted tokens are drawn from
    #[account(
        mut,
        associated_token::mint = wanted_mint,
        associated_token::authority = taker,
    )]
    pub taker_wanted_ata: Box<Account<'info, TokenAccount>>,

    /// Initializer's token account the wanted tokens land in; derived
    /// from the initializer and the wanted mint rather than trusted as
    /// caller-supplied
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = wanted_mint,
        associated_token::authority = initializer,
    )]
    pub initializer_wanted_ata: Box<Account<'info, TokenAccount>>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Accept<'info> {
    /// Pay the initializer the wanted amount out of the taker's account
    pub fn pay_initializer(&mut self) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.taker_wanted_ata.to_account_info(),
            mint: self.wanted_mint.to_account_info(),
            to: self.initializer_wanted_ata.to_account_info(),
            authority: self.taker.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);

        transfer_checked(cpi_ctx, self.offer.wanted_amount, self.wanted_mint.decimals)
    }

    /// Sweep the vault to the taker and close it, both signed by the
    /// offer PDA; rent goes back to the initializer
    pub fn release_vault_to_taker(&mut self) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[
            OFFER_SEED,
            self.initializer.key.as_ref(),
            &self.offer.seed.to_le_bytes(),
            &[self.offer.bump],
        ]];

        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.offered_mint.to_account_info(),
            to: self.taker_offered_ata.to_account_info(),
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

/// Handler for the accept instruction
pub fn handler(ctx: Context<Accept>) -> Result<()> {
    // The taker pays first; if this fails no vault funds move
    ctx.accounts.pay_initializer()?;

    let released = ctx.accounts.vault.amount;
    ctx.accounts.release_vault_to_taker()?;

    msg!(
        "offer accepted, {} tokens released to taker, {} paid to initializer",
        released,
        ctx.accounts.offer.wanted_amount
    );

    Ok(())
}
