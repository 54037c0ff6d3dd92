use anchor_lang::prelude::*;

pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod escrow {
    use super::*;

    /// Open an offer: lock `offered_amount` of the offered token in a
    /// program-owned vault, asking for `wanted_amount` of the wanted token
    pub fn initialize(
        ctx: Context<Initialize>,
        seed: u64,
        offered_amount: u64,
        wanted_amount: u64,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, seed, offered_amount, wanted_amount)
    }

    /// Cancel an open offer: the initializer reclaims the vaulted tokens
    pub fn cancel(ctx: Context<Cancel>) -> Result<()> {
        instructions::cancel::handler(ctx)
    }

    /// Accept an open offer: the taker pays the wanted amount and receives
    /// the vaulted tokens
    pub fn accept(ctx: Context<Accept>) -> Result<()> {
        instructions::accept::handler(ctx)
    }
}
