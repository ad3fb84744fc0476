use anchor_lang::prelude::*;

use crate::{constants::RAFFLE_SEED, state::Raffle};

#[event]
pub struct SeedDelivered {
    pub request_id: [u8; 32],
}

/// Oracle callback storing the seed for an open request
///
/// # Security Considerations
/// 1. Signer must be the oracle authority recorded at initialization
/// 2. The request id must match the open request
/// 3. A delivered seed is never replaced
pub fn deliver_seed(ctx: Context<DeliverSeed>, request_id: [u8; 32], seed: [u8; 32]) -> Result<()> {
    ctx.accounts
        .raffle
        .deliver_seed(&ctx.accounts.oracle.key(), &request_id, seed)?;

    msg!("seed delivered");
    emit!(SeedDelivered { request_id });

    Ok(())
}

#[derive(Accounts)]
pub struct DeliverSeed<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    pub oracle: Signer<'info>,
}
