use anchor_lang::prelude::*;

use crate::{constants::RAFFLE_SEED, state::Raffle};

/// Event the oracle watches for; it answers with `deliver_seed`
#[event]
pub struct SeedRequested {
    pub request_id: [u8; 32],
}

/// Asks the oracle for the seed of the winner draw. Owner only, once
/// deposits have closed, and only one request per raffle.
pub fn request_seed(ctx: Context<RequestSeed>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle_key = ctx.accounts.raffle.key();

    let request_id = ctx.accounts.raffle.request_seed(
        &ctx.accounts.owner.key(),
        &raffle_key,
        clock.unix_timestamp,
        clock.slot,
    )?;

    emit!(SeedRequested { request_id });

    Ok(())
}

#[derive(Accounts)]
pub struct RequestSeed<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    pub owner: Signer<'info>,
}
