use anchor_lang::prelude::*;

use crate::{
    constants::RAFFLE_SEED,
    state::{Raffle, RaffleConfig},
};

/// Event emitted when the raffle parameters are locked in
#[event]
pub struct RaffleConfigured {
    /// Exact deposit required per entrant, in lamports
    pub entry_cost: u64,
    /// Maximum number of winners
    pub total_winners: u32,
    pub deposit_start: i64,
    pub deposit_end: i64,
    pub mint_start: i64,
    pub mint_end: Option<i64>,
    pub withdraw_start: i64,
}

/// Instruction to set the raffle parameters, once
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `config` - Entry cost, winner capacity and the time windows
///
/// # Security Considerations
/// 1. Only the owner may configure
/// 2. A locked raffle rejects any further configuration, valid or not
/// 3. The token contract must be registered first
/// 4. Windows must be ordered and leave at least a week between mint start and withdrawals
pub fn configure_raffle(ctx: Context<ConfigureRaffle>, config: RaffleConfig) -> Result<()> {
    ctx.accounts
        .raffle
        .configure(&ctx.accounts.owner.key(), config)?;

    msg!(
        "raffle configured: entry cost {} lamports, {} winners",
        config.entry_cost,
        config.total_winners
    );
    emit!(RaffleConfigured {
        entry_cost: config.entry_cost,
        total_winners: config.total_winners,
        deposit_start: config.deposit_start,
        deposit_end: config.deposit_end,
        mint_start: config.mint_start,
        mint_end: config.mint_end,
        withdraw_start: config.withdraw_start,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ConfigureRaffle<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    pub owner: Signer<'info>,
}
