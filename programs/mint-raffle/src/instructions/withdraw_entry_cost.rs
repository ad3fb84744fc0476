use anchor_lang::prelude::*;

use crate::{
    constants::{RAFFLE_SEED, TREASURY_SEED},
    state::{Raffle, Treasury},
};

/// Event emitted when a non-winning entrant takes back their deposit
#[event]
pub struct Withdraw {
    /// The refunded entrant's address
    pub identity: Pubkey,
    /// Amount refunded in lamports
    pub amount: u64,
}

/// Instruction to refund a non-winning entrant's deposit
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Withdrawals must have opened
/// 2. The signer must hold an entry with a non-zero deposit
///
/// # Implementation Notes
/// - The entry is zeroed before any lamports leave the treasury
/// - Funds move by direct debit from the program-owned treasury PDA
pub fn withdraw_entry_cost(ctx: Context<WithdrawEntryCost>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let identity = ctx.accounts.entrant.key();

    let amount = ctx.accounts.raffle.withdraw_entry_cost(&identity, now)?;

    Treasury::pay_out(
        &ctx.accounts.treasury.to_account_info(),
        &ctx.accounts.entrant.to_account_info(),
        amount,
    )?;

    emit!(Withdraw { identity, amount });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawEntryCost<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Treasury PDA that holds the deposits
    #[account(
        mut,
        seeds = [
            TREASURY_SEED,
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub entrant: Signer<'info>,
}
