use anchor_lang::prelude::*;

use crate::{
    constants::{RAFFLE_SEED, TREASURY_SEED},
    error::RaffleError,
    state::{Raffle, Treasury},
};

/// Event emitted when the owner sweeps the treasury
#[event]
pub struct OwnerFundsWithdrawn {
    /// Amount withdrawn in lamports
    pub amount: u64,
}

/// Instruction to pay the owner everything in the treasury that is not
/// owed back to non-winning entrants
///
/// # Security Considerations
/// 1. Only the owner may withdraw
/// 2. Withdrawals must have opened
/// 3. Outstanding refunds and the treasury's rent-exempt minimum stay behind
///
/// # Implementation Notes
/// - The claimable amount is derived from the treasury's actual balance, so a
///   repeat call finds nothing left and fails
pub fn withdraw_owner_funds(ctx: Context<WithdrawOwnerFunds>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let treasury_account = ctx.accounts.treasury.to_account_info();

    require!(
        ctx.accounts.treasury.raffle == ctx.accounts.raffle.key(),
        RaffleError::InvalidTreasury
    );
    let custodied = Treasury::custodied_lamports(&treasury_account)?;

    let amount = ctx
        .accounts
        .raffle
        .withdraw_owner_funds(&ctx.accounts.owner.key(), now, custodied)?;

    Treasury::pay_out(
        &treasury_account,
        &ctx.accounts.owner.to_account_info(),
        amount,
    )?;

    msg!("owner withdrew {} lamports", amount);
    emit!(OwnerFundsWithdrawn { amount });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawOwnerFunds<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

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
    pub owner: Signer<'info>,
}
