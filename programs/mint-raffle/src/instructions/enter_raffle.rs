use anchor_lang::prelude::*;

use crate::{
    constants::{RAFFLE_SEED, TREASURY_SEED},
    error::RaffleError,
    state::{Raffle, Treasury},
};

/// Event emitted when an entrant deposits
#[event]
pub struct Deposit {
    /// The entrant's address
    pub identity: Pubkey,
    /// Amount deposited in lamports
    pub amount: u64,
}

/// Instruction to enter the raffle by depositing exactly the entry cost
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `amount` - Lamports to deposit, must equal the configured entry cost
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Raffle must be configured and the deposit window open
/// 2. Amount must match the entry cost exactly
/// 3. One entry per identity, refunded entries included
/// 4. Treasury balance is verified after the transfer
///
/// # Implementation Notes
/// - Records the entry before performing the transfer
/// - Uses checked arithmetic for the balance verification
pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let identity = ctx.accounts.entrant.key();

    ctx.accounts.raffle.enter(identity, amount, now)?;

    let pre_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();

    // Transfer lamports from the entrant to the raffle treasury
    anchor_lang::solana_program::program::invoke(
        &anchor_lang::solana_program::system_instruction::transfer(
            &identity,
            &ctx.accounts.treasury.key(),
            amount,
        ),
        &[
            ctx.accounts.entrant.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.treasury.to_account_info(),
        ],
    )?;

    let post_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();
    require!(
        post_transfer_balance
            == pre_transfer_balance
                .checked_add(amount)
                .ok_or(RaffleError::Overflow)?,
        RaffleError::TransferFailed
    );

    emit!(Deposit { identity, amount });

    Ok(())
}

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Treasury PDA that receives the deposit
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

    pub system_program: Program<'info, System>,
}
