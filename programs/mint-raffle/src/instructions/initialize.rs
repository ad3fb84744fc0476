use anchor_lang::prelude::*;

use crate::{
    constants::{RAFFLE_SEED, TREASURY_SEED},
    state::{Raffle, Treasury, RAFFLE_ACCOUNT_SIZE, TREASURY_ACCOUNT_SIZE},
};

/// Event emitted when the raffle and its treasury are created
#[event]
pub struct RaffleInitialized {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The owner allowed to administer the raffle
    pub owner: Pubkey,
    /// The authority allowed to deliver the random seed
    pub oracle: Pubkey,
}

/// Instruction to create the raffle singleton and its treasury
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `oracle` - Key that will sign `deliver_seed`
///
/// # Account Validations
/// * Raffle - New PDA with seed ["raffle"], so only one raffle can exist
/// * Treasury - New PDA with seeds ["treasury", raffle_key]
/// * Owner - Signer, pays for both accounts and becomes the raffle owner
pub fn initialize(ctx: Context<Initialize>, oracle: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts
        .raffle
        .set_inner(Raffle::new(owner, oracle, ctx.bumps.raffle));

    ctx.accounts.treasury.raffle = ctx.accounts.raffle.key();
    ctx.accounts.treasury.bump = ctx.bumps.treasury;

    msg!("raffle initialized, owner {} oracle {}", owner, oracle);
    emit!(RaffleInitialized {
        raffle: ctx.accounts.raffle.key(),
        owner,
        oracle,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [RAFFLE_SEED],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        init,
        payer = owner,
        space = TREASURY_ACCOUNT_SIZE,
        seeds = [
            TREASURY_SEED,
            raffle.key().as_ref(),
        ],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}
