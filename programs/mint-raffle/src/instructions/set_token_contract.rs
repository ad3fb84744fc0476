use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::Mint;

use crate::{constants::RAFFLE_SEED, error::RaffleError, state::Raffle};

/// Registers the SPL mint winners are paid from
///
/// # Account Validations
/// * Raffle - Must not be locked yet
/// * Owner - Must be the raffle owner
/// * TokenMint - Mint authority must be the raffle PDA, otherwise claims could never succeed
pub fn set_token_contract(ctx: Context<SetTokenContract>) -> Result<()> {
    let mint = ctx.accounts.token_mint.key();
    ctx.accounts
        .raffle
        .set_token_contract(&ctx.accounts.owner.key(), mint)?;

    msg!("token contract set to {}", mint);
    Ok(())
}

#[derive(Accounts)]
pub struct SetTokenContract<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    pub owner: Signer<'info>,

    #[account(
        constraint = token_mint.mint_authority == COption::Some(raffle.key())
            @ RaffleError::InvalidTokenContract,
    )]
    pub token_mint: Account<'info, Mint>,
}
