use anchor_lang::prelude::*;
use anchor_spl::token::{mint_to, Mint, MintTo, Token, TokenAccount};

use crate::{constants::RAFFLE_SEED, error::RaffleError, state::Raffle};

/// Event emitted when a winner mints their token
#[event]
pub struct TokenClaimed {
    /// The winner's address
    pub identity: Pubkey,
    /// Zero-based order in which the token was claimed
    pub token_index: u32,
}

/// Instruction for a winner to mint their one token
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. The claim window `[mint_start, mint_end]` must be open
/// 2. The signer must be a winner who has not claimed yet
/// 3. The mint must be the registered token contract
/// 4. The destination token account must belong to the winner
///
/// # Implementation Notes
/// - The claim is recorded before the mint CPI; a failed mint aborts the
///   transaction and the record with it
/// - The raffle PDA signs as mint authority
pub fn claim_token(ctx: Context<ClaimToken>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let identity = ctx.accounts.winner.key();

    let token_index = ctx.accounts.raffle.claim_token(&identity, now)?;

    let bump = ctx.accounts.raffle.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[RAFFLE_SEED, &[bump]]];
    mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.token_mint.to_account_info(),
                to: ctx.accounts.winner_token_account.to_account_info(),
                authority: ctx.accounts.raffle.to_account_info(),
            },
            signer_seeds,
        ),
        1,
    )
    .map_err(|_| error!(RaffleError::MintFailed))?;

    emit!(TokenClaimed {
        identity,
        token_index,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimToken<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
        constraint = raffle.token_mint == Some(token_mint.key()) @ RaffleError::InvalidTokenContract,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(mut)]
    pub token_mint: Account<'info, Mint>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = winner,
    )]
    pub winner_token_account: Account<'info, TokenAccount>,

    pub winner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}
