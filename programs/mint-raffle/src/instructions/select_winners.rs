use anchor_lang::prelude::*;

use crate::{constants::RAFFLE_SEED, state::Raffle};

/// Event emitted for every selected winner
#[event]
pub struct RaffleWinner {
    /// The winning entrant's address
    pub identity: Pubkey,
}

/// Instruction to draw `count` winners from the remaining candidates
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `count` - Number of winners to draw in this call
///
/// # Security Considerations
/// 1. Only the owner may draw
/// 2. Draws happen after the deposit window and before minting starts
/// 3. The oracle seed must have been delivered
/// 4. `count` may not exceed the remaining winner capacity or the candidate pool
///
/// # Implementation Notes
/// - Each draw advances one keccak chain seeded by the oracle, so the same
///   seed and the same sequence of counts always produce the same winners
/// - Calls may be split to stay within compute limits
pub fn select_winners(ctx: Context<SelectWinners>, count: u32) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let raffle = &mut ctx.accounts.raffle;

    let winners = raffle.select_winners(&ctx.accounts.owner.key(), count, now)?;

    for identity in winners {
        emit!(RaffleWinner { identity });
    }
    msg!(
        "{} winners drawn, {} of {} selected",
        count,
        raffle.winner_count,
        raffle.config.total_winners
    );

    Ok(())
}

#[derive(Accounts)]
pub struct SelectWinners<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    pub owner: Signer<'info>,
}
