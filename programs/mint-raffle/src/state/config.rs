use anchor_lang::prelude::*;

use crate::{constants::LOCKUP_PERIOD, error::RaffleError};

// 8 entry_cost + 4 total_winners + 8 deposit_start + 8 deposit_end + 8 mint_start
// + 9 mint_end (Option<i64>) + 8 withdraw_start
pub const RAFFLE_CONFIG_SIZE: usize = 8 + 4 + 8 + 8 + 8 + 9 + 8;

/// Prices, capacity and the five time boundaries of the raffle.
/// All timestamps are unix seconds.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RaffleConfig {
    pub entry_cost: u64,
    pub total_winners: u32,
    pub deposit_start: i64,
    pub deposit_end: i64,
    pub mint_start: i64,
    pub mint_end: Option<i64>,
    pub withdraw_start: i64,
}

impl RaffleConfig {
    /// Checks the window ordering
    /// `deposit_start <= deposit_end <= mint_start <= mint_end <= withdraw_start`
    /// and the lockup between minting and withdrawals.
    pub fn validate(&self) -> Result<()> {
        require!(self.entry_cost > 0, RaffleError::InvalidEntryCost);
        require!(self.total_winners > 0, RaffleError::InvalidWinnerCount);
        require!(
            self.deposit_start <= self.deposit_end,
            RaffleError::DepositPeriodInverted
        );
        require!(
            self.deposit_end <= self.mint_start,
            RaffleError::MintBeforeDepositEnd
        );
        if let Some(mint_end) = self.mint_end {
            require!(self.mint_start <= mint_end, RaffleError::MintPeriodInverted);
            require!(
                mint_end <= self.withdraw_start,
                RaffleError::WithdrawBeforeMintEnd
            );
        }

        let lockup = self
            .withdraw_start
            .checked_sub(self.mint_start)
            .ok_or(RaffleError::Overflow)?;
        require!(lockup >= LOCKUP_PERIOD, RaffleError::LockupTooShort);

        Ok(())
    }

    /// First instant after minting. Without a mint end, minting runs until
    /// withdrawals open.
    pub fn minting_end(&self) -> i64 {
        self.mint_end.unwrap_or(self.withdraw_start)
    }
}
