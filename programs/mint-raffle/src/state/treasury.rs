use anchor_lang::prelude::*;

use crate::error::RaffleError;

// 8 discriminator, 32 raffle, 1 bump
pub const TREASURY_ACCOUNT_SIZE: usize = 8 + 32 + 1;

/// Program-owned PDA holding every deposited lamport.
#[account]
pub struct Treasury {
    pub raffle: Pubkey,
    pub bump: u8,
}

impl Treasury {
    /// Lamports held above the rent-exempt minimum. The treasury must stay
    /// rent exempt, so this is the most that can ever leave it.
    pub fn custodied_lamports(info: &AccountInfo) -> Result<u64> {
        let rent_lamports = Rent::get()?.minimum_balance(TREASURY_ACCOUNT_SIZE);
        info.lamports()
            .checked_sub(rent_lamports)
            .ok_or_else(|| error!(RaffleError::InvalidTreasury))
    }

    /// Moves lamports out of the treasury by direct debit. Only valid because
    /// the treasury is owned by this program.
    pub fn pay_out<'info>(
        treasury: &AccountInfo<'info>,
        recipient: &AccountInfo<'info>,
        amount: u64,
    ) -> Result<()> {
        treasury.sub_lamports(amount)?;
        recipient.add_lamports(amount)?;
        Ok(())
    }
}
