use anchor_lang::prelude::*;

// 32 owner + 8 amount_deposited + 1 has_won + 1 has_claimed
pub const ENTRY_SIZE: usize = 32 + 8 + 1 + 1;

/// One entrant's deposit record. An entrant gets exactly one of these for
/// the lifetime of the raffle; refunded or winning entries keep their slot
/// with a zeroed deposit.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub owner: Pubkey,
    pub amount_deposited: u64,
    pub has_won: bool,
    pub has_claimed: bool,
}

impl Entry {
    pub fn new(owner: Pubkey, amount_deposited: u64) -> Self {
        Self {
            owner,
            amount_deposited,
            has_won: false,
            has_claimed: false,
        }
    }

    /// Zeroes the deposit and returns what was held.
    pub fn take_deposit(&mut self) -> u64 {
        std::mem::take(&mut self.amount_deposited)
    }
}
