use anchor_lang::prelude::*;

use crate::{
    constants::MAX_ENTRANTS,
    error::RaffleError,
    state::{
        reduce_be, CandidatePool, Entry, RaffleConfig, RandomnessCache, ENTRY_SIZE,
        RAFFLE_CONFIG_SIZE, RANDOMNESS_CACHE_SIZE,
    },
};

// Space calculation:
// 8 (discriminator) +
// 32 (owner) +
// 32 (oracle) +
// 33 (token_mint: Option<Pubkey>) +
// 1 (bump) +
// 1 (locked) +
// 53 (config) +
// 4 + 200 * 42 (entries) +
// 4 + 200 * 4 (candidates) +
// 99 (randomness) +
// 4 (winner_count) +
// 4 (tokens_claimed) +
// 8 (refundable_balance) =
// 9483 total bytes
pub const RAFFLE_ACCOUNT_SIZE: usize = 8
    + 32
    + 32
    + 33
    + 1
    + 1
    + RAFFLE_CONFIG_SIZE
    + 4
    + MAX_ENTRANTS * ENTRY_SIZE
    + 4
    + MAX_ENTRANTS * 4
    + RANDOMNESS_CACHE_SIZE
    + 4
    + 4
    + 8;

/// Where the raffle stands at a given instant. Derived from the clock and
/// the locked configuration on every call, never stored.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RafflePhase {
    Unconfigured,
    Pending,
    Deposit,
    Selecting,
    Minting,
    Lockup,
    Settling,
}

#[account]
#[derive(Debug)]
pub struct Raffle {
    pub owner: Pubkey,
    pub oracle: Pubkey,
    pub token_mint: Option<Pubkey>,
    pub bump: u8,
    pub locked: bool,
    pub config: RaffleConfig,
    pub entries: Vec<Entry>,
    pub candidates: CandidatePool,
    pub randomness: RandomnessCache,
    pub winner_count: u32,
    pub tokens_claimed: u32,
    /// Sum of deposits still owed back to non-winning entrants.
    pub refundable_balance: u64,
}

impl Raffle {
    pub fn new(owner: Pubkey, oracle: Pubkey, bump: u8) -> Self {
        Self {
            owner,
            oracle,
            token_mint: None,
            bump,
            locked: false,
            config: RaffleConfig::default(),
            entries: Vec::new(),
            candidates: CandidatePool::default(),
            randomness: RandomnessCache::default(),
            winner_count: 0,
            tokens_claimed: 0,
            refundable_balance: 0,
        }
    }

    pub fn phase(&self, now: i64) -> RafflePhase {
        if !self.locked {
            return RafflePhase::Unconfigured;
        }
        let config = &self.config;
        if now < config.deposit_start {
            RafflePhase::Pending
        } else if now <= config.deposit_end {
            RafflePhase::Deposit
        } else if now < config.mint_start {
            RafflePhase::Selecting
        } else if now < config.minting_end() {
            RafflePhase::Minting
        } else if now < config.withdraw_start {
            RafflePhase::Lockup
        } else {
            RafflePhase::Settling
        }
    }

    pub fn entry(&self, identity: &Pubkey) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.owner == *identity)
    }

    fn entry_mut(&mut self, identity: &Pubkey) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.owner == *identity)
    }

    fn assert_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, RaffleError::NotOwner);
        Ok(())
    }

    fn assert_configured(&self) -> Result<()> {
        require!(self.locked, RaffleError::NotConfigured);
        Ok(())
    }

    /// Registers the mint winners will receive tokens from. Only possible
    /// before the raffle is locked.
    pub fn set_token_contract(&mut self, caller: &Pubkey, mint: Pubkey) -> Result<()> {
        self.assert_owner(caller)?;
        require!(!self.locked, RaffleError::AlreadyLocked);
        self.token_mint = Some(mint);
        Ok(())
    }

    /// Stores the configuration and locks the raffle. Succeeds at most once.
    pub fn configure(&mut self, caller: &Pubkey, config: RaffleConfig) -> Result<()> {
        self.assert_owner(caller)?;
        require!(!self.locked, RaffleError::AlreadyLocked);
        require!(self.token_mint.is_some(), RaffleError::TokenContractNotSet);
        config.validate()?;

        self.config = config;
        self.locked = true;
        Ok(())
    }

    /// Records a deposit of exactly `entry_cost` and makes the entrant a
    /// candidate. The caller moves the funds once this returns.
    pub fn enter(&mut self, identity: Pubkey, amount: u64, now: i64) -> Result<()> {
        self.assert_configured()?;
        require!(
            now >= self.config.deposit_start && now <= self.config.deposit_end,
            RaffleError::WindowClosed
        );
        // A seed request freezes the candidate set.
        require!(
            self.randomness.request_id.is_none(),
            RaffleError::WindowClosed
        );
        require!(amount == self.config.entry_cost, RaffleError::WrongAmount);
        require!(
            self.entry(&identity).is_none(),
            RaffleError::DuplicateEntry
        );
        require!(self.entries.len() < MAX_ENTRANTS, RaffleError::RaffleFull);

        let refundable_balance = self
            .refundable_balance
            .checked_add(amount)
            .ok_or(RaffleError::Overflow)?;
        let index = u32::try_from(self.entries.len()).map_err(|_| RaffleError::Overflow)?;

        self.entries.push(Entry::new(identity, amount));
        self.candidates.push(index);
        self.refundable_balance = refundable_balance;
        Ok(())
    }

    /// Opens the oracle request once deposits are final.
    pub fn request_seed(
        &mut self,
        caller: &Pubkey,
        raffle: &Pubkey,
        now: i64,
        slot: u64,
    ) -> Result<[u8; 32]> {
        self.assert_owner(caller)?;
        self.assert_configured()?;
        require!(now >= self.config.deposit_end, RaffleError::WindowOpen);
        self.randomness.open_request(raffle, now, slot)
    }

    pub fn deliver_seed(
        &mut self,
        caller: &Pubkey,
        request_id: &[u8; 32],
        seed: [u8; 32],
    ) -> Result<()> {
        require_keys_eq!(*caller, self.oracle, RaffleError::NotOracle);
        self.randomness.fulfill(request_id, seed)
    }

    /// Winner slots still open, bounded by both capacity and candidates.
    pub fn remaining_capacity(&self) -> u32 {
        let by_capacity = self.config.total_winners.saturating_sub(self.winner_count);
        let by_pool = u32::try_from(self.candidates.len()).unwrap_or(u32::MAX);
        by_capacity.min(by_pool)
    }

    /// Draws `count` winners without replacement, continuing the draw chain
    /// from wherever the previous call left it. Either all `count` winners
    /// are assigned or the raffle is left untouched.
    pub fn select_winners(
        &mut self,
        caller: &Pubkey,
        count: u32,
        now: i64,
    ) -> Result<Vec<Pubkey>> {
        self.assert_owner(caller)?;
        self.assert_configured()?;
        require!(
            now >= self.config.deposit_end,
            RaffleError::BeforeDepositEnd
        );
        require!(now < self.config.mint_start, RaffleError::AfterMintStart);
        require!(self.randomness.is_ready(), RaffleError::SeedNotReady);
        require!(
            count <= self.remaining_capacity(),
            RaffleError::OutOfCapacity
        );

        let mut winners = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let draw = self.randomness.next_draw()?;
            let position = reduce_be(&draw, self.candidates.len() as u64)?;
            let entry_index = self.candidates.swap_remove(position as usize)?;

            let entry = self
                .entries
                .get_mut(entry_index as usize)
                .ok_or(RaffleError::LedgerCorrupted)?;
            entry.has_won = true;
            let forfeited = entry.take_deposit();
            winners.push(entry.owner);

            self.refundable_balance = self
                .refundable_balance
                .checked_sub(forfeited)
                .ok_or(RaffleError::Overflow)?;
            self.winner_count = self
                .winner_count
                .checked_add(1)
                .ok_or(RaffleError::Overflow)?;
        }

        Ok(winners)
    }

    /// Zeroes the entrant's deposit and returns the amount to pay out.
    /// State is settled here, before any lamports move.
    pub fn withdraw_entry_cost(&mut self, identity: &Pubkey, now: i64) -> Result<u64> {
        self.assert_configured()?;
        require!(now >= self.config.withdraw_start, RaffleError::TooEarly);

        let entry = self.entry_mut(identity).ok_or(RaffleError::NoBalance)?;
        require!(entry.amount_deposited > 0, RaffleError::NoBalance);
        let amount = entry.take_deposit();

        self.refundable_balance = self
            .refundable_balance
            .checked_sub(amount)
            .ok_or(RaffleError::Overflow)?;
        Ok(amount)
    }

    /// What the owner may take out of `custodied` lamports: everything not
    /// owed back to losing entrants.
    pub fn owner_claimable(&self, custodied: u64) -> u64 {
        custodied.saturating_sub(self.refundable_balance)
    }

    /// Returns the full owner-claimable amount. Once paid, the custodied
    /// balance equals the refundable balance and a repeat call sees nothing.
    pub fn withdraw_owner_funds(&self, caller: &Pubkey, now: i64, custodied: u64) -> Result<u64> {
        self.assert_owner(caller)?;
        self.assert_configured()?;
        require!(now >= self.config.withdraw_start, RaffleError::TooEarly);

        let amount = self.owner_claimable(custodied);
        require!(amount > 0, RaffleError::NoBalance);
        Ok(amount)
    }

    /// Spends the winner's one mint right and returns its token index.
    pub fn claim_token(&mut self, identity: &Pubkey, now: i64) -> Result<u32> {
        self.assert_configured()?;
        require!(
            self.phase(now) == RafflePhase::Minting,
            RaffleError::NotActive
        );

        let entry = self
            .entry_mut(identity)
            .filter(|entry| entry.has_won)
            .ok_or(RaffleError::DidNotWin)?;
        require!(!entry.has_claimed, RaffleError::AlreadyClaimed);
        entry.has_claimed = true;

        let token_index = self.tokens_claimed;
        self.tokens_claimed = token_index
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;
        Ok(token_index)
    }
}
