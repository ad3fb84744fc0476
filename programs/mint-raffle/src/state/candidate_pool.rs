use anchor_lang::prelude::*;

use crate::error::RaffleError;

/// Entrants still eligible to win, stored as indices into the entry ledger.
///
/// Removal swaps the chosen slot with the last one and pops, so order is not
/// preserved. Winner selection depends on this exact order, which makes the
/// removal strategy part of the draw's reproducibility contract.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidatePool {
    slots: Vec<u32>,
}

impl CandidatePool {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn push(&mut self, entry_index: u32) {
        self.slots.push(entry_index);
    }

    /// Removes and returns the entry index at `position` in O(1).
    pub fn swap_remove(&mut self, position: usize) -> Result<u32> {
        require!(position < self.slots.len(), RaffleError::LedgerCorrupted);
        Ok(self.slots.swap_remove(position))
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_of(n: u32) -> CandidatePool {
        let mut pool = CandidatePool::default();
        (0..n).for_each(|i| pool.push(i));
        pool
    }

    #[test]
    fn swap_remove_moves_last_into_hole() {
        let mut pool = pool_of(5);

        assert_eq!(pool.swap_remove(1).unwrap(), 1);
        assert_eq!(pool.as_slice(), &[0, 4, 2, 3]);

        assert_eq!(pool.swap_remove(3).unwrap(), 3);
        assert_eq!(pool.as_slice(), &[0, 4, 2]);
    }

    #[test]
    fn swap_remove_out_of_range_leaves_pool_intact() {
        let mut pool = pool_of(2);
        assert_eq!(
            pool.swap_remove(2).unwrap_err(),
            RaffleError::LedgerCorrupted.into()
        );
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn drains_to_empty() {
        let mut pool = pool_of(3);
        while !pool.is_empty() {
            pool.swap_remove(0).unwrap();
        }
        assert!(pool.swap_remove(0).is_err());
    }
}
