use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;
use arrayref::array_refs;

use crate::{constants::SEED_REQUEST_TAG, error::RaffleError};

// 33 request_id + 33 seed + 33 chain_value (Option<[u8; 32]> each)
pub const RANDOMNESS_CACHE_SIZE: usize = 33 + 33 + 33;

/// Oracle request handle, the delivered seed, and the draw chain derived
/// from it. Words are 32-byte big-endian integers.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RandomnessCache {
    pub request_id: Option<[u8; 32]>,
    pub seed: Option<[u8; 32]>,
    pub chain_value: Option<[u8; 32]>,
}

impl RandomnessCache {
    /// Opens the single request this raffle will ever make.
    pub fn open_request(&mut self, raffle: &Pubkey, now: i64, slot: u64) -> Result<[u8; 32]> {
        require!(self.seed.is_none(), RaffleError::SeedAlreadyDelivered);
        require!(
            self.request_id.is_none(),
            RaffleError::RequestAlreadyPending
        );

        let request_id = keccak::hashv(&[
            SEED_REQUEST_TAG,
            raffle.as_ref(),
            &now.to_le_bytes(),
            &slot.to_le_bytes(),
        ])
        .to_bytes();
        self.request_id = Some(request_id);

        Ok(request_id)
    }

    /// Stores the oracle's answer. A seed, once stored, is never replaced.
    pub fn fulfill(&mut self, request_id: &[u8; 32], seed: [u8; 32]) -> Result<()> {
        require!(
            self.request_id.as_ref() == Some(request_id),
            RaffleError::UnknownRequest
        );
        require!(self.seed.is_none(), RaffleError::SeedAlreadyDelivered);

        self.seed = Some(seed);
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.seed.is_some()
    }

    /// Advances the chain one link: `keccak256(previous)`, starting from the
    /// seed. The chain is never re-seeded between selection calls.
    pub fn next_draw(&mut self) -> Result<[u8; 32]> {
        let previous = self
            .chain_value
            .or(self.seed)
            .ok_or(RaffleError::SeedNotReady)?;
        let next = keccak::hash(&previous).to_bytes();
        self.chain_value = Some(next);
        Ok(next)
    }
}

/// `value mod modulus` where `value` is a 256-bit big-endian integer.
pub fn reduce_be(value: &[u8; 32], modulus: u64) -> Result<u64> {
    require!(modulus > 0, RaffleError::OutOfCapacity);

    let (w0, w1, w2, w3) = array_refs![value, 8, 8, 8, 8];
    let modulus = modulus as u128;
    let remainder = [w0, w1, w2, w3].iter().fold(0u128, |acc, word| {
        ((acc << 64) | u64::from_be_bytes(**word) as u128) % modulus
    });

    Ok(remainder as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(n: u64) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[24..].copy_from_slice(&n.to_be_bytes());
        out
    }

    #[test]
    fn reduce_matches_small_values() {
        assert_eq!(reduce_be(&word(777), 9).unwrap(), 777 % 9);
        assert_eq!(reduce_be(&word(u64::MAX), 1_000_003).unwrap(), u64::MAX % 1_000_003);
    }

    #[test]
    fn reduce_uses_high_words() {
        // 2^192 mod 7: 2^3 = 8 = 1 mod 7, and 192 is a multiple of 3.
        let mut value = [0u8; 32];
        value[7] = 1;
        assert_eq!(reduce_be(&value, 7).unwrap(), 1);

        // 2^255 mod 10 = 8, the powers of two cycle 2, 4, 8, 6 and 255 = 3 mod 4.
        let mut value = [0u8; 32];
        value[0] = 0x80;
        assert_eq!(reduce_be(&value, 10).unwrap(), 8);
    }

    #[test]
    fn reduce_rejects_zero_modulus() {
        assert!(reduce_be(&word(5), 0).is_err());
    }

    #[test]
    fn chain_starts_from_seed_and_continues() {
        let mut cache = RandomnessCache {
            seed: Some(word(777)),
            ..RandomnessCache::default()
        };

        let first = cache.next_draw().unwrap();
        assert_eq!(first, keccak::hash(&word(777)).to_bytes());

        let second = cache.next_draw().unwrap();
        assert_eq!(second, keccak::hash(&first).to_bytes());
        assert_eq!(cache.chain_value, Some(second));
        assert_eq!(cache.seed, Some(word(777)));
    }

    #[test]
    fn draw_without_seed_fails() {
        let mut cache = RandomnessCache::default();
        assert_eq!(
            cache.next_draw().unwrap_err(),
            RaffleError::SeedNotReady.into()
        );
        assert_eq!(cache.chain_value, None);
    }

    #[test]
    fn request_lifecycle() {
        let raffle = Pubkey::new_from_array([7u8; 32]);
        let mut cache = RandomnessCache::default();

        let request_id = cache.open_request(&raffle, 100, 5).unwrap();
        assert_eq!(
            cache.open_request(&raffle, 101, 6).unwrap_err(),
            RaffleError::RequestAlreadyPending.into()
        );
        assert!(!cache.is_ready());

        assert_eq!(
            cache.fulfill(&[0u8; 32], word(1)).unwrap_err(),
            RaffleError::UnknownRequest.into()
        );
        cache.fulfill(&request_id, word(777)).unwrap();
        assert!(cache.is_ready());

        assert_eq!(
            cache.fulfill(&request_id, word(1)).unwrap_err(),
            RaffleError::SeedAlreadyDelivered.into()
        );
        assert_eq!(cache.seed, Some(word(777)));
        assert_eq!(
            cache.open_request(&raffle, 102, 7).unwrap_err(),
            RaffleError::SeedAlreadyDelivered.into()
        );
    }

    #[test]
    fn fulfill_without_request_is_unknown() {
        let mut cache = RandomnessCache::default();
        assert_eq!(
            cache.fulfill(&[1u8; 32], word(1)).unwrap_err(),
            RaffleError::UnknownRequest.into()
        );
    }
}
