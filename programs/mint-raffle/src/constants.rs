use anchor_lang::prelude::*;

#[constant]
pub const RAFFLE_SEED: &[u8] = b"raffle";
#[constant]
pub const TREASURY_SEED: &[u8] = b"treasury";

pub const DAY: i64 = 24 * 60 * 60;

/// Minimum gap between the start of minting and the start of withdrawals.
pub const LOCKUP_PERIOD: i64 = 7 * DAY;

/// The whole ledger lives inside the raffle account, so it is bounded.
pub const MAX_ENTRANTS: usize = 200;

/// Domain tag mixed into every seed request handle.
pub const SEED_REQUEST_TAG: &[u8] = b"seed-request";
