//! Program constants for the Native Staking program.
//!
//! This module defines the PDA seeds, the reward period and the fixed reward
//! rate used throughout the staking program.

/// Seed for deriving the stake pool PDA
pub const STAKE_POOL_SEED: &[u8] = b"stake_pool";

/// Seed for deriving user stake account PDAs
pub const USER_STAKE_SEED: &[u8] = b"user_stake";

/// Seed for deriving the native (lamport) vault PDA
pub const NATIVE_VAULT_SEED: &[u8] = b"native_vault";

/// Seed for deriving the reward token vault PDA
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

/// Number of seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Length of one reward period in seconds (30 days)
pub const REWARD_PERIOD_SECONDS: i64 = 30 * SECONDS_PER_DAY;

/// Whole reward tokens paid per whole staked native unit per elapsed period
pub const REWARD_PER_UNIT_PER_PERIOD: u128 = 10;

/// Decimal places of the native asset (1 SOL = 10^9 lamports)
pub const NATIVE_DECIMALS: u8 = 9;

/// Largest reward mint precision accepted. Rewards are `amount * 10` per
/// period in the native base, so a finer mint would overflow `u64` on
/// ordinary stakes.
pub const MAX_REWARD_DECIMALS: u8 = NATIVE_DECIMALS;
