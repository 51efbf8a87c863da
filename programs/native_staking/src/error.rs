//! Error types for the Native Staking program.
//!
//! Each error has a unique code and descriptive message. Codes are assigned
//! sequentially from Anchor's custom error offset, so variants must only ever
//! be appended.

use anchor_lang::prelude::*;

/// Custom error codes for the Native Staking program.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum StakingError {
    // ========== Input Validation Errors ==========

    /// [6000] Cannot stake zero lamports.
    #[msg("Stake amount must be greater than zero")]
    ZeroStake,

    /// [6001] Cannot fund the reward pool with zero tokens.
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    /// [6002] Reward mint precision is outside the supported range.
    #[msg("Reward mint decimals exceed the native precision of 9")]
    UnsupportedRewardDecimals,

    // ========== Stake/Pool State Errors ==========

    /// [6003] The caller already has an active stake.
    #[msg("Already staking")]
    AlreadyStaking,

    /// [6004] No active stake found for this user.
    #[msg("No active stake found for this user")]
    NoActiveStake,

    /// [6005] The reward pool cannot cover the payout.
    #[msg("Insufficient reward pool balance for reward payout")]
    InsufficientRewardPool,

    // ========== Time/Lock Errors ==========

    /// [6006] Less than one full reward period has elapsed since staking.
    #[msg("Staking period not over")]
    PeriodNotElapsed,

    /// [6007] Stake start time lies in the future.
    #[msg("Invalid timestamp detected")]
    InvalidTimestamp,

    // ========== Math/Overflow Errors ==========

    /// [6008] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    // ========== Authorization Errors ==========

    /// [6009] Unauthorized - caller is not the pool owner.
    #[msg("Unauthorized: caller is not the pool owner")]
    NotOwner,

    /// [6010] Unauthorized - signer does not match stake owner.
    #[msg("Unauthorized: signer does not match stake owner")]
    InvalidStakeOwner,

    // ========== Account Validation Errors ==========

    /// [6011] The provided mint does not match the pool's reward mint.
    #[msg("Token mint mismatch - wrong token for this pool")]
    MintMismatch,

    /// [6012] The provided vault does not match the pool's reward vault.
    #[msg("Reward vault address mismatch")]
    RewardVaultMismatch,

    /// [6013] The provided vault does not match the pool's native vault.
    #[msg("Native vault address mismatch")]
    NativeVaultMismatch,

    /// [6014] User stake account does not belong to this pool.
    #[msg("User stake account does not belong to this pool")]
    StakePoolMismatch,
}
