//! Reward calculation.
//!
//! Rewards accrue only in whole reward periods: one whole native unit earns
//! `REWARD_PER_UNIT_PER_PERIOD` whole reward tokens per elapsed period.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::state::StakePool;

/// Accounts required for the read-only reward query.
#[derive(Accounts)]
pub struct CalculateReward<'info> {
    /// The stake pool whose reward mint precision applies.
    #[account(
        seeds = [STAKE_POOL_SEED, stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump
    )]
    pub stake_pool: Account<'info, StakePool>,
}

/// Return the reward a stake of `amount` started at `start_time` has earned so far.
pub fn handler(ctx: Context<CalculateReward>, amount: u64, start_time: i64) -> Result<u64> {
    let clock = Clock::get()?;
    calculate_reward(
        amount,
        start_time,
        clock.unix_timestamp,
        ctx.accounts.stake_pool.reward_decimals,
    )
}

/// Number of whole reward periods between `start_time` and `now`.
pub fn periods_elapsed(start_time: i64, now: i64) -> Result<u64> {
    let elapsed = now
        .checked_sub(start_time)
        .ok_or(StakingError::MathOverflow)?;
    require!(elapsed >= 0, StakingError::InvalidTimestamp);

    Ok((elapsed / REWARD_PERIOD_SECONDS) as u64)
}

/// Calculate the reward for `amount` lamports staked since `start_time`.
///
/// The result is expressed in base units of a reward mint with
/// `reward_decimals` decimals, floored. Partial periods earn nothing.
///
/// # Errors
/// - `InvalidTimestamp` if `start_time` is after `now`
/// - `MathOverflow` if the reward does not fit in a `u64`
pub fn calculate_reward(
    amount: u64,
    start_time: i64,
    now: i64,
    reward_decimals: u8,
) -> Result<u64> {
    let periods = periods_elapsed(start_time, now)?;
    reward_for_periods(amount, periods, reward_decimals)
}

/// Reward for `amount` lamports over `periods` whole periods, in base units
/// of a reward mint with `reward_decimals` decimals.
pub fn reward_for_periods(amount: u64, periods: u64, reward_decimals: u8) -> Result<u64> {
    if periods == 0 || amount == 0 {
        return Ok(0);
    }
    require!(
        reward_decimals <= MAX_REWARD_DECIMALS,
        StakingError::UnsupportedRewardDecimals
    );

    let base = (amount as u128)
        .checked_mul(REWARD_PER_UNIT_PER_PERIOD)
        .ok_or(StakingError::MathOverflow)?
        .checked_mul(periods as u128)
        .ok_or(StakingError::MathOverflow)?;

    // Rescale from native precision to reward mint precision.
    let reward = if reward_decimals >= NATIVE_DECIMALS {
        base.checked_mul(10u128.pow((reward_decimals - NATIVE_DECIMALS) as u32))
            .ok_or(StakingError::MathOverflow)?
    } else {
        base / 10u128.pow((NATIVE_DECIMALS - reward_decimals) as u32)
    };

    u64::try_from(reward).map_err(|_| error!(StakingError::MathOverflow))
}
