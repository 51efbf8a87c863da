//! # Native Staking Program
//!
//! A single-stake, fixed-period staking program. Users lock lamports and,
//! after at least one 30-day reward period, withdraw them together with a
//! reward paid in an SPL token:
//!
//! - **Rate**: 10 whole reward tokens per whole SOL per elapsed period
//! - **Periods**: only whole 30-day periods count, partial periods earn nothing
//! - **One stake per user**: restaking requires a withdrawal first
//!
//! ## Features
//! - Owner-funded reward pool with a pre-flight sufficiency check
//! - State cleared before any outgoing transfer
//! - Read-only reward and stake queries via return data
//! - Safe math with overflow protection

use anchor_lang::prelude::*;

declare_id!("7sGjDqVpV3u3nNw2cH9yZxKbJ5f8mR4tLkQeW6aXoPzd");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::StakeRecord;

#[program]
pub mod native_staking {
    use super::*;

    /// Creates the staking pool for a reward mint. The signer becomes the owner.
    ///
    /// # Errors
    /// Returns an error if the reward mint has more than 18 decimals.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Locks `amount` lamports and starts the reward timer.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Amount is zero
    /// - The user already has an active stake
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake::handler(ctx, amount)
    }

    /// Returns the staked lamports and pays the earned reward.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The user has no active stake
    /// - Less than one reward period has elapsed
    /// - The reward pool cannot cover the reward
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::handler(ctx)
    }

    /// Returns the reward earned by `amount` lamports staked at `start_time`.
    pub fn calculate_reward(
        ctx: Context<CalculateReward>,
        amount: u64,
        start_time: i64,
    ) -> Result<u64> {
        instructions::calculate_reward::handler(ctx, amount, start_time)
    }

    /// Moves `amount` reward tokens from the owner into the reward pool.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the pool owner
    /// - Amount is zero
    /// - The owner's token account cannot cover the transfer
    pub fn deposit_reward_tokens(ctx: Context<DepositRewardTokens>, amount: u64) -> Result<()> {
        instructions::deposit_reward_tokens::handler(ctx, amount)
    }

    /// Returns the user's current stake record.
    pub fn get_stake(ctx: Context<GetStake>) -> Result<StakeRecord> {
        instructions::get_stake::handler(ctx)
    }
}
