//! Read-only stake lookup.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{StakePool, StakeRecord, UserStake};

/// Accounts required to read a user's stake.
#[derive(Accounts)]
pub struct GetStake<'info> {
    #[account(
        seeds = [STAKE_POOL_SEED, stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// CHECK: only used to derive the stake address
    pub user: UncheckedAccount<'info>,

    /// The user's stake account, if it was ever created.
    #[account(
        seeds = [USER_STAKE_SEED, stake_pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_stake: Option<Account<'info, UserStake>>,
}

/// Return `{amount, start_time}` for the user; zeros when they never staked.
///
/// A user without a stake account must be passed as `None` (the program id).
/// Passing the uninitialised PDA fails with Anchor's `AccountNotInitialized`.
pub fn handler(ctx: Context<GetStake>) -> Result<StakeRecord> {
    Ok(ctx
        .accounts
        .user_stake
        .as_ref()
        .map(|stake| stake.record())
        .unwrap_or_default())
}
