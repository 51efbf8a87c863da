//! Events emitted by the Native Staking program for off-chain indexers.

use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub stake_pool: Pubkey,
    pub owner: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_decimals: u8,
}

#[event]
pub struct RewardPoolFunded {
    pub stake_pool: Pubkey,
    pub amount: u64,
    pub reward_pool_balance: u64,
}

#[event]
pub struct Staked {
    pub stake_pool: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub start_time: i64,
}

#[event]
pub struct Withdrawn {
    pub stake_pool: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub reward: u64,
    pub periods: u64,
}
