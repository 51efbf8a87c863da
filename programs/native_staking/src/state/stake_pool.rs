use anchor_lang::prelude::*;

use crate::error::StakingError;

#[account]
#[derive(Debug, Default)]
pub struct StakePool {
    pub owner: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_vault: Pubkey,
    pub native_vault: Pubkey,

    pub reward_decimals: u8,

    /// Reward tokens held in the reward vault and not yet paid out.
    pub reward_pool_balance: u64,
    pub total_deposited: u64,
    pub total_distributed: u64,
    pub total_staked: u64,
    pub staker_count: u64,

    pub last_updated: i64,
    pub created_at: i64,

    pub native_vault_bump: u8,
    pub reward_vault_bump: u8,
    pub bump: u8,
}

impl StakePool {
    pub const LEN: usize = 8
        + (32 * 4)
        + 1
        + (8 * 5)
        + (8 * 2)
        + 3;

    /// Adds owner-deposited tokens to the reward pool.
    pub fn credit_rewards(&mut self, amount: u64) -> Result<()> {
        self.reward_pool_balance = self
            .reward_pool_balance
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        self.total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    /// Owner deposit of `amount` reward tokens at time `now`.
    pub fn fund(&mut self, caller: Pubkey, amount: u64, now: i64) -> Result<()> {
        require!(caller == self.owner, StakingError::NotOwner);
        require!(amount > 0, StakingError::ZeroAmount);

        self.credit_rewards(amount)?;
        self.last_updated = now;
        Ok(())
    }

    /// Removes a payout from the reward pool, failing instead of underpaying.
    pub fn debit_rewards(&mut self, amount: u64) -> Result<()> {
        require!(
            self.reward_pool_balance >= amount,
            StakingError::InsufficientRewardPool
        );
        self.reward_pool_balance -= amount;
        self.total_distributed = self
            .total_distributed
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    pub fn record_stake(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        self.staker_count = self.staker_count.saturating_add(1);
        Ok(())
    }

    pub fn release_stake(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(StakingError::MathOverflow)?;
        self.staker_count = self.staker_count.saturating_sub(1);
        Ok(())
    }
}
