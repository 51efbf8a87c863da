use anchor_lang::prelude::*;

use crate::constants::REWARD_PERIOD_SECONDS;
use crate::error::StakingError;

/// Snapshot of a stake as seen by clients.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StakeRecord {
    pub amount: u64,
    pub start_time: i64,
}

/// One stake per (pool, user). `amount == 0` means no active stake.
#[account]
#[derive(Debug, Default)]
pub struct UserStake {
    pub owner: Pubkey,
    pub stake_pool: Pubkey,

    pub amount: u64,
    pub start_time: i64,

    pub bump: u8,
}

impl UserStake {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 1;

    pub fn is_active(&self) -> bool {
        self.amount > 0
    }

    pub fn is_period_elapsed(&self, now: i64) -> bool {
        now.saturating_sub(self.start_time) >= REWARD_PERIOD_SECONDS
    }

    pub fn record(&self) -> StakeRecord {
        StakeRecord {
            amount: self.amount,
            start_time: self.start_time,
        }
    }

    /// Starts a new stake of `amount` lamports anchored at `now`.
    pub fn open(&mut self, amount: u64, now: i64) -> Result<()> {
        require!(amount > 0, StakingError::ZeroStake);
        require!(!self.is_active(), StakingError::AlreadyStaking);

        self.amount = amount;
        self.start_time = now;
        Ok(())
    }

    /// Resets the stake to the absent state and returns what it held.
    ///
    /// Must run before any lamport or token transfer so a re-entrant
    /// withdrawal sees no active stake.
    pub fn close(&mut self, now: i64) -> Result<StakeRecord> {
        require!(self.is_active(), StakingError::NoActiveStake);
        require!(self.is_period_elapsed(now), StakingError::PeriodNotElapsed);

        let record = self.record();
        self.amount = 0;
        self.start_time = 0;
        Ok(record)
    }
}
