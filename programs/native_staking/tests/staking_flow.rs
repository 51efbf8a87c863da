//! End-to-end accounting scenarios driven through the state-level API with
//! an explicit clock.

use std::collections::HashMap;

use anchor_lang::prelude::Pubkey;
use native_staking::constants::{REWARD_PERIOD_SECONDS, SECONDS_PER_DAY};
use native_staking::error::StakingError;
use native_staking::instructions::{calculate_reward, open_stake, settle_withdrawal, Payout};
use native_staking::state::{StakePool, StakeRecord, UserStake};

const SOL: u64 = 1_000_000_000;
const TOKEN: u64 = 1_000_000_000;
const GENESIS: i64 = 1_700_000_000;

/// In-memory pool with one stake account per user and a settable clock.
struct Ledger {
    pool: StakePool,
    stakes: HashMap<Pubkey, UserStake>,
    reward_vault: u64,
    now: i64,
}

impl Ledger {
    fn funded(rewards: u64) -> Self {
        let mut pool = StakePool {
            reward_decimals: 9,
            ..Default::default()
        };
        pool.credit_rewards(rewards).unwrap();
        Self {
            pool,
            stakes: HashMap::new(),
            reward_vault: rewards,
            now: GENESIS,
        }
    }

    fn advance(&mut self, seconds: i64) {
        self.now += seconds;
    }

    fn stake(&mut self, user: Pubkey, amount: u64) -> anchor_lang::Result<()> {
        let entry = self.stakes.entry(user).or_default();
        open_stake(&mut self.pool, entry, amount, self.now)
    }

    fn withdraw(&mut self, user: Pubkey) -> anchor_lang::Result<Payout> {
        let entry = self.stakes.entry(user).or_default();
        let payout = settle_withdrawal(&mut self.pool, entry, self.reward_vault, self.now)?;
        self.reward_vault -= payout.reward;
        Ok(payout)
    }

    fn record(&self, user: &Pubkey) -> StakeRecord {
        self.stakes
            .get(user)
            .map(UserStake::record)
            .unwrap_or_default()
    }
}

#[test]
fn stake_is_recorded_with_start_time() {
    let mut ledger = Ledger::funded(10_000 * TOKEN);
    let user = Pubkey::new_unique();

    ledger.stake(user, SOL).unwrap();

    assert_eq!(
        ledger.record(&user),
        StakeRecord {
            amount: SOL,
            start_time: GENESIS
        }
    );
    assert_eq!(ledger.pool.total_staked, SOL);
}

#[test]
fn withdraw_after_one_period_pays_ten_tokens() {
    let mut ledger = Ledger::funded(10_000 * TOKEN);
    let user = Pubkey::new_unique();

    ledger.stake(user, SOL).unwrap();
    ledger.advance(30 * SECONDS_PER_DAY);
    let payout = ledger.withdraw(user).unwrap();

    assert_eq!(payout.amount, SOL);
    assert_eq!(payout.reward, 10 * TOKEN);
    assert_eq!(payout.periods, 1);
    assert_eq!(ledger.record(&user), StakeRecord::default());
    assert_eq!(ledger.pool.reward_pool_balance, 9_990 * TOKEN);
    assert_eq!(ledger.pool.total_staked, 0);
}

#[test]
fn reward_after_sixty_days_is_two_periods() {
    let mut ledger = Ledger::funded(10_000 * TOKEN);
    let user = Pubkey::new_unique();

    ledger.stake(user, SOL).unwrap();
    ledger.advance(60 * SECONDS_PER_DAY);

    let start = ledger.record(&user).start_time;
    let reward = calculate_reward(SOL, start, ledger.now, 9).unwrap();
    assert_eq!(reward, 20 * TOKEN);
}

#[test]
fn immediate_withdraw_fails_and_keeps_stake() {
    let mut ledger = Ledger::funded(10_000 * TOKEN);
    let user = Pubkey::new_unique();

    ledger.stake(user, SOL).unwrap();
    let err = ledger.withdraw(user).unwrap_err();

    assert_eq!(err, StakingError::PeriodNotElapsed.into());
    assert_eq!(ledger.record(&user).amount, SOL);
    assert_eq!(ledger.pool.reward_pool_balance, 10_000 * TOKEN);
}

#[test]
fn withdraw_one_second_before_boundary_fails() {
    let mut ledger = Ledger::funded(10_000 * TOKEN);
    let user = Pubkey::new_unique();

    ledger.stake(user, SOL).unwrap();
    ledger.advance(REWARD_PERIOD_SECONDS - 1);
    assert_eq!(
        ledger.withdraw(user).unwrap_err(),
        StakingError::PeriodNotElapsed.into()
    );

    ledger.advance(1);
    assert!(ledger.withdraw(user).is_ok());
}

#[test]
fn double_stake_is_rejected() {
    let mut ledger = Ledger::funded(10_000 * TOKEN);
    let user = Pubkey::new_unique();

    ledger.stake(user, SOL).unwrap();
    let err = ledger.stake(user, SOL).unwrap_err();

    assert_eq!(err, StakingError::AlreadyStaking.into());
    assert_eq!(ledger.pool.total_staked, SOL);
}

#[test]
fn zero_stake_is_rejected() {
    let mut ledger = Ledger::funded(10_000 * TOKEN);
    let err = ledger.stake(Pubkey::new_unique(), 0).unwrap_err();
    assert_eq!(err, StakingError::ZeroStake.into());
}

#[test]
fn withdraw_without_stake_is_rejected() {
    let mut ledger = Ledger::funded(10_000 * TOKEN);
    let err = ledger.withdraw(Pubkey::new_unique()).unwrap_err();
    assert_eq!(err, StakingError::NoActiveStake.into());
}

#[test]
fn repeated_withdraw_sees_absent_stake() {
    let mut ledger = Ledger::funded(10_000 * TOKEN);
    let user = Pubkey::new_unique();

    ledger.stake(user, SOL).unwrap();
    ledger.advance(REWARD_PERIOD_SECONDS);
    ledger.withdraw(user).unwrap();

    let err = ledger.withdraw(user).unwrap_err();
    assert_eq!(err, StakingError::NoActiveStake.into());
    assert_eq!(ledger.pool.total_distributed, 10 * TOKEN);
}

#[test]
fn underfunded_pool_fails_cleanly() {
    let mut ledger = Ledger::funded(15 * TOKEN);
    let alice = Pubkey::new_unique();
    let bob = Pubkey::new_unique();

    ledger.stake(alice, SOL).unwrap();
    ledger.stake(bob, SOL).unwrap();
    ledger.advance(REWARD_PERIOD_SECONDS);

    ledger.withdraw(alice).unwrap();
    let err = ledger.withdraw(bob).unwrap_err();

    assert_eq!(err, StakingError::InsufficientRewardPool.into());
    assert_eq!(ledger.record(&bob).amount, SOL);
    assert_eq!(ledger.pool.reward_pool_balance, 5 * TOKEN);
    assert_eq!(ledger.pool.total_deposited - ledger.pool.total_distributed, 5 * TOKEN);
}

#[test]
fn pool_balance_tracks_deposits_minus_rewards() {
    let mut ledger = Ledger::funded(100 * TOKEN);
    let users: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();

    for user in &users {
        ledger.stake(*user, SOL).unwrap();
    }
    ledger.advance(2 * REWARD_PERIOD_SECONDS);

    let paid: u64 = users
        .iter()
        .map(|user| ledger.withdraw(*user).unwrap().reward)
        .sum();

    assert_eq!(paid, 60 * TOKEN);
    assert_eq!(ledger.pool.reward_pool_balance, 40 * TOKEN);
    assert_eq!(ledger.reward_vault, 40 * TOKEN);
    assert_eq!(ledger.pool.staker_count, 0);
}

#[test]
fn restake_after_withdraw_starts_new_timer() {
    let mut ledger = Ledger::funded(100 * TOKEN);
    let user = Pubkey::new_unique();

    ledger.stake(user, SOL).unwrap();
    ledger.advance(REWARD_PERIOD_SECONDS);
    ledger.withdraw(user).unwrap();

    ledger.advance(5);
    ledger.stake(user, 2 * SOL).unwrap();
    assert_eq!(ledger.record(&user).start_time, ledger.now);
    assert_eq!(
        ledger.withdraw(user).unwrap_err(),
        StakingError::PeriodNotElapsed.into()
    );
}

#[test]
fn stake_whose_reward_cannot_be_paid_is_refused() {
    let mut ledger = Ledger::funded(10_000 * TOKEN);
    let user = Pubkey::new_unique();

    let err = ledger.stake(user, u64::MAX).unwrap_err();

    assert_eq!(err, StakingError::MathOverflow.into());
    assert_eq!(ledger.record(&user), StakeRecord::default());
    assert_eq!(ledger.pool.total_staked, 0);
}

#[test]
fn largest_accepted_stake_withdraws_after_one_period() {
    let amount = u64::MAX / 10;
    let mut ledger = Ledger::funded(amount * 10);
    let user = Pubkey::new_unique();

    ledger.stake(user, amount).unwrap();
    ledger.advance(REWARD_PERIOD_SECONDS);
    let payout = ledger.withdraw(user).unwrap();

    assert_eq!(payout.amount, amount);
    assert_eq!(payout.reward, amount * 10);
    assert_eq!(ledger.pool.reward_pool_balance, 0);
}

#[test]
fn failed_settlement_leaves_stake_and_pool_untouched() {
    let mut pool = StakePool {
        reward_decimals: 9,
        ..Default::default()
    };
    pool.credit_rewards(100 * TOKEN).unwrap();
    // pool totals out of step with the stake account
    let mut stake = UserStake {
        amount: SOL,
        start_time: GENESIS,
        ..Default::default()
    };

    let err = settle_withdrawal(
        &mut pool,
        &mut stake,
        100 * TOKEN,
        GENESIS + REWARD_PERIOD_SECONDS,
    )
    .unwrap_err();

    assert_eq!(err, StakingError::MathOverflow.into());
    assert!(stake.is_active());
    assert_eq!(pool.reward_pool_balance, 100 * TOKEN);
    assert_eq!(pool.total_distributed, 0);
}
