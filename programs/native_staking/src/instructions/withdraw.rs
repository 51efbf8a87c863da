//! Withdraw instruction handler.
//!
//! Returns the staked lamports together with the reward earned over the
//! elapsed whole reward periods.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer as SystemTransfer};
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::Withdrawn;
use crate::instructions::calculate_reward::{calculate_reward, periods_elapsed};
use crate::state::{StakePool, UserStake};

/// Accounts required for withdrawing.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// The user withdrawing their stake.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = reward_mint @ StakingError::MintMismatch,
        has_one = reward_vault @ StakingError::RewardVaultMismatch,
        has_one = native_vault @ StakingError::NativeVaultMismatch
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// User's stake account.
    #[account(
        mut,
        seeds = [USER_STAKE_SEED, stake_pool.key().as_ref(), user.key().as_ref()],
        bump = user_stake.bump,
        constraint = user_stake.owner == user.key() @ StakingError::InvalidStakeOwner,
        constraint = user_stake.stake_pool == stake_pool.key() @ StakingError::StakePoolMismatch
    )]
    pub user_stake: Account<'info, UserStake>,

    /// The reward token mint.
    pub reward_mint: Account<'info, Mint>,

    /// User's token account receiving the reward.
    #[account(
        mut,
        constraint = user_token_account.mint == reward_mint.key() @ StakingError::MintMismatch,
        constraint = user_token_account.owner == user.key() @ StakingError::InvalidStakeOwner
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Pool's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Pool's native vault.
    #[account(
        mut,
        seeds = [NATIVE_VAULT_SEED, stake_pool.key().as_ref()],
        bump = stake_pool.native_vault_bump
    )]
    pub native_vault: SystemAccount<'info>,

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Withdraw the caller's stake and reward.
///
/// All state changes happen before the lamport and token transfers, so a
/// re-entrant call sees the stake as already absent.
///
/// # Errors
/// - `NoActiveStake` if the user has nothing staked
/// - `PeriodNotElapsed` if less than one reward period has passed
/// - `InsufficientRewardPool` if the pool cannot cover the reward
pub fn handler(ctx: Context<Withdraw>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    // === EFFECTS ===

    let reward_vault_amount = ctx.accounts.reward_vault.amount;
    let payout = settle_withdrawal(
        &mut ctx.accounts.stake_pool,
        &mut ctx.accounts.user_stake,
        reward_vault_amount,
        now,
    )?;
    let Payout {
        amount,
        reward,
        periods,
    } = payout;

    let stake_pool = &ctx.accounts.stake_pool;
    let pool_key = stake_pool.key();
    let reward_mint_key = stake_pool.reward_mint;
    let pool_bump = stake_pool.bump;
    let native_vault_bump = stake_pool.native_vault_bump;

    // === INTERACTIONS ===

    let vault_seeds = &[NATIVE_VAULT_SEED, pool_key.as_ref(), &[native_vault_bump]];
    let vault_signer = &[&vault_seeds[..]];
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.system_program.to_account_info(),
        SystemTransfer {
            from: ctx.accounts.native_vault.to_account_info(),
            to: ctx.accounts.user.to_account_info(),
        },
        vault_signer,
    );
    system_program::transfer(cpi_ctx, amount)?;

    if reward > 0 {
        let pool_seeds = &[STAKE_POOL_SEED, reward_mint_key.as_ref(), &[pool_bump]];
        let pool_signer = &[&pool_seeds[..]];
        let cpi_accounts = Transfer {
            from: ctx.accounts.reward_vault.to_account_info(),
            to: ctx.accounts.user_token_account.to_account_info(),
            authority: ctx.accounts.stake_pool.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, pool_signer);
        token::transfer(cpi_ctx, reward)?;
    }

    msg!("Withdrew {} lamports after {} period(s)", amount, periods);
    msg!("Reward paid: {}", reward);
    msg!(
        "Reward pool remaining: {}",
        ctx.accounts.stake_pool.reward_pool_balance
    );

    emit!(Withdrawn {
        stake_pool: pool_key,
        user: ctx.accounts.user.key(),
        amount,
        reward,
        periods,
    });

    Ok(())
}

/// What a successful withdrawal pays out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub amount: u64,
    pub reward: u64,
    pub periods: u64,
}

/// Apply every state change of a withdrawal at time `now`.
///
/// `reward_vault_amount` is the token balance actually held by the reward
/// vault; the reward must fit in both it and the pool counter. Either every
/// change is applied (stake cleared, pool debited) or none is.
pub fn settle_withdrawal(
    stake_pool: &mut StakePool,
    user_stake: &mut UserStake,
    reward_vault_amount: u64,
    now: i64,
) -> Result<Payout> {
    require!(user_stake.is_active(), StakingError::NoActiveStake);
    require!(
        user_stake.is_period_elapsed(now),
        StakingError::PeriodNotElapsed
    );

    let record = user_stake.record();
    let periods = periods_elapsed(record.start_time, now)?;
    let reward = calculate_reward(
        record.amount,
        record.start_time,
        now,
        stake_pool.reward_decimals,
    )?;
    require!(
        reward_vault_amount >= reward && stake_pool.reward_pool_balance >= reward,
        StakingError::InsufficientRewardPool
    );
    require!(
        stake_pool.total_staked >= record.amount
            && stake_pool.total_distributed.checked_add(reward).is_some(),
        StakingError::MathOverflow
    );

    stake_pool.release_stake(record.amount)?;
    user_stake.close(now)?;
    stake_pool.debit_rewards(reward)?;
    stake_pool.last_updated = now;

    Ok(Payout {
        amount: record.amount,
        reward,
        periods,
    })
}
