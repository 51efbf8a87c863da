//! Stake instruction handler.
//!
//! Handles locking lamports into the pool's native vault.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::Staked;
use crate::instructions::calculate_reward::reward_for_periods;
use crate::state::{StakePool, UserStake};

/// Accounts required for staking.
#[derive(Accounts)]
pub struct Stake<'info> {
    /// The user staking lamports.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = native_vault @ StakingError::NativeVaultMismatch
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// User's stake account (created on first stake, reused afterwards).
    #[account(
        init_if_needed,
        payer = user,
        space = UserStake::LEN,
        seeds = [USER_STAKE_SEED, stake_pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_stake: Account<'info, UserStake>,

    /// Pool's native vault.
    #[account(
        mut,
        seeds = [NATIVE_VAULT_SEED, stake_pool.key().as_ref()],
        bump = stake_pool.native_vault_bump
    )]
    pub native_vault: SystemAccount<'info>,

    /// System program.
    pub system_program: Program<'info, System>,
}

/// Stake `amount` lamports.
///
/// # Arguments
/// * `ctx` - Stake accounts context
/// * `amount` - Lamports to lock
///
/// # Errors
/// - `ZeroStake` if `amount` is zero
/// - `AlreadyStaking` if the user already has an active stake
pub fn handler(ctx: Context<Stake>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let user_key = ctx.accounts.user.key();
    let pool_key = ctx.accounts.stake_pool.key();

    open_stake(
        &mut ctx.accounts.stake_pool,
        &mut ctx.accounts.user_stake,
        amount,
        clock.unix_timestamp,
    )?;
    let user_stake = &mut ctx.accounts.user_stake;
    user_stake.owner = user_key;
    user_stake.stake_pool = pool_key;
    user_stake.bump = ctx.bumps.user_stake;

    let cpi_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.user.to_account_info(),
            to: ctx.accounts.native_vault.to_account_info(),
        },
    );
    system_program::transfer(cpi_ctx, amount)?;

    msg!("Staked {} lamports", amount);
    msg!("Total staked in pool: {}", ctx.accounts.stake_pool.total_staked);

    emit!(Staked {
        stake_pool: pool_key,
        user: user_key,
        amount,
        start_time: clock.unix_timestamp,
    });

    Ok(())
}

/// Record a new stake of `amount` lamports at time `now`.
///
/// A stake whose single-period reward cannot be represented is refused here,
/// since it could never be withdrawn later. Nothing changes on error.
pub fn open_stake(
    stake_pool: &mut StakePool,
    user_stake: &mut UserStake,
    amount: u64,
    now: i64,
) -> Result<()> {
    require!(amount > 0, StakingError::ZeroStake);
    require!(!user_stake.is_active(), StakingError::AlreadyStaking);
    reward_for_periods(amount, 1, stake_pool.reward_decimals)?;
    require!(
        stake_pool.total_staked.checked_add(amount).is_some(),
        StakingError::MathOverflow
    );

    user_stake.open(amount, now)?;
    stake_pool.record_stake(amount)?;
    stake_pool.last_updated = now;
    Ok(())
}
