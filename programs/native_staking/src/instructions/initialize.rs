//! Initialize instruction handler.
//!
//! Creates the staking pool for a reward mint, its reward vault and its
//! native vault.
//!
//! ## Security Guarantees
//! - Reward vault is a PDA token account owned by the stake pool
//! - Native vault is a system-owned PDA only the pool can sign for
//! - Owner and reward mint are fixed in pool state permanently

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::PoolInitialized;
use crate::state::StakePool;

/// Accounts required for pool initialization.
///
/// ## Security Notes
/// - Seeds ensure the vaults cannot be swapped or replaced
/// - Mint is validated and locked to pool state
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The pool owner.
    /// SECURITY: This becomes the permanent owner stored in pool state.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The stake pool account to be created.
    /// SECURITY: PDA derived from STAKE_POOL_SEED + reward mint ensures uniqueness per token.
    #[account(
        init,
        payer = owner,
        space = StakePool::LEN,
        seeds = [STAKE_POOL_SEED, reward_mint.key().as_ref()],
        bump
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// The reward token mint. Its mint authority stays with the owner.
    pub reward_mint: Account<'info, Mint>,

    /// The vault that will hold reward tokens.
    #[account(
        init,
        payer = owner,
        seeds = [REWARD_VAULT_SEED, stake_pool.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = stake_pool
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// The vault that will hold staked lamports.
    #[account(
        mut,
        seeds = [NATIVE_VAULT_SEED, stake_pool.key().as_ref()],
        bump
    )]
    pub native_vault: SystemAccount<'info>,

    /// System program for account creation and lamport transfers.
    pub system_program: Program<'info, System>,

    /// Token program for token account operations.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar for rent-exempt calculations.
    pub rent: Sysvar<'info, Rent>,
}

/// Initialize a new staking pool.
///
/// The native vault is topped up to the rent-exempt minimum so that stakes
/// of any size can be deposited and fully withdrawn.
pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let reward_decimals = ctx.accounts.reward_mint.decimals;
    require!(
        reward_decimals <= MAX_REWARD_DECIMALS,
        StakingError::UnsupportedRewardDecimals
    );

    let rent_floor = ctx.accounts.rent.minimum_balance(0);
    let vault_lamports = ctx.accounts.native_vault.lamports();
    if vault_lamports < rent_floor {
        let cpi_ctx = CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner.to_account_info(),
                to: ctx.accounts.native_vault.to_account_info(),
            },
        );
        system_program::transfer(cpi_ctx, rent_floor - vault_lamports)?;
    }

    let stake_pool = &mut ctx.accounts.stake_pool;
    let clock = Clock::get()?;

    stake_pool.owner = ctx.accounts.owner.key();
    stake_pool.reward_mint = ctx.accounts.reward_mint.key();
    stake_pool.reward_vault = ctx.accounts.reward_vault.key();
    stake_pool.native_vault = ctx.accounts.native_vault.key();
    stake_pool.reward_decimals = reward_decimals;
    stake_pool.reward_pool_balance = 0;
    stake_pool.total_deposited = 0;
    stake_pool.total_distributed = 0;
    stake_pool.total_staked = 0;
    stake_pool.staker_count = 0;
    stake_pool.created_at = clock.unix_timestamp;
    stake_pool.last_updated = clock.unix_timestamp;

    stake_pool.bump = ctx.bumps.stake_pool;
    stake_pool.reward_vault_bump = ctx.bumps.reward_vault;
    stake_pool.native_vault_bump = ctx.bumps.native_vault;

    msg!("Native Staking Pool initialized");
    msg!("Owner: {}", stake_pool.owner);
    msg!("Reward mint: {} ({} decimals)", stake_pool.reward_mint, reward_decimals);

    emit!(PoolInitialized {
        stake_pool: stake_pool.key(),
        owner: stake_pool.owner,
        reward_mint: stake_pool.reward_mint,
        reward_decimals,
    });

    Ok(())
}
