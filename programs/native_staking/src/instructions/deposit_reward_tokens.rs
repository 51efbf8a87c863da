//! Deposit reward tokens instruction handler.
//!
//! Handles the owner moving reward tokens into the reward vault.
//!
//! ## Security Guarantees
//! - Only the pool owner may fund the reward pool
//! - Reward vault must be the pool's PDA vault
//! - Mint validation prevents wrong token deposits

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardPoolFunded;
use crate::state::StakePool;

/// Accounts required for funding the reward pool.
///
/// ## Security Notes
/// - Owner must match the pool's stored owner
/// - Transfer authority may be the source account's owner or an approved delegate
#[derive(Accounts)]
pub struct DepositRewardTokens<'info> {
    /// The pool owner.
    /// SECURITY: Must be signer; `StakePool::fund` checks it against pool.owner.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = reward_vault @ StakingError::RewardVaultMismatch,
        has_one = reward_mint @ StakingError::MintMismatch
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// The reward token mint.
    pub reward_mint: Account<'info, Mint>,

    /// Owner's reward token account.
    #[account(
        mut,
        constraint = owner_token_account.mint == reward_mint.key() @ StakingError::MintMismatch
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    /// Pool's reward vault.
    #[account(
        mut,
        constraint = reward_vault.owner == stake_pool.key() @ StakingError::RewardVaultMismatch
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Fund the reward pool with `amount` reward tokens.
///
/// Token program failures (insufficient balance or allowance) propagate
/// unchanged.
pub fn handler(ctx: Context<DepositRewardTokens>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let owner_key = ctx.accounts.owner.key();
    ctx.accounts
        .stake_pool
        .fund(owner_key, amount, clock.unix_timestamp)?;

    let cpi_accounts = Transfer {
        from: ctx.accounts.owner_token_account.to_account_info(),
        to: ctx.accounts.reward_vault.to_account_info(),
        authority: ctx.accounts.owner.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    let stake_pool = &ctx.accounts.stake_pool;
    msg!("Reward pool funded with {} tokens", amount);
    msg!("Reward pool balance: {}", stake_pool.reward_pool_balance);

    emit!(RewardPoolFunded {
        stake_pool: stake_pool.key(),
        amount,
        reward_pool_balance: stake_pool.reward_pool_balance,
    });

    Ok(())
}
