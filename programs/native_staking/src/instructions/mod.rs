//! Instruction handlers for the Native Staking program.
//!
//! This module contains all instruction implementations.

pub mod calculate_reward;
pub mod deposit_reward_tokens;
pub mod get_stake;
pub mod initialize;
pub mod stake;
pub mod withdraw;

pub use calculate_reward::*;
pub use deposit_reward_tokens::*;
pub use get_stake::*;
pub use initialize::*;
pub use stake::*;
pub use withdraw::*;
