//! Instruction handlers for the staking pool program.

pub mod admin;
pub mod claim_rewards;
pub mod create_pool;
pub mod fund_rewards;
pub mod init_vault;
pub mod initialize;
pub mod stake;
pub mod unstake;

pub use admin::*;
pub use claim_rewards::*;
pub use create_pool::*;
pub use fund_rewards::*;
pub use init_vault::*;
pub use initialize::*;
pub use stake::*;
pub use unstake::*;
