//! State structures for the Mindshare Staking Pool program.
//!
//! Account layouts plus the validation and accounting rules that operate on
//! them. Handlers read the clock once and pass `now` down, so everything in
//! here runs off-chain in tests.

pub mod program_state;
pub mod staking_pool;
pub mod user_stake;

pub use program_state::*;
pub use staking_pool::*;
pub use user_stake::*;
