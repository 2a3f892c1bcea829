//! Error types for the Mindshare Staking Pool program.
//!
//! Every failing check aborts the whole instruction and reports one of the
//! codes below. Codes start at 6000 (Anchor's custom error offset) and are
//! append-only: external clients match on the numeric value.

use anchor_lang::prelude::*;

/// Custom error codes for the Mindshare Staking Pool program.
#[error_code]
pub enum StakingError {
    /// [6000] Signer is not the admin or not the owner of the position.
    #[msg("Unauthorized")]
    Unauthorized,

    /// [6001] Lock period or lock duration is negative.
    #[msg("Invalid lock period")]
    InvalidLockPeriod,

    /// [6002] Stake would push the pool above its maximum stake amount.
    #[msg("Pool capacity exceeded")]
    PoolCapacityExceeded,

    /// [6003] Amount is zero or a pool parameter is out of range.
    #[msg("Invalid amount")]
    InvalidAmount,

    /// [6004] Unstake amount exceeds the staked balance.
    #[msg("Insufficient stake")]
    InsufficientStake,

    /// [6005] Position was already slashed and cannot exit early again.
    #[msg("Stake slashed")]
    StakeSlashed,

    /// [6006] Mint or token account does not match the pool's token mint.
    #[msg("Invalid token mint")]
    InvalidTokenMint,

    /// [6007] Pool has been deactivated by the admin.
    #[msg("Pool inactive")]
    PoolInactive,

    /// [6008] Position does not belong to the supplied pool.
    #[msg("Invalid pool")]
    InvalidPool,

    /// [6009] Vault does not match the pool's recorded or derived vault.
    #[msg("Invalid pool vault")]
    InvalidPoolVault,

    /// [6010] Program is paused by the admin.
    #[msg("Program paused")]
    ProgramPaused,

    /// [6011] Clock is behind the position's last claim time.
    #[msg("Timestamp error")]
    InvalidTimestamp,

    /// [6012] Checked arithmetic overflowed or underflowed.
    #[msg("Math overflow")]
    MathOverflow,

    /// [6013] Program state singleton is already initialized.
    #[msg("Program already initialized")]
    AlreadyInitialized,

    /// [6014] Pool vault or reward vault has not been created yet.
    #[msg("Vault not initialized")]
    VaultNotInitialized,

    /// [6015] Reward vault holds nothing while rewards are owed.
    #[msg("Insufficient reward vault funds")]
    InsufficientRewardFunds,
}
