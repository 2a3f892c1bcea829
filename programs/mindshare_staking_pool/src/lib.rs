//! # Mindshare Staking Pool
//!
//! A multi-pool token staking ledger. An admin creates pools, each bound to
//! one SPL mint with a capacity cap, a minimum lock, a slashing rate and a
//! reward rate. Users stake into a pool, accrue rewards linearly over time,
//! claim from the pool's reward vault and unstake their principal.
//!
//! ## Features
//! - One principal vault and one reward vault per pool, owned by the pool PDA
//! - Per-user, per-pool positions with a lock deadline
//! - Early exits are slashed by the pool's rate; the penalty stays in the vault
//! - Global pause switch covering every user-facing instruction
//! - Checked arithmetic throughout
//!
//! ## Rewards
//! ```text
//! reward = stake * elapsed * base_reward_rate * performance_multiplier
//!          / (10_000 * PRECISION_MULT)
//! ```
//!
//! Accrual runs through a per-pool reward index that `update_pool`
//! checkpoints, so a rate change only affects time after it.

use anchor_lang::prelude::*;

declare_id!("CzSrtvHksDXtM9nFpwGuQ3QQVwNTEXD6jPUjkpqwMjhd");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

use instructions::*;

#[program]
pub mod mindshare_staking_pool {
    use super::*;

    /// Initializes the program state and records the caller as admin.
    ///
    /// # Errors
    /// Returns `AlreadyInitialized` if the program state already has an admin.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Admin function to pause or unpause the program.
    ///
    /// # Arguments
    /// * `ctx` - The context containing admin accounts
    /// * `paused` - True to pause, false to unpause
    ///
    /// # Errors
    /// Returns an error if caller is not the admin.
    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        instructions::admin::set_paused_handler(ctx, paused)
    }

    /// Creates a new staking pool.
    ///
    /// # Arguments
    /// * `ctx` - The context containing the admin, program state and mint
    /// * `pool_id` - Caller-chosen pool identifier, part of the pool PDA seeds
    /// * `max_stake_amount` - Capacity cap on total principal
    /// * `min_lock_period` - Minimum lock in seconds
    /// * `slashing_rate` - Early exit penalty (basis points, max 10000)
    /// * `base_reward_rate` - Reward rate scaled by `PRECISION_MULT`
    ///
    /// # Errors
    /// Returns an error if:
    /// - Program is paused
    /// - Caller is not the admin
    /// - Parameters are out of range
    pub fn create_pool(
        ctx: Context<CreatePool>,
        pool_id: u64,
        max_stake_amount: u64,
        min_lock_period: i64,
        slashing_rate: u16,
        base_reward_rate: u64,
    ) -> Result<()> {
        instructions::create_pool::handler(
            ctx,
            pool_id,
            max_stake_amount,
            min_lock_period,
            slashing_rate,
            base_reward_rate,
        )
    }

    /// Creates the pool's principal vault.
    ///
    /// # Errors
    /// Returns an error if caller is not the pool admin or the vault exists.
    pub fn init_pool_vault(ctx: Context<InitPoolVault>, pool_id: u64) -> Result<()> {
        instructions::init_vault::init_pool_vault_handler(ctx, pool_id)
    }

    /// Creates the pool's reward vault.
    ///
    /// # Errors
    /// Returns an error if caller is not the pool admin or the vault exists.
    pub fn init_reward_vault(ctx: Context<InitRewardVault>, pool_id: u64) -> Result<()> {
        instructions::init_vault::init_reward_vault_handler(ctx, pool_id)
    }

    /// Admin function to adjust a pool's reward economics.
    ///
    /// # Arguments
    /// * `ctx` - The context containing pool admin accounts
    /// * `pool_id` - Pool to update
    /// * `base_reward_rate` - New base rate
    /// * `performance_multiplier` - New multiplier (basis points)
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the pool admin
    /// - Multiplier exceeds the maximum
    pub fn update_pool(
        ctx: Context<PoolAdmin>,
        pool_id: u64,
        base_reward_rate: u64,
        performance_multiplier: u64,
    ) -> Result<()> {
        instructions::admin::update_pool_handler(
            ctx,
            pool_id,
            base_reward_rate,
            performance_multiplier,
        )
    }

    /// Admin function to activate or deactivate a pool.
    ///
    /// # Errors
    /// Returns an error if caller is not the pool admin.
    pub fn set_pool_active(ctx: Context<PoolAdmin>, pool_id: u64, is_active: bool) -> Result<()> {
        instructions::admin::set_pool_active_handler(ctx, pool_id, is_active)
    }

    /// Funds a pool's reward vault.
    ///
    /// # Arguments
    /// * `ctx` - The context containing funding accounts
    /// * `pool_id` - Pool whose reward vault receives the tokens
    /// * `amount` - Amount of tokens to deposit
    ///
    /// # Errors
    /// Returns an error if amount is zero or the reward vault does not match.
    pub fn fund_reward_vault(
        ctx: Context<FundRewardVault>,
        pool_id: u64,
        amount: u64,
    ) -> Result<()> {
        instructions::fund_rewards::handler(ctx, pool_id, amount)
    }

    /// Stakes tokens into a pool.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for staking
    /// * `pool_id` - Pool to stake into
    /// * `amount` - Amount of tokens to stake
    /// * `lock_duration` - Requested lock in seconds
    ///
    /// # Errors
    /// Returns an error if:
    /// - Program is paused or the pool is inactive
    /// - Amount is zero
    /// - Pool capacity would be exceeded
    /// - Vault does not match the pool
    pub fn stake(
        ctx: Context<Stake>,
        pool_id: u64,
        amount: u64,
        lock_duration: i64,
    ) -> Result<()> {
        instructions::stake::handler(ctx, pool_id, amount, lock_duration)
    }

    /// Unstakes tokens from the user's position.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for unstaking
    /// * `pool_id` - Pool to unstake from
    /// * `amount` - Amount of principal to withdraw
    ///
    /// # Errors
    /// Returns an error if:
    /// - Program is paused
    /// - Amount is zero or exceeds the staked balance
    /// - Position was already slashed and is still locked
    pub fn unstake(ctx: Context<Unstake>, pool_id: u64, amount: u64) -> Result<()> {
        instructions::unstake::handler(ctx, pool_id, amount)
    }

    /// Claims accumulated rewards without unstaking.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for claiming
    /// * `pool_id` - Pool to claim from
    ///
    /// # Errors
    /// Returns an error if:
    /// - Program is paused
    /// - Rewards are owed but the reward vault is empty
    pub fn claim_rewards(ctx: Context<ClaimRewards>, pool_id: u64) -> Result<()> {
        instructions::claim_rewards::handler(ctx, pool_id)
    }
}
