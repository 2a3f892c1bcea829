//! Admin instruction handlers.
//!
//! Global pause plus per-pool economics and soft delete.
//!
//! ## Security Guarantees
//! - Pause requires signer == program_state.admin
//! - Pool updates require signer == pool.admin
//! - PDA validation ensures the correct singleton and pool

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::events::{PauseToggled, PoolUpdated};
use crate::state::{ProgramState, StakingPool};

/// Accounts required to pause or resume the program.
#[derive(Accounts)]
pub struct SetPaused<'info> {
    /// The program admin.
    pub admin: Signer<'info>,

    /// SECURITY: PDA validation + has_one admin.
    #[account(
        mut,
        seeds = [PROGRAM_STATE_SEED],
        bump = program_state.bump,
        has_one = admin @ StakingError::Unauthorized
    )]
    pub program_state: Account<'info, ProgramState>,
}

/// Accounts required for pool-level admin operations.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct PoolAdmin<'info> {
    /// The pool admin.
    pub admin: Signer<'info>,

    /// SECURITY: PDA derived from the pool id + has_one admin.
    #[account(
        mut,
        seeds = [POOL_SEED, pool_id.to_le_bytes().as_ref()],
        bump = pool.bump,
        has_one = admin @ StakingError::Unauthorized
    )]
    pub pool: Account<'info, StakingPool>,
}

/// Set the global pause flag.
///
/// While paused, stake, unstake, claim_rewards and create_pool all fail with
/// `ProgramPaused`. Vault and pool admin instructions stay available.
pub fn set_paused_handler(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
    let program_state = &mut ctx.accounts.program_state;

    let previous_state = program_state.is_paused;
    program_state.is_paused = paused;

    msg!(
        "Program {} (was {})",
        if paused { "PAUSED" } else { "RESUMED" },
        if previous_state { "paused" } else { "active" }
    );
    msg!("Admin: {}", ctx.accounts.admin.key());

    emit!(PauseToggled {
        admin: ctx.accounts.admin.key(),
        is_paused: paused,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

/// Change a pool's reward rate and performance multiplier.
///
/// The pool's reward index is checkpointed at the old rate first, so
/// rewards already earned keep their value and only future accrual uses the
/// new rate.
///
/// # Errors
/// `InvalidAmount` if the rate exceeds `MAX_BASE_REWARD_RATE` or the
/// multiplier exceeds `MAX_PERFORMANCE_MULTIPLIER`.
pub fn update_pool_handler(
    ctx: Context<PoolAdmin>,
    _pool_id: u64,
    base_reward_rate: u64,
    performance_multiplier: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;

    msg!(
        "Pool {} economics - Old: rate={}, multiplier={}bp",
        pool.pool_id,
        pool.base_reward_rate,
        pool.performance_multiplier
    );

    pool.update_economics(base_reward_rate, performance_multiplier, now)?;
    msg!("Reward index checkpointed at {}", pool.reward_per_token);

    msg!(
        "Pool {} economics - New: rate={}, multiplier={}bp",
        pool.pool_id,
        base_reward_rate,
        performance_multiplier
    );

    emit!(PoolUpdated {
        pool: pool_key,
        base_reward_rate,
        performance_multiplier,
        is_active: pool.is_active,
        timestamp: now,
    });

    Ok(())
}

/// Activate or deactivate a pool.
///
/// Deactivation is a soft delete: the account is kept, new stakes fail with
/// `PoolInactive`, and existing positions can still unstake and claim.
pub fn set_pool_active_handler(
    ctx: Context<PoolAdmin>,
    _pool_id: u64,
    is_active: bool,
) -> Result<()> {
    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;
    pool.is_active = is_active;

    msg!(
        "Pool {} {}",
        pool.pool_id,
        if is_active { "ACTIVATED" } else { "DEACTIVATED" }
    );

    emit!(PoolUpdated {
        pool: pool_key,
        base_reward_rate: pool.base_reward_rate,
        performance_multiplier: pool.performance_multiplier,
        is_active,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
