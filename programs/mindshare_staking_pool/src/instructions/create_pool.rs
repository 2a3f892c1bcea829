//! Create pool instruction handler.
//!
//! Allocates the pool metadata account. Vaults are created afterwards by
//! `init_pool_vault` and `init_reward_vault`.

use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::*;
use crate::error::StakingError;
use crate::events::PoolCreated;
use crate::state::{PoolConfig, ProgramState, StakingPool};

/// Accounts required for pool creation.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct CreatePool<'info> {
    /// The program admin, pays for the pool account.
    #[account(mut)]
    pub admin: Signer<'info>,

    /// SECURITY: only the global admin can create pools.
    #[account(
        mut,
        seeds = [PROGRAM_STATE_SEED],
        bump = program_state.bump,
        has_one = admin @ StakingError::Unauthorized
    )]
    pub program_state: Account<'info, ProgramState>,

    /// The pool to create.
    /// `init` rejects a pool id that is already taken.
    #[account(
        init,
        payer = admin,
        space = StakingPool::LEN,
        seeds = [POOL_SEED, pool_id.to_le_bytes().as_ref()],
        bump
    )]
    pub pool: Account<'info, StakingPool>,

    /// Mint staked in this pool. Locked into the pool permanently.
    pub token_mint: Account<'info, Mint>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,
}

/// Create a staking pool.
///
/// # Arguments
/// * `pool_id` - Pool identifier, part of the pool PDA seeds
/// * `max_stake_amount` - Capacity of the pool
/// * `min_lock_period` - Minimum lock in seconds
/// * `slashing_rate` - Early exit penalty (basis points)
/// * `base_reward_rate` - Reward rate scaled by `PRECISION_MULT`
///
/// # Errors
/// `ProgramPaused`, `InvalidAmount`, `InvalidLockPeriod`, `MathOverflow`.
pub fn handler(
    ctx: Context<CreatePool>,
    pool_id: u64,
    max_stake_amount: u64,
    min_lock_period: i64,
    slashing_rate: u16,
    base_reward_rate: u64,
) -> Result<()> {
    ctx.accounts.program_state.require_not_paused()?;

    let config = PoolConfig {
        max_stake_amount,
        min_lock_period,
        slashing_rate,
        base_reward_rate,
    };
    config.validate()?;

    let clock = Clock::get()?;
    let admin = ctx.accounts.admin.key();
    let token_mint = ctx.accounts.token_mint.key();
    let pool_key = ctx.accounts.pool.key();

    let total_pools = ctx.accounts.program_state.register_pool()?;

    let pool = &mut ctx.accounts.pool;
    pool.initialize(
        pool_id,
        token_mint,
        admin,
        config,
        clock.unix_timestamp,
        ctx.bumps.pool,
    )?;

    msg!("Pool {} created", pool_id);
    msg!("Mint: {}", token_mint);
    msg!(
        "Max stake: {}, min lock: {}s, slashing: {}bp, base rate: {}",
        max_stake_amount,
        min_lock_period,
        slashing_rate,
        base_reward_rate
    );
    msg!("Total pools: {}", total_pools);

    emit!(PoolCreated {
        pool: pool_key,
        pool_id,
        token_mint,
        max_stake_amount,
        min_lock_period,
        slashing_rate,
        base_reward_rate,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
