//! Stake instruction handler.
//!
//! Moves tokens from the user into the pool vault and opens or tops up the
//! user's position.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::Staked;
use crate::state::{ProgramState, StakingPool, UserStake};

/// Accounts required for staking.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct Stake<'info> {
    /// The user staking tokens.
    #[account(mut)]
    pub user: Signer<'info>,

    /// Program state. Rejects the call while paused, ahead of the
    /// remaining account checks.
    #[account(
        seeds = [PROGRAM_STATE_SEED],
        bump = program_state.bump,
        constraint = !program_state.is_paused @ StakingError::ProgramPaused
    )]
    pub program_state: Account<'info, ProgramState>,

    /// The pool.
    #[account(
        mut,
        seeds = [POOL_SEED, pool_id.to_le_bytes().as_ref()],
        bump = pool.bump,
        has_one = token_mint @ StakingError::InvalidTokenMint
    )]
    pub pool: Account<'info, StakingPool>,

    /// User's position (created on first stake).
    #[account(
        init_if_needed,
        payer = user,
        space = UserStake::LEN,
        seeds = [USER_STAKE_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_stake: Account<'info, UserStake>,

    /// The pool's token mint.
    pub token_mint: Account<'info, Mint>,

    /// User's token account for the staking token.
    #[account(
        mut,
        constraint = user_token_account.mint == token_mint.key() @ StakingError::InvalidTokenMint,
        constraint = user_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Pool's principal vault. Checked against pool.pool_vault.
    #[account(mut)]
    pub pool_vault: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

/// Stake tokens into the pool.
///
/// # Arguments
/// * `pool_id` - Pool to stake into
/// * `amount` - Amount of tokens to stake
/// * `lock_duration` - Requested lock in seconds; the pool minimum applies
///   if it is longer. Ignored for top-ups.
///
/// # Errors
/// `ProgramPaused`, `PoolInactive`, `InvalidAmount`, `InvalidLockPeriod`,
/// `VaultNotInitialized`, `InvalidPoolVault`, `PoolCapacityExceeded`,
/// `MathOverflow`.
pub fn handler(ctx: Context<Stake>, _pool_id: u64, amount: u64, lock_duration: i64) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let user_key = ctx.accounts.user.key();
    let pool_key = ctx.accounts.pool.key();

    let update = ctx.accounts.user_stake.plan_stake(
        &ctx.accounts.pool,
        &user_key,
        &ctx.accounts.pool_vault.key(),
        amount,
        lock_duration,
        now,
    )?;

    // Transfer tokens from user to vault
    let cpi_accounts = TransferChecked {
        from: ctx.accounts.user_token_account.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        to: ctx.accounts.pool_vault.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer_checked(cpi_ctx, amount, ctx.accounts.token_mint.decimals)?;

    let pool = &mut ctx.accounts.pool;
    pool.current_staked = update.pool_total;
    let pool_id = pool.pool_id;

    let user_stake = &mut ctx.accounts.user_stake;
    user_stake.apply_stake(
        user_key,
        pool_id,
        lock_duration,
        &update,
        now,
        ctx.bumps.user_stake,
    );

    if update.opens_position {
        msg!("Opened position in pool {}, locked until {}", pool_id, update.lock_until);
    }
    msg!("Staked {} tokens", amount);
    msg!("Total staked by user: {}", update.stake_amount);
    msg!("Pool total: {}", update.pool_total);

    emit!(Staked {
        user: user_key,
        pool: pool_key,
        amount,
        position_total: update.stake_amount,
        pool_total: update.pool_total,
        lock_until: update.lock_until,
        timestamp: now,
    });

    Ok(())
}
