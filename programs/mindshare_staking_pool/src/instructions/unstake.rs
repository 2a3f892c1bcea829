//! Unstake instruction handler.
//!
//! Withdraws principal from the pool vault. Exits before `lock_until` are
//! slashed; the penalty stays in the vault.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::Unstaked;
use crate::pda;
use crate::state::{ProgramState, StakingPool, UserStake};

/// Accounts required for unstaking.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct Unstake<'info> {
    /// The position owner.
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

    /// The pool, signs the vault transfer.
    #[account(
        mut,
        seeds = [POOL_SEED, pool_id.to_le_bytes().as_ref()],
        bump = pool.bump,
        has_one = token_mint @ StakingError::InvalidTokenMint
    )]
    pub pool: Account<'info, StakingPool>,

    /// User's position.
    #[account(
        mut,
        seeds = [USER_STAKE_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump = user_stake.bump
    )]
    pub user_stake: Account<'info, UserStake>,

    pub token_mint: Account<'info, Mint>,

    /// User's token account for receiving unstaked tokens.
    #[account(
        mut,
        constraint = user_token_account.mint == token_mint.key() @ StakingError::InvalidTokenMint,
        constraint = user_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Pool's principal vault. Checked against pool.pool_vault.
    #[account(mut)]
    pub pool_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Unstake tokens from the pool.
///
/// # Arguments
/// * `pool_id` - Pool to unstake from
/// * `amount` - Principal to withdraw; the user receives `amount - penalty`
///
/// # Errors
/// `ProgramPaused`, `Unauthorized`, `InvalidPool`, `InvalidPoolVault`,
/// `InvalidAmount`, `InsufficientStake`, `StakeSlashed`, `MathOverflow`.
pub fn handler(ctx: Context<Unstake>, _pool_id: u64, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let user_key = ctx.accounts.user.key();
    let pool_key = ctx.accounts.pool.key();

    let quote = ctx.accounts.user_stake.plan_unstake(
        &ctx.accounts.pool,
        &user_key,
        &ctx.accounts.pool_vault.key(),
        amount,
        now,
    )?;

    if quote.returned > 0 {
        // Transfer tokens from vault to user using PDA signer
        let pool_id_bytes = ctx.accounts.pool.pool_id.to_le_bytes();
        let bump = [ctx.accounts.pool.bump];
        let seeds = pda::pool_signer_seeds(&pool_id_bytes, &bump);
        let signer_seeds = &[&seeds[..]];

        let cpi_accounts = TransferChecked {
            from: ctx.accounts.pool_vault.to_account_info(),
            mint: ctx.accounts.token_mint.to_account_info(),
            to: ctx.accounts.user_token_account.to_account_info(),
            authority: ctx.accounts.pool.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        token::transfer_checked(cpi_ctx, quote.returned, ctx.accounts.token_mint.decimals)?;
    }

    let pool = &mut ctx.accounts.pool;
    pool.current_staked = quote.pool_total;

    let user_stake = &mut ctx.accounts.user_stake;
    user_stake.apply_unstake(&quote, now);

    if quote.is_early {
        msg!(
            "Early unstake: {} slashed, {} returned",
            quote.penalty,
            quote.returned
        );
    } else {
        msg!("Unstaked {} tokens", amount);
    }
    msg!("Remaining staked: {}", quote.stake_amount);
    msg!("Pending rewards: {}", quote.pending_rewards);

    emit!(Unstaked {
        user: user_key,
        pool: pool_key,
        amount,
        returned: quote.returned,
        penalty: quote.penalty,
        remaining_stake: quote.stake_amount,
        timestamp: now,
    });

    Ok(())
}
