//! Claim rewards instruction handler.
//!
//! Pays accrued rewards from the reward vault without touching principal.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardsClaimed;
use crate::pda;
use crate::state::{ProgramState, StakingPool, UserStake};

/// Accounts required for claiming rewards.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct ClaimRewards<'info> {
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

    /// User's token account for receiving rewards.
    #[account(
        mut,
        constraint = user_token_account.mint == token_mint.key() @ StakingError::InvalidTokenMint,
        constraint = user_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Pool's reward vault. Checked against pool.reward_vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Claim accumulated rewards.
///
/// Pays as much of the owed amount as the reward vault holds; the rest is
/// kept in `pending_rewards` for a later claim.
///
/// # Errors
/// `ProgramPaused`, `Unauthorized`, `InvalidPool`, `InvalidPoolVault`,
/// `InvalidTimestamp`, `InsufficientRewardFunds`.
pub fn handler(ctx: Context<ClaimRewards>, _pool_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let user_key = ctx.accounts.user.key();

    let quote = ctx.accounts.user_stake.plan_claim(
        &ctx.accounts.pool,
        &user_key,
        &ctx.accounts.reward_vault.key(),
        ctx.accounts.reward_vault.amount,
        now,
    )?;

    if quote.paid > 0 {
        let pool_id_bytes = ctx.accounts.pool.pool_id.to_le_bytes();
        let bump = [ctx.accounts.pool.bump];
        let seeds = pda::pool_signer_seeds(&pool_id_bytes, &bump);
        let signer_seeds = &[&seeds[..]];

        let cpi_accounts = TransferChecked {
            from: ctx.accounts.reward_vault.to_account_info(),
            mint: ctx.accounts.token_mint.to_account_info(),
            to: ctx.accounts.user_token_account.to_account_info(),
            authority: ctx.accounts.pool.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        token::transfer_checked(cpi_ctx, quote.paid, ctx.accounts.token_mint.decimals)?;
    }

    let user_stake = &mut ctx.accounts.user_stake;
    user_stake.apply_claim(&quote, now);

    msg!("Claimed {} reward tokens", quote.paid);
    if quote.deferred > 0 {
        msg!("Reward vault short, {} deferred", quote.deferred);
    }

    emit!(RewardsClaimed {
        user: user_key,
        pool: ctx.accounts.pool.key(),
        paid: quote.paid,
        deferred: quote.deferred,
        timestamp: now,
    });

    Ok(())
}
