//! Fund reward vault instruction handler.
//!
//! Deposits reward tokens into a pool's reward vault. Permissionless.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardsFunded;
use crate::state::StakingPool;

/// Accounts required for funding a reward vault.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct FundRewardVault<'info> {
    /// The funder (anyone can fund).
    #[account(mut)]
    pub funder: Signer<'info>,

    #[account(
        seeds = [POOL_SEED, pool_id.to_le_bytes().as_ref()],
        bump = pool.bump,
        has_one = token_mint @ StakingError::InvalidTokenMint
    )]
    pub pool: Account<'info, StakingPool>,

    pub token_mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = funder_token_account.mint == token_mint.key() @ StakingError::InvalidTokenMint,
        constraint = funder_token_account.owner == funder.key() @ StakingError::Unauthorized
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    /// Checked against pool.reward_vault in the handler.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Fund the reward vault.
///
/// # Errors
/// `InvalidAmount` for a zero deposit, `VaultNotInitialized` /
/// `InvalidPoolVault` for a missing or mismatched reward vault.
pub fn handler(ctx: Context<FundRewardVault>, _pool_id: u64, amount: u64) -> Result<()> {
    ctx.accounts
        .pool
        .check_funding(&ctx.accounts.reward_vault.key(), amount)?;

    let cpi_accounts = TransferChecked {
        from: ctx.accounts.funder_token_account.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        to: ctx.accounts.reward_vault.to_account_info(),
        authority: ctx.accounts.funder.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer_checked(cpi_ctx, amount, ctx.accounts.token_mint.decimals)?;

    // Reload vault to get updated balance
    ctx.accounts.reward_vault.reload()?;
    let vault_balance = ctx.accounts.reward_vault.amount;

    msg!("Reward vault funded with {} tokens", amount);
    msg!("New reward vault balance: {}", vault_balance);
    msg!("Funder: {}", ctx.accounts.funder.key());

    emit!(RewardsFunded {
        pool: ctx.accounts.pool.key(),
        funder: ctx.accounts.funder.key(),
        amount,
        vault_balance,
    });

    Ok(())
}
