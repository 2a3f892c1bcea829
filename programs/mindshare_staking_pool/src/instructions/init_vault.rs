//! Vault initialization handlers.
//!
//! Each pool owns two token escrows created after the pool itself: the
//! principal vault and the reward vault. Both are PDAs whose token
//! authority is the pool PDA, and each is recorded on the pool exactly once.
//!
//! ## Security Guarantees
//! - Only pool.admin can create vaults
//! - Vault mint is bound to pool.token_mint
//! - Recorded address is checked against the derived escrow address

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::VaultInitialized;
use crate::pda;
use crate::state::StakingPool;

/// Accounts required to create a pool's principal vault.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct InitPoolVault<'info> {
    /// The pool admin, pays for the vault.
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool_id.to_le_bytes().as_ref()],
        bump = pool.bump,
        has_one = admin @ StakingError::Unauthorized,
        has_one = token_mint @ StakingError::InvalidTokenMint
    )]
    pub pool: Account<'info, StakingPool>,

    /// SECURITY:
    /// - PDA derived from POOL_VAULT_SEED + pool
    /// - Authority set to the pool PDA (cannot be changed)
    #[account(
        init,
        payer = admin,
        seeds = [POOL_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = pool
    )]
    pub pool_vault: Account<'info, TokenAccount>,

    pub token_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

/// Accounts required to create a pool's reward vault.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct InitRewardVault<'info> {
    /// The pool admin, pays for the vault.
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool_id.to_le_bytes().as_ref()],
        bump = pool.bump,
        has_one = admin @ StakingError::Unauthorized,
        has_one = token_mint @ StakingError::InvalidTokenMint
    )]
    pub pool: Account<'info, StakingPool>,

    /// SECURITY: same protections as the principal vault.
    #[account(
        init,
        payer = admin,
        seeds = [REWARD_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = pool
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    pub token_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

/// Create and record the principal vault.
///
/// # Errors
/// `InvalidPoolVault` if the pool already has a principal vault.
pub fn init_pool_vault_handler(ctx: Context<InitPoolVault>, _pool_id: u64) -> Result<()> {
    let pool_key = ctx.accounts.pool.key();
    let vault = ctx.accounts.pool_vault.key();

    require_keys_eq!(
        ctx.accounts.pool_vault.owner,
        pool_key,
        StakingError::InvalidPoolVault
    );

    let (derived, _) = pda::pool_vault_address(&pool_key);
    ctx.accounts.pool.bind_pool_vault(vault, derived)?;

    msg!("Pool {} vault initialized: {}", ctx.accounts.pool.pool_id, vault);

    emit!(VaultInitialized {
        pool: pool_key,
        vault,
        is_reward_vault: false,
    });

    Ok(())
}

/// Create and record the reward vault.
///
/// # Errors
/// `InvalidPoolVault` if the pool already has a reward vault.
pub fn init_reward_vault_handler(ctx: Context<InitRewardVault>, _pool_id: u64) -> Result<()> {
    let pool_key = ctx.accounts.pool.key();
    let vault = ctx.accounts.reward_vault.key();

    require_keys_eq!(
        ctx.accounts.reward_vault.owner,
        pool_key,
        StakingError::InvalidPoolVault
    );

    let (derived, _) = pda::reward_vault_address(&pool_key);
    ctx.accounts.pool.bind_reward_vault(vault, derived)?;

    msg!("Pool {} reward vault initialized: {}", ctx.accounts.pool.pool_id, vault);

    emit!(VaultInitialized {
        pool: pool_key,
        vault,
        is_reward_vault: true,
    });

    Ok(())
}
