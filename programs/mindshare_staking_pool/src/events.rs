use anchor_lang::prelude::*;

/// Emitted once when the program state singleton is created
#[event]
pub struct ProgramInitialized {
    pub admin: Pubkey,
    pub timestamp: i64,
}

/// Emitted when the admin pauses or resumes the program
#[event]
pub struct PauseToggled {
    pub admin: Pubkey,
    pub is_paused: bool,
    pub timestamp: i64,
}

/// Emitted when a pool's metadata account is created
#[event]
pub struct PoolCreated {
    pub pool: Pubkey,
    pub pool_id: u64,
    pub token_mint: Pubkey,
    pub max_stake_amount: u64,
    pub min_lock_period: i64,
    pub slashing_rate: u16,
    pub base_reward_rate: u64,
    pub timestamp: i64,
}

/// Emitted when a principal or reward vault is bound to a pool
#[event]
pub struct VaultInitialized {
    pub pool: Pubkey,
    pub vault: Pubkey,
    pub is_reward_vault: bool,
}

/// Emitted when the admin changes a pool's economics or status
#[event]
pub struct PoolUpdated {
    pub pool: Pubkey,
    pub base_reward_rate: u64,
    pub performance_multiplier: u64,
    pub is_active: bool,
    pub timestamp: i64,
}

/// Emitted when reward tokens are deposited into a reward vault
#[event]
pub struct RewardsFunded {
    pub pool: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}

/// Emitted when a user stakes tokens
#[event]
pub struct Staked {
    pub user: Pubkey,
    pub pool: Pubkey,
    pub amount: u64,
    pub position_total: u64,
    pub pool_total: u64,
    pub lock_until: i64,
    pub timestamp: i64,
}

/// Emitted when a user unstakes tokens
#[event]
pub struct Unstaked {
    pub user: Pubkey,
    pub pool: Pubkey,
    pub amount: u64,
    pub returned: u64,
    pub penalty: u64,
    pub remaining_stake: u64,
    pub timestamp: i64,
}

/// Emitted when a user claims rewards
#[event]
pub struct RewardsClaimed {
    pub user: Pubkey,
    pub pool: Pubkey,
    pub paid: u64,
    pub deferred: u64,
    pub timestamp: i64,
}
