use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;

/// Per-pool configuration and live accounting.
/// PDA: ["pool", pool_id (le bytes)]
#[account]
#[derive(Default)]
pub struct StakingPool {
    pub pool_id: u64,

    /// Mint of the token staked and paid out as rewards
    pub token_mint: Pubkey,

    /// Principal vault. Default until `init_pool_vault`.
    /// PDA: ["pool_vault", pool]
    pub pool_vault: Pubkey,

    /// Reward vault. Default until `init_reward_vault`.
    /// PDA: ["reward_vault", pool]
    pub reward_vault: Pubkey,

    pub admin: Pubkey,

    pub max_stake_amount: u64,

    /// Sum of `stake_amount` over every position in this pool
    pub current_staked: u64,

    /// Minimum lock in seconds applied to every new position
    pub min_lock_period: i64,

    /// Early-exit penalty in basis points
    pub slashing_rate: u16,

    /// Reward per staked token per second, scaled by `PRECISION_MULT`
    pub base_reward_rate: u64,

    /// Reward multiplier in basis points (10000 = 1.0x)
    pub performance_multiplier: u64,

    /// Cumulative reward index: sum of elapsed * base_reward_rate *
    /// performance_multiplier up to `last_accrual_at`, unscaled
    pub reward_per_token: u128,

    /// Time `reward_per_token` was last rolled forward
    pub last_accrual_at: i64,

    pub created_at: i64,

    /// Soft-delete flag; inactive pools accept no new stake
    pub is_active: bool,

    /// PDA bump seed
    pub bump: u8,
}

/// Parameters supplied to `create_pool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_stake_amount: u64,
    pub min_lock_period: i64,
    pub slashing_rate: u16,
    pub base_reward_rate: u64,
}

impl PoolConfig {
    pub fn validate(&self) -> Result<()> {
        require!(self.max_stake_amount > 0, StakingError::InvalidAmount);
        require!(self.min_lock_period >= 0, StakingError::InvalidLockPeriod);
        require!(
            self.slashing_rate <= MAX_SLASHING_RATE,
            StakingError::InvalidAmount
        );
        require!(
            self.base_reward_rate <= MAX_BASE_REWARD_RATE,
            StakingError::InvalidAmount
        );
        Ok(())
    }
}

impl StakingPool {
    pub const LEN: usize = 8 + // discriminator
        8 +  // pool_id
        32 + // token_mint
        32 + // pool_vault
        32 + // reward_vault
        32 + // admin
        8 +  // max_stake_amount
        8 +  // current_staked
        8 +  // min_lock_period
        2 +  // slashing_rate
        8 +  // base_reward_rate
        8 +  // performance_multiplier
        16 + // reward_per_token (u128)
        8 +  // last_accrual_at
        8 +  // created_at
        1 +  // is_active
        1; // bump

    pub fn initialize(
        &mut self,
        pool_id: u64,
        token_mint: Pubkey,
        admin: Pubkey,
        config: PoolConfig,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        config.validate()?;

        self.pool_id = pool_id;
        self.token_mint = token_mint;
        self.pool_vault = Pubkey::default();
        self.reward_vault = Pubkey::default();
        self.admin = admin;
        self.max_stake_amount = config.max_stake_amount;
        self.current_staked = 0;
        self.min_lock_period = config.min_lock_period;
        self.slashing_rate = config.slashing_rate;
        self.base_reward_rate = config.base_reward_rate;
        self.performance_multiplier = DEFAULT_PERFORMANCE_MULTIPLIER;
        self.reward_per_token = 0;
        self.last_accrual_at = now;
        self.created_at = now;
        self.is_active = true;
        self.bump = bump;
        Ok(())
    }

    pub fn require_active(&self) -> Result<()> {
        require!(self.is_active, StakingError::PoolInactive);
        Ok(())
    }

    /// Records the principal vault. Settable exactly once, and only to the
    /// address derived for this pool.
    pub fn bind_pool_vault(&mut self, vault: Pubkey, derived: Pubkey) -> Result<()> {
        require_keys_eq!(self.pool_vault, Pubkey::default(), StakingError::InvalidPoolVault);
        require_keys_eq!(vault, derived, StakingError::InvalidPoolVault);
        self.pool_vault = vault;
        Ok(())
    }

    /// Records the reward vault. Same rules as [`Self::bind_pool_vault`].
    pub fn bind_reward_vault(&mut self, vault: Pubkey, derived: Pubkey) -> Result<()> {
        require_keys_eq!(self.reward_vault, Pubkey::default(), StakingError::InvalidPoolVault);
        require_keys_eq!(vault, derived, StakingError::InvalidPoolVault);
        self.reward_vault = vault;
        Ok(())
    }

    pub fn require_pool_vault(&self, vault: &Pubkey) -> Result<()> {
        require!(self.pool_vault != Pubkey::default(), StakingError::VaultNotInitialized);
        require_keys_eq!(*vault, self.pool_vault, StakingError::InvalidPoolVault);
        Ok(())
    }

    pub fn require_reward_vault(&self, vault: &Pubkey) -> Result<()> {
        require!(self.reward_vault != Pubkey::default(), StakingError::VaultNotInitialized);
        require_keys_eq!(*vault, self.reward_vault, StakingError::InvalidPoolVault);
        Ok(())
    }

    /// Validates a deposit into the reward vault.
    pub fn check_funding(&self, reward_vault: &Pubkey, amount: u64) -> Result<()> {
        require!(amount > 0, StakingError::InvalidAmount);
        self.require_reward_vault(reward_vault)
    }

    pub fn remaining_capacity(&self) -> u64 {
        self.max_stake_amount.saturating_sub(self.current_staked)
    }

    /// Pool total after depositing `amount`. Does not mutate.
    pub fn checked_deposit(&self, amount: u64) -> Result<u64> {
        let total = self
            .current_staked
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        require!(
            total <= self.max_stake_amount,
            StakingError::PoolCapacityExceeded
        );
        Ok(total)
    }

    /// Pool total after withdrawing `amount`. Does not mutate.
    pub fn checked_withdrawal(&self, amount: u64) -> Result<u64> {
        self.current_staked
            .checked_sub(amount)
            .ok_or_else(|| error!(StakingError::MathOverflow))
    }

    /// Lock expiry for a position opened at `now`. The pool minimum wins
    /// over a shorter requested duration.
    pub fn lock_until(&self, now: i64, lock_duration: i64) -> Result<i64> {
        require!(lock_duration >= 0, StakingError::InvalidLockPeriod);
        let effective = lock_duration.max(self.min_lock_period);
        now.checked_add(effective)
            .ok_or_else(|| error!(StakingError::MathOverflow))
    }

    /// Penalty kept by the vault when `amount` leaves before the lock ends.
    /// Rounds down.
    pub fn slashing_penalty(&self, amount: u64) -> Result<u64> {
        let penalty = (amount as u128)
            .checked_mul(self.slashing_rate as u128)
            .ok_or(StakingError::MathOverflow)?
            / BASIS_POINTS_DENOMINATOR as u128;

        // slashing_rate <= 10000, so the penalty never exceeds the amount
        u64::try_from(penalty).map_err(|_| error!(StakingError::MathOverflow))
    }

    /// Index growth per second at the current economics.
    fn emission_rate(&self) -> u128 {
        (self.base_reward_rate as u128).saturating_mul(self.performance_multiplier as u128)
    }

    /// `reward_per_token` rolled forward to `now` without mutating.
    pub fn reward_per_token_at(&self, now: i64) -> u128 {
        let elapsed = now.saturating_sub(self.last_accrual_at).max(0) as u128;
        self.reward_per_token
            .saturating_add(elapsed.saturating_mul(self.emission_rate()))
    }

    /// Locks in accrual up to `now` at the current rate.
    pub fn checkpoint(&mut self, now: i64) {
        self.reward_per_token = self.reward_per_token_at(now);
        self.last_accrual_at = self.last_accrual_at.max(now);
    }

    /// Reward earned by `stake_amount` since the index stood at `reward_debt`.
    ///
    /// reward = stake * (index_now - reward_debt) / (10000 * PRECISION_MULT)
    ///
    /// With constant economics this is
    /// stake * elapsed * base_rate * multiplier / (10000 * PRECISION_MULT).
    /// Saturates; never fails.
    pub fn rewards_since(&self, stake_amount: u64, reward_debt: u128, now: i64) -> u64 {
        let delta = self.reward_per_token_at(now).saturating_sub(reward_debt);
        let reward = (stake_amount as u128).saturating_mul(delta)
            / (BASIS_POINTS_DENOMINATOR as u128 * PRECISION_MULT);
        u64::try_from(reward).unwrap_or(u64::MAX)
    }

    /// Changes the reward economics. Accrual up to `now` is checkpointed at
    /// the old rate first.
    pub fn update_economics(
        &mut self,
        base_reward_rate: u64,
        performance_multiplier: u64,
        now: i64,
    ) -> Result<()> {
        require!(
            base_reward_rate <= MAX_BASE_REWARD_RATE,
            StakingError::InvalidAmount
        );
        require!(
            performance_multiplier <= MAX_PERFORMANCE_MULTIPLIER,
            StakingError::InvalidAmount
        );
        self.checkpoint(now);
        self.base_reward_rate = base_reward_rate;
        self.performance_multiplier = performance_multiplier;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn config() -> PoolConfig {
        PoolConfig {
            max_stake_amount: 1_000,
            min_lock_period: SECONDS_PER_DAY,
            slashing_rate: 500,
            base_reward_rate: 500,
        }
    }

    fn pool() -> StakingPool {
        let mut pool = StakingPool::default();
        pool.initialize(1, Pubkey::new_unique(), Pubkey::new_unique(), config(), 100, 253)
            .unwrap();
        pool
    }

    #[test]
    fn test_staking_pool_size() {
        let serialized = StakingPool::default().try_to_vec().unwrap();
        assert_eq!(serialized.len() + 8, StakingPool::LEN);
    }

    #[test]
    fn test_initialize_defaults() {
        let pool = pool();
        assert!(pool.is_active);
        assert_eq!(pool.current_staked, 0);
        assert_eq!(pool.created_at, 100);
        assert_eq!(pool.reward_per_token, 0);
        assert_eq!(pool.last_accrual_at, 100);
        assert_eq!(pool.performance_multiplier, DEFAULT_PERFORMANCE_MULTIPLIER);
        assert_eq!(pool.pool_vault, Pubkey::default());
        assert_eq!(pool.reward_vault, Pubkey::default());
    }

    #[test]
    fn test_config_validation() {
        let mut bad = config();
        bad.max_stake_amount = 0;
        assert_eq!(bad.validate().unwrap_err(), Error::from(StakingError::InvalidAmount));

        let mut bad = config();
        bad.min_lock_period = -1;
        assert_eq!(bad.validate().unwrap_err(), Error::from(StakingError::InvalidLockPeriod));

        let mut bad = config();
        bad.slashing_rate = 10_001;
        assert_eq!(bad.validate().unwrap_err(), Error::from(StakingError::InvalidAmount));

        let mut bad = config();
        bad.base_reward_rate = MAX_BASE_REWARD_RATE + 1;
        assert_eq!(bad.validate().unwrap_err(), Error::from(StakingError::InvalidAmount));

        let mut edge = config();
        edge.base_reward_rate = MAX_BASE_REWARD_RATE;
        edge.slashing_rate = 10_000;
        edge.min_lock_period = 0;
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn test_vaults_bind_once() {
        let mut pool = pool();
        let vault = Pubkey::new_unique();

        assert_eq!(
            pool.bind_pool_vault(vault, Pubkey::new_unique()).unwrap_err(),
            Error::from(StakingError::InvalidPoolVault)
        );
        pool.bind_pool_vault(vault, vault).unwrap();
        assert_eq!(pool.pool_vault, vault);

        let other = Pubkey::new_unique();
        assert_eq!(
            pool.bind_pool_vault(other, other).unwrap_err(),
            Error::from(StakingError::InvalidPoolVault)
        );
        assert_eq!(pool.pool_vault, vault);

        let reward = Pubkey::new_unique();
        pool.bind_reward_vault(reward, reward).unwrap();
        assert!(pool.bind_reward_vault(reward, reward).is_err());
    }

    #[test]
    fn test_vault_checks() {
        let mut pool = pool();
        let vault = Pubkey::new_unique();
        assert_eq!(
            pool.require_pool_vault(&vault).unwrap_err(),
            Error::from(StakingError::VaultNotInitialized)
        );

        pool.bind_pool_vault(vault, vault).unwrap();
        assert!(pool.require_pool_vault(&vault).is_ok());
        assert_eq!(
            pool.require_pool_vault(&Pubkey::new_unique()).unwrap_err(),
            Error::from(StakingError::InvalidPoolVault)
        );
        assert_eq!(
            pool.require_reward_vault(&vault).unwrap_err(),
            Error::from(StakingError::VaultNotInitialized)
        );
    }

    #[test]
    fn test_capacity_boundary() {
        let mut pool = pool();
        pool.current_staked = 600;

        assert_eq!(pool.checked_deposit(400).unwrap(), 1_000);
        assert_eq!(
            pool.checked_deposit(401).unwrap_err(),
            Error::from(StakingError::PoolCapacityExceeded)
        );
        assert_eq!(pool.remaining_capacity(), 400);
        assert_eq!(pool.current_staked, 600);

        pool.current_staked = u64::MAX;
        pool.max_stake_amount = u64::MAX;
        assert_eq!(
            pool.checked_deposit(1).unwrap_err(),
            Error::from(StakingError::MathOverflow)
        );
    }

    #[test]
    fn test_lock_until_uses_pool_minimum() {
        let pool = pool();
        assert_eq!(pool.lock_until(1_000, 10).unwrap(), 1_000 + SECONDS_PER_DAY);
        assert_eq!(
            pool.lock_until(1_000, 3 * SECONDS_PER_DAY).unwrap(),
            1_000 + 3 * SECONDS_PER_DAY
        );
        assert_eq!(
            pool.lock_until(1_000, -5).unwrap_err(),
            Error::from(StakingError::InvalidLockPeriod)
        );
        assert_eq!(
            pool.lock_until(i64::MAX, 1).unwrap_err(),
            Error::from(StakingError::MathOverflow)
        );
    }

    #[test]
    fn test_slashing_penalty_rounds_down() {
        let mut pool = pool();
        assert_eq!(pool.slashing_penalty(1_000).unwrap(), 50);
        assert_eq!(pool.slashing_penalty(19).unwrap(), 0);
        assert_eq!(pool.slashing_penalty(39).unwrap(), 1);

        pool.slashing_rate = 10_000;
        assert_eq!(pool.slashing_penalty(u64::MAX).unwrap(), u64::MAX);

        pool.slashing_rate = 0;
        assert_eq!(pool.slashing_penalty(1_000).unwrap(), 0);
    }

    #[test]
    fn test_check_funding() {
        let mut pool = pool();
        let reward = Pubkey::new_unique();
        assert_eq!(
            pool.check_funding(&reward, 10).unwrap_err(),
            Error::from(StakingError::VaultNotInitialized)
        );

        pool.bind_reward_vault(reward, reward).unwrap();
        assert!(pool.check_funding(&reward, 10).is_ok());
        assert_eq!(
            pool.check_funding(&reward, 0).unwrap_err(),
            Error::from(StakingError::InvalidAmount)
        );
        assert_eq!(
            pool.check_funding(&Pubkey::new_unique(), 10).unwrap_err(),
            Error::from(StakingError::InvalidPoolVault)
        );
    }

    #[test]
    fn test_rewards_since() {
        let mut pool = pool();
        // created at 100: 1000 * 10 * 500 * 10000 / (10000 * 1e6) = 5
        assert_eq!(pool.rewards_since(1_000, 0, 110), 5);
        assert_eq!(pool.rewards_since(1_000, 0, 100), 0);
        assert_eq!(pool.rewards_since(1_000, 0, 90), 0);
        assert_eq!(pool.rewards_since(0, 0, 110), 0);

        let debt = pool.reward_per_token_at(110);
        assert_eq!(pool.rewards_since(1_000, debt, 110), 0);
        assert_eq!(pool.rewards_since(1_000, debt, 120), 5);

        pool.performance_multiplier = 20_000;
        assert_eq!(pool.rewards_since(1_000, 0, 110), 10);
        assert!(pool.rewards_since(1_000, 0, 111) >= pool.rewards_since(1_000, 0, 110));
    }

    #[test]
    fn test_rewards_saturate() {
        let mut pool = pool();
        pool.base_reward_rate = u64::MAX;
        pool.performance_multiplier = u64::MAX;
        assert_eq!(pool.reward_per_token_at(i64::MAX), u128::MAX);
        assert_eq!(pool.rewards_since(u64::MAX, 0, i64::MAX), u64::MAX);

        // Fits in u128 but not u64
        pool.base_reward_rate = 1_000_000;
        pool.performance_multiplier = 10_000;
        assert_eq!(pool.rewards_since(u64::MAX, 0, 1_100), u64::MAX);
    }

    #[test]
    fn test_update_economics() {
        let mut pool = pool();
        pool.update_economics(42, 15_000, 100).unwrap();
        assert_eq!(pool.base_reward_rate, 42);
        assert_eq!(pool.performance_multiplier, 15_000);

        assert_eq!(
            pool.update_economics(1, MAX_PERFORMANCE_MULTIPLIER + 1, 100).unwrap_err(),
            Error::from(StakingError::InvalidAmount)
        );
        assert_eq!(
            pool.update_economics(MAX_BASE_REWARD_RATE + 1, 10_000, 100).unwrap_err(),
            Error::from(StakingError::InvalidAmount)
        );
        assert_eq!(pool.base_reward_rate, 42);
    }

    #[test]
    fn test_rate_change_keeps_earned_rewards() {
        let mut pool = pool();
        // 1000 * 100 * 500 * 10000 / 1e10 = 50 earned at the old rate
        pool.update_economics(0, 10_000, 200).unwrap();
        assert_eq!(pool.last_accrual_at, 200);
        assert_eq!(pool.rewards_since(1_000, 0, 200), 50);
        assert_eq!(pool.rewards_since(1_000, 0, 10_000), 50);

        pool.update_economics(1_000, 20_000, 300).unwrap();
        // 1000 * 100 * 1000 * 20000 / 1e10 = 200 more
        assert_eq!(pool.rewards_since(1_000, 0, 400), 250);
    }
}
