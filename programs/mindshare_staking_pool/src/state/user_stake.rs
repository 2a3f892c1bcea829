use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::state::StakingPool;

/// A user's position in one pool.
/// PDA: ["user_stake", pool, user]
///
/// Never closed: a position that reaches zero stays behind as an audit
/// record, and `is_slashed` is never cleared.
#[account]
#[derive(Default)]
pub struct UserStake {
    pub user: Pubkey,
    pub pool_id: u64,
    pub stake_amount: u64,

    /// Lock duration requested when the position was opened
    pub lock_duration: i64,

    pub staked_at: i64,

    /// Earliest penalty-free exit: staked_at + max(lock_duration, pool.min_lock_period)
    pub lock_until: i64,

    /// Start of the current reward accrual window
    pub last_claimed: i64,

    /// Rewards accrued but not yet paid out
    pub pending_rewards: u64,

    /// Pool `reward_per_token` at the last settlement
    pub reward_debt: u128,

    /// Set on the first early exit
    pub is_slashed: bool,

    /// PDA bump seed
    pub bump: u8,
}

/// State a `stake` call commits once the token transfer has gone through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakeUpdate {
    /// Position starts a fresh lock window
    pub opens_position: bool,
    pub stake_amount: u64,
    pub pending_rewards: u64,
    pub lock_until: i64,
    pub pool_total: u64,
    pub reward_debt: u128,
}

/// Outcome of an `unstake` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnstakeQuote {
    pub amount: u64,
    pub penalty: u64,
    /// Tokens sent back to the user: amount - penalty
    pub returned: u64,
    pub is_early: bool,
    pub stake_amount: u64,
    pub pending_rewards: u64,
    pub pool_total: u64,
    pub reward_debt: u128,
}

/// Outcome of a `claim_rewards` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimQuote {
    pub owed: u64,
    pub paid: u64,
    /// Carried in `pending_rewards` until the reward vault is refilled
    pub deferred: u64,
    pub reward_debt: u128,
}

impl UserStake {
    pub const LEN: usize = 8 + // discriminator
        32 + // user
        8 +  // pool_id
        8 +  // stake_amount
        8 +  // lock_duration
        8 +  // staked_at
        8 +  // lock_until
        8 +  // last_claimed
        8 +  // pending_rewards
        16 + // reward_debt (u128)
        1 +  // is_slashed
        1; // bump

    pub fn is_initialized(&self) -> bool {
        self.user != Pubkey::default()
    }

    pub fn is_locked(&self, now: i64) -> bool {
        now < self.lock_until
    }

    pub fn require_owner(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.user, StakingError::Unauthorized);
        Ok(())
    }

    pub fn require_pool(&self, pool: &StakingPool) -> Result<()> {
        require!(self.pool_id == pool.pool_id, StakingError::InvalidPool);
        Ok(())
    }

    /// Rewards earned since the last settlement, excluding `pending_rewards`.
    pub fn accrued_rewards(&self, pool: &StakingPool, now: i64) -> Result<u64> {
        require!(now >= self.last_claimed, StakingError::InvalidTimestamp);
        Ok(pool.rewards_since(self.stake_amount, self.reward_debt, now))
    }

    /// Validates a stake of `amount` against the pool and this position.
    ///
    /// A top-up keeps the existing `lock_until`. A position that has been
    /// fully withdrawn starts over with a fresh lock window.
    pub fn plan_stake(
        &self,
        pool: &StakingPool,
        signer: &Pubkey,
        pool_vault: &Pubkey,
        amount: u64,
        lock_duration: i64,
        now: i64,
    ) -> Result<StakeUpdate> {
        pool.require_active()?;
        require!(amount > 0, StakingError::InvalidAmount);
        require!(lock_duration >= 0, StakingError::InvalidLockPeriod);
        pool.require_pool_vault(pool_vault)?;

        if self.is_initialized() {
            self.require_owner(signer)?;
            self.require_pool(pool)?;
        }

        let pool_total = pool.checked_deposit(amount)?;
        let reward_debt = pool.reward_per_token_at(now);

        if !self.is_initialized() || self.stake_amount == 0 {
            return Ok(StakeUpdate {
                opens_position: true,
                stake_amount: amount,
                pending_rewards: self.pending_rewards,
                lock_until: pool.lock_until(now, lock_duration)?,
                pool_total,
                reward_debt,
            });
        }

        let accrued = self.accrued_rewards(pool, now)?;
        Ok(StakeUpdate {
            opens_position: false,
            stake_amount: self
                .stake_amount
                .checked_add(amount)
                .ok_or(StakingError::MathOverflow)?,
            pending_rewards: self.pending_rewards.saturating_add(accrued),
            lock_until: self.lock_until,
            pool_total,
            reward_debt,
        })
    }

    pub fn apply_stake(
        &mut self,
        user: Pubkey,
        pool_id: u64,
        lock_duration: i64,
        update: &StakeUpdate,
        now: i64,
        bump: u8,
    ) {
        if update.opens_position {
            if !self.is_initialized() {
                self.user = user;
                self.pool_id = pool_id;
                self.is_slashed = false;
                self.bump = bump;
            }
            self.lock_duration = lock_duration;
            self.staked_at = now;
            self.lock_until = update.lock_until;
        }

        self.stake_amount = update.stake_amount;
        self.pending_rewards = update.pending_rewards;
        self.reward_debt = update.reward_debt;
        self.last_claimed = now;
    }

    /// Validates an unstake of `amount` and prices the exit.
    ///
    /// Before `lock_until` the pool's slashing rate applies and the penalty
    /// stays in the pool vault. A position already slashed may only leave
    /// once its lock has ended.
    pub fn plan_unstake(
        &self,
        pool: &StakingPool,
        signer: &Pubkey,
        pool_vault: &Pubkey,
        amount: u64,
        now: i64,
    ) -> Result<UnstakeQuote> {
        self.require_owner(signer)?;
        self.require_pool(pool)?;
        pool.require_pool_vault(pool_vault)?;
        require!(amount > 0, StakingError::InvalidAmount);
        require!(amount <= self.stake_amount, StakingError::InsufficientStake);

        let is_early = self.is_locked(now);
        require!(!(is_early && self.is_slashed), StakingError::StakeSlashed);

        let penalty = if is_early {
            pool.slashing_penalty(amount)?
        } else {
            0
        };
        let returned = amount
            .checked_sub(penalty)
            .ok_or(StakingError::MathOverflow)?;

        let accrued = self.accrued_rewards(pool, now)?;

        Ok(UnstakeQuote {
            amount,
            penalty,
            returned,
            is_early,
            stake_amount: self
                .stake_amount
                .checked_sub(amount)
                .ok_or(StakingError::MathOverflow)?,
            pending_rewards: self.pending_rewards.saturating_add(accrued),
            pool_total: pool.checked_withdrawal(amount)?,
            reward_debt: pool.reward_per_token_at(now),
        })
    }

    pub fn apply_unstake(&mut self, quote: &UnstakeQuote, now: i64) {
        self.stake_amount = quote.stake_amount;
        self.pending_rewards = quote.pending_rewards;
        self.reward_debt = quote.reward_debt;
        self.last_claimed = now;
        if quote.is_early {
            self.is_slashed = true;
        }
    }

    /// Works out how much of the owed reward the vault can pay right now.
    ///
    /// Whatever the vault cannot cover is deferred into `pending_rewards`.
    /// An empty vault with rewards owed is reported as an error.
    pub fn plan_claim(
        &self,
        pool: &StakingPool,
        signer: &Pubkey,
        reward_vault: &Pubkey,
        vault_balance: u64,
        now: i64,
    ) -> Result<ClaimQuote> {
        self.require_owner(signer)?;
        self.require_pool(pool)?;
        pool.require_reward_vault(reward_vault)?;

        let accrued = self.accrued_rewards(pool, now)?;
        let owed = self.pending_rewards.saturating_add(accrued);

        require!(
            owed == 0 || vault_balance > 0,
            StakingError::InsufficientRewardFunds
        );

        let paid = owed.min(vault_balance);
        Ok(ClaimQuote {
            owed,
            paid,
            deferred: owed - paid,
            reward_debt: pool.reward_per_token_at(now),
        })
    }

    pub fn apply_claim(&mut self, quote: &ClaimQuote, now: i64) {
        self.pending_rewards = quote.deferred;
        self.reward_debt = quote.reward_debt;
        self.last_claimed = now;
    }
}
