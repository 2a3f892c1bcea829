use anchor_lang::prelude::*;

use crate::error::StakingError;

/// Global program singleton.
/// PDA: ["program_state"]
#[account]
#[derive(Default)]
pub struct ProgramState {
    /// Admin allowed to create pools and pause the program. Immutable.
    pub admin: Pubkey,

    /// Number of pools created so far
    pub total_pools: u64,

    /// Global kill switch for stake, unstake, claim and pool creation
    pub is_paused: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl ProgramState {
    pub const LEN: usize = 8 + // discriminator
        32 + // admin
        8 +  // total_pools
        1 +  // is_paused
        1; // bump

    /// The account is created with `init_if_needed`; a zeroed admin marks a
    /// fresh allocation.
    pub fn is_initialized(&self) -> bool {
        self.admin != Pubkey::default()
    }

    pub fn initialize(&mut self, admin: Pubkey, bump: u8) -> Result<()> {
        require!(!self.is_initialized(), StakingError::AlreadyInitialized);

        self.admin = admin;
        self.total_pools = 0;
        self.is_paused = false;
        self.bump = bump;
        Ok(())
    }

    pub fn require_not_paused(&self) -> Result<()> {
        require!(!self.is_paused, StakingError::ProgramPaused);
        Ok(())
    }

    pub fn require_admin(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.admin, StakingError::Unauthorized);
        Ok(())
    }

    /// Bumps the pool counter, returning the new total.
    pub fn register_pool(&mut self) -> Result<u64> {
        self.total_pools = self
            .total_pools
            .checked_add(1)
            .ok_or(StakingError::MathOverflow)?;
        Ok(self.total_pools)
    }
}
