//! Program-derived address helpers.
//!
//! Every account the program owns sits at an address derived from one of the
//! seed namespaces in [`crate::constants`]. The same seeds drive the Anchor
//! `seeds = [...]` constraints, so off-chain callers and the program always
//! agree on where an account lives. Derivation is pure: recompute rather
//! than cache across pool or user changes.

use anchor_lang::prelude::*;

use crate::constants::*;

/// Address and bump of the program state singleton.
pub fn program_state_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PROGRAM_STATE_SEED], &crate::ID)
}

/// Address and bump of the pool with the given id.
pub fn pool_address(pool_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_SEED, &pool_id.to_le_bytes()], &crate::ID)
}

/// Address and bump of a pool's principal vault.
pub fn pool_vault_address(pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_VAULT_SEED, pool.as_ref()], &crate::ID)
}

/// Address and bump of a pool's reward vault.
pub fn reward_vault_address(pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REWARD_VAULT_SEED, pool.as_ref()], &crate::ID)
}

/// Address and bump of a user's position in a pool.
pub fn user_stake_address(pool: &Pubkey, user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[USER_STAKE_SEED, pool.as_ref(), user.as_ref()],
        &crate::ID,
    )
}

/// Seeds the pool PDA signs vault transfers with.
///
/// The caller owns the byte buffers so the returned slice array can be
/// wrapped into `&[&seeds[..]]` for `CpiContext::new_with_signer`.
pub fn pool_signer_seeds<'a>(pool_id_bytes: &'a [u8; 8], bump: &'a [u8; 1]) -> [&'a [u8]; 3] {
    [POOL_SEED, pool_id_bytes, bump]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_is_deterministic() {
        assert_eq!(pool_address(7), pool_address(7));
        assert_eq!(program_state_address(), program_state_address());

        let (pool, _) = pool_address(7);
        let user = Pubkey::new_unique();
        assert_eq!(user_stake_address(&pool, &user), user_stake_address(&pool, &user));
    }

    #[test]
    fn test_namespaces_do_not_collide() {
        let (pool, _) = pool_address(1);
        let (other_pool, _) = pool_address(2);
        let (pool_vault, _) = pool_vault_address(&pool);
        let (reward_vault, _) = reward_vault_address(&pool);
        let (state, _) = program_state_address();

        assert_ne!(pool, other_pool);
        assert_ne!(pool_vault, reward_vault);
        assert_ne!(pool_vault, pool);
        assert_ne!(state, pool);
        assert_ne!(pool_vault_address(&other_pool).0, pool_vault);
    }

    #[test]
    fn test_positions_are_per_user_and_pool() {
        let (pool_a, _) = pool_address(1);
        let (pool_b, _) = pool_address(2);
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        let a1 = user_stake_address(&pool_a, &alice).0;
        assert_ne!(a1, user_stake_address(&pool_a, &bob).0);
        assert_ne!(a1, user_stake_address(&pool_b, &alice).0);
    }

    #[test]
    fn test_derived_addresses_are_off_curve() {
        let (pool, _) = pool_address(42);
        let user = Pubkey::new_unique();
        for address in [
            program_state_address().0,
            pool,
            pool_vault_address(&pool).0,
            reward_vault_address(&pool).0,
            user_stake_address(&pool, &user).0,
        ] {
            assert!(!address.is_on_curve());
        }
    }

    #[test]
    fn test_signer_seeds_recreate_pool_address() {
        let (pool, bump) = pool_address(9);
        let id_bytes = 9u64.to_le_bytes();
        let bump_bytes = [bump];
        let seeds = pool_signer_seeds(&id_bytes, &bump_bytes);

        let recreated = Pubkey::create_program_address(&seeds, &crate::ID).unwrap();
        assert_eq!(recreated, pool);
    }
}
