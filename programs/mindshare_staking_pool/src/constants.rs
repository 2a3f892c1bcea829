//! Program constants for the Mindshare Staking Pool program.
//!
//! Seeds for every derived address, basis-point math and the precision
//! used by reward accrual.

/// Seed for the global program state PDA (singleton, no suffix)
pub const PROGRAM_STATE_SEED: &[u8] = b"program_state";

/// Seed for deriving pool PDAs, followed by the little-endian pool id
pub const POOL_SEED: &[u8] = b"pool";

/// Seed for deriving the principal vault PDA, followed by the pool address
pub const POOL_VAULT_SEED: &[u8] = b"pool_vault";

/// Seed for deriving the reward vault PDA, followed by the pool address
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

/// Seed for deriving user stake PDAs, followed by pool and user addresses
pub const USER_STAKE_SEED: &[u8] = b"user_stake";

/// Basis points denominator (100% = 10000 basis points)
pub const BASIS_POINTS_DENOMINATOR: u64 = 10_000;

/// Highest slashing rate a pool may be created with (100%)
pub const MAX_SLASHING_RATE: u16 = 10_000;

/// Performance multiplier assigned to new pools (1.0x in basis points)
pub const DEFAULT_PERFORMANCE_MULTIPLIER: u64 = 10_000;

/// Upper bound for the performance multiplier (5.0x in basis points)
pub const MAX_PERFORMANCE_MULTIPLIER: u64 = 50_000;

/// Upper bound for `base_reward_rate` (1000 tokens per staked token per
/// second at 1.0x)
pub const MAX_BASE_REWARD_RATE: u64 = 1_000_000_000;

/// Precision divisor for reward rates.
///
/// A `base_reward_rate` of 500 pays 0.0005 tokens per staked token per
/// second at a 1.0x multiplier.
pub const PRECISION_MULT: u128 = 1_000_000;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_multiplier_is_one() {
        assert_eq!(DEFAULT_PERFORMANCE_MULTIPLIER, BASIS_POINTS_DENOMINATOR);
        assert!(DEFAULT_PERFORMANCE_MULTIPLIER <= MAX_PERFORMANCE_MULTIPLIER);
    }

    #[test]
    fn test_seeds_are_distinct() {
        let seeds = [
            PROGRAM_STATE_SEED,
            POOL_SEED,
            POOL_VAULT_SEED,
            REWARD_VAULT_SEED,
            USER_STAKE_SEED,
        ];
        for (i, a) in seeds.iter().enumerate() {
            for b in seeds.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
