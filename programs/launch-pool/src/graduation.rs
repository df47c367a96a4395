// Graduation Coordinator
//
// Eligibility and migration math for the one-way move off the curve. The
// graduate instruction runs eligibility, migration computation, and the
// terminal status flip in a single instruction, so the check and the commit
// are never observably split.

use anchor_lang::prelude::*;

use crate::errors::PoolError;
use crate::state::{GlobalConfig, Pool};

/// The exact amounts a graduated pool hands off to its destination venue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MigrationAmounts {
    pub token_amount: u64,
    pub sol_amount: u64,
}

pub fn is_eligible(pool: &Pool, config: &GlobalConfig) -> bool {
    pool.total_sol >= config.graduation_threshold
}

pub fn assert_eligible(pool: &Pool, config: &GlobalConfig) -> Result<()> {
    require!(is_eligible(pool, config), PoolError::NotEligible);
    Ok(())
}

/// Everything the curve custodies migrates: the full token custody and the
/// full lamport custody.
pub fn migration_amounts(pool: &Pool) -> MigrationAmounts {
    MigrationAmounts {
        token_amount: pool.total_tokens,
        sol_amount: pool.total_sol,
    }
}
