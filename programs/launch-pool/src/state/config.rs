// Protocol Configuration State

use anchor_lang::prelude::*;

use crate::errors::PoolError;

/// Singleton PDA ["config"]: protocol admin plus the lamport custody a pool
/// must reach before it may graduate.
#[account]
#[derive(InitSpace)]
pub struct GlobalConfig {
    pub admin: Pubkey,
    pub graduation_threshold: u64,
    pub bump: u8,
}

impl GlobalConfig {
    pub fn assert_is_admin(&self, caller: &Pubkey) -> Result<()> {
        require!(self.admin == *caller, PoolError::Unauthorized);
        Ok(())
    }

    pub fn set_threshold(&mut self, graduation_threshold: u64) -> Result<()> {
        require!(graduation_threshold > 0, PoolError::InvalidThreshold);
        self.graduation_threshold = graduation_threshold;
        Ok(())
    }
}
