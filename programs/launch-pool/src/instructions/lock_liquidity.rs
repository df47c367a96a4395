// Lock Liquidity Instruction
//
// Sets the withdrawal lock. Trading is unaffected; only authority fund
// withdrawal is gated by the flag. Authority only.

use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

#[derive(Accounts)]
pub struct LockLiquidity<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}

impl<'info> LockLiquidity<'info> {
    pub fn lock_liquidity(&mut self, locked: bool) -> Result<()> {
        self.pool.assert_is_authority(&self.authority.key())?;

        self.pool.set_locked(locked);

        emit!(LiquidityLocked {
            pool: self.pool.key(),
            mint: self.pool.mint,
            locked,
        });

        msg!("Pool liquidity lock set to {}", locked);

        Ok(())
    }
}
