// Graduate Instruction
//
// One-way migration off the curve. Eligibility, migration amounts, and the
// terminal status flip all happen here, in one instruction, so no trade can
// interleave between the check and the commit. The physical hand-off to the
// destination venue happens outside this program; the obligation ends at
// emitting the exact amounts and marking the pool terminal.

use anchor_lang::prelude::*;

use crate::{constants::*, events::*, graduation, state::*};

#[derive(Accounts)]
pub struct Graduate<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}

impl<'info> Graduate<'info> {
    pub fn graduate(&mut self, dex: GraduationDex) -> Result<()> {
        self.pool.assert_is_authority(&self.authority.key())?;
        self.pool.assert_active()?;
        graduation::assert_eligible(&self.pool, &self.config)?;

        let amounts = graduation::migration_amounts(&self.pool);
        self.pool.graduate(dex)?;

        emit!(PoolGraduated {
            pool: self.pool.key(),
            mint: self.pool.mint,
            dex,
            token_amount: amounts.token_amount,
            sol_amount: amounts.sol_amount,
        });

        msg!(
            "Pool graduated: {} tokens / {} lamports to migrate",
            amounts.token_amount,
            amounts.sol_amount
        );

        Ok(())
    }
}
