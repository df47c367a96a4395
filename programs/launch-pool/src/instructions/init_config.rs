// Init Config Instruction
//
// Creates the singleton protocol configuration. The signer becomes the
// protocol admin.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

#[derive(Accounts)]
pub struct InitConfig<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + GlobalConfig::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, GlobalConfig>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitConfig<'info> {
    pub fn init_config(
        &mut self,
        graduation_threshold: u64,
        bumps: &InitConfigBumps,
    ) -> Result<()> {
        require!(graduation_threshold > 0, PoolError::InvalidThreshold);

        self.config.set_inner(GlobalConfig {
            admin: self.admin.key(),
            graduation_threshold,
            bump: bumps.config,
        });

        emit!(ConfigUpdated {
            admin: self.admin.key(),
            graduation_threshold,
        });

        msg!(
            "Config initialized: graduation threshold {} lamports",
            graduation_threshold
        );

        Ok(())
    }
}
