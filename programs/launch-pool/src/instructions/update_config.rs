// Update Config Instruction
//
// Retunes the graduation threshold. Only the protocol admin can update.

use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GlobalConfig>,
}

impl<'info> UpdateConfig<'info> {
    pub fn update_config(&mut self, graduation_threshold: u64) -> Result<()> {
        self.config.assert_is_admin(&self.admin.key())?;
        self.config.set_threshold(graduation_threshold)?;

        emit!(ConfigUpdated {
            admin: self.admin.key(),
            graduation_threshold,
        });

        msg!(
            "Config updated: graduation threshold {} lamports",
            graduation_threshold
        );

        Ok(())
    }
}
