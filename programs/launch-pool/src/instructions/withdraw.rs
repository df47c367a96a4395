// Withdraw Instruction
//
// Authority pulls funds out of a vault. Permitted only while the pool is
// unlocked; the reserve counter is debited in the same instruction so the
// record never diverges from custody. After graduation this is the path the
// computed migration amounts take toward the destination venue.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, events::*, state::*, vault, vault::VaultKind};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: PDA signer for custody operations
    #[account(
        seeds = [POOL_AUTHORITY_SEED, pool.key().as_ref()],
        bump = pool.authority_bump,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(address = pool.mint)]
    pub mint: Box<Account<'info, Mint>>,

    #[account(mut, address = pool.vault_sol)]
    pub vault_sol: SystemAccount<'info>,

    #[account(mut, address = pool.vault_token)]
    pub vault_token: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = mint,
        associated_token::authority = authority,
    )]
    pub authority_token: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Withdraw<'info> {
    pub fn withdraw(&mut self, side: VaultKind, amount: u64) -> Result<()> {
        self.pool.assert_can_withdraw(&self.authority.key())?;
        require!(amount > 0, PoolError::ZeroWithdrawAmount);

        let pool_key = self.pool.key();

        match side {
            VaultKind::Sol => {
                self.pool.debit_sol(amount)?;

                let vault_seeds = &[
                    SOL_VAULT_SEED,
                    pool_key.as_ref(),
                    &[self.pool.sol_vault_bump],
                ];
                vault::payout_sol(
                    amount,
                    &self.system_program.to_account_info(),
                    &self.vault_sol.to_account_info(),
                    &self.authority.to_account_info(),
                    vault_seeds,
                )?;
            }
            VaultKind::Token => {
                self.pool.debit_tokens(amount)?;

                let authority_seeds = &[
                    POOL_AUTHORITY_SEED,
                    pool_key.as_ref(),
                    &[self.pool.authority_bump],
                ];
                vault::transfer_from_custody(
                    amount,
                    &self.token_program.to_account_info(),
                    &self.vault_token.to_account_info(),
                    &self.authority_token.to_account_info(),
                    &self.pool_authority.to_account_info(),
                    authority_seeds,
                )?;
            }
        }

        emit!(FundsWithdrawn {
            pool: pool_key,
            mint: self.pool.mint,
            side,
            amount,
            total_tokens: self.pool.total_tokens,
            total_sol: self.pool.total_sol,
        });

        msg!("Withdraw: {} from {:?} vault", amount, side);

        Ok(())
    }
}
