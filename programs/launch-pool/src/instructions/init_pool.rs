// Init Pool Instruction
//
// Creates the curve pool for a mint. The pool address derives from the mint
// alone, so each mint has exactly one canonical pool; re-initializing an
// occupied address fails at the account layer.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, curve::CurveType, events::*, state::*, vault};

#[derive(Accounts)]
pub struct InitPool<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub authority: Signer<'info>,

    // The pool-authority PDA must already control minting so purchased
    // tokens can be minted straight into custody.
    #[account(mint::authority = pool_authority)]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + Pool::INIT_SPACE,
        seeds = [POOL_SEED, mint.key().as_ref()],
        bump
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: PDA signer for custody operations
    #[account(
        seeds = [POOL_AUTHORITY_SEED, pool.key().as_ref()],
        bump
    )]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [SOL_VAULT_SEED, pool.key().as_ref()],
        bump
    )]
    pub vault_sol: SystemAccount<'info>,

    #[account(
        init,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = pool_authority,
    )]
    pub vault_token: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitPool<'info> {
    pub fn init_pool(&mut self, curve_type: CurveType, bumps: &InitPoolBumps) -> Result<()> {
        // Seed the SOL vault to its rent-exempt floor so arbitrarily small
        // custody amounts can land on it later. Custody sits on top of the
        // floor; payouts never dip below it.
        let rent_floor = Rent::get()?.minimum_balance(0);
        vault::deposit_sol(
            rent_floor,
            &self.system_program.to_account_info(),
            &self.payer.to_account_info(),
            &self.vault_sol.to_account_info(),
        )?;

        self.pool.set_inner(Pool {
            mint: self.mint.key(),
            authority: self.authority.key(),
            vault_sol: self.vault_sol.key(),
            vault_token: self.vault_token.key(),
            curve_type,
            status: PoolStatus::Active,
            locked: false,
            total_tokens: 0,
            total_sol: 0,
            virtual_tokens: 0,
            virtual_sol: 0,
            bump: bumps.pool,
            authority_bump: bumps.pool_authority,
            sol_vault_bump: bumps.vault_sol,
        });

        emit!(PoolInitialized {
            pool: self.pool.key(),
            mint: self.mint.key(),
            authority: self.authority.key(),
            curve_type,
        });

        msg!("Pool initialized for mint {}", self.mint.key());

        Ok(())
    }
}
