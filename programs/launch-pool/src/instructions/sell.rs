// Sell Instruction
//
// Prices a token sale on the curve, burns the sold tokens out of curve
// custody, and pays the seller from the SOL vault. Reserve counters and
// custody move in the same instruction.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, curve, events::*, state::*, vault};

#[derive(Accounts)]
pub struct Sell<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

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

    #[account(mut, address = pool.mint)]
    pub mint: Box<Account<'info, Mint>>,

    #[account(mut, address = pool.vault_sol)]
    pub vault_sol: SystemAccount<'info>,

    #[account(mut, address = pool.vault_token)]
    pub vault_token: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Sell<'info> {
    pub fn sell(&mut self, token_amount: u64, min_sol_out: u64) -> Result<()> {
        // Graduated pools no longer price trades.
        self.pool.assert_active()?;

        let quote = curve::sell_quote(
            self.pool.curve_type,
            &self.pool.curve_reserves(),
            token_amount,
            min_sol_out,
        )?;

        let pool_key = self.pool.key();
        let authority_seeds = &[
            POOL_AUTHORITY_SEED,
            pool_key.as_ref(),
            &[self.pool.authority_bump],
        ];
        vault::burn_from_custody(
            token_amount,
            &self.token_program.to_account_info(),
            &self.mint.to_account_info(),
            &self.vault_token.to_account_info(),
            &self.pool_authority.to_account_info(),
            authority_seeds,
        )?;

        let vault_seeds = &[
            SOL_VAULT_SEED,
            pool_key.as_ref(),
            &[self.pool.sol_vault_bump],
        ];
        vault::payout_sol(
            quote.sol_amount,
            &self.system_program.to_account_info(),
            &self.vault_sol.to_account_info(),
            &self.seller.to_account_info(),
            vault_seeds,
        )?;

        self.pool.apply_sell(token_amount, &quote)?;

        emit!(TradeExecuted {
            pool: pool_key,
            mint: self.pool.mint,
            side: TradeSide::Sell,
            token_amount,
            sol_amount: quote.sol_amount,
            total_tokens: self.pool.total_tokens,
            total_sol: self.pool.total_sol,
        });

        msg!(
            "Sell: {} tokens for {} lamports",
            token_amount,
            quote.sol_amount
        );

        Ok(())
    }
}
