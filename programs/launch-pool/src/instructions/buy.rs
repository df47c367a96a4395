// Buy Instruction
//
// Prices a token purchase on the curve, moves the buyer's lamports into the
// SOL vault, and mints the purchased tokens into curve custody. Reserve
// counters and custody move in the same instruction.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, curve, errors::*, events::*, state::*, vault};

#[derive(Accounts)]
pub struct Buy<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

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

impl<'info> Buy<'info> {
    pub fn buy(&mut self, token_amount: u64, max_sol_cost: u64) -> Result<()> {
        // Graduated pools no longer price trades.
        self.pool.assert_active()?;

        let quote = curve::buy_quote(
            self.pool.curve_type,
            &self.pool.curve_reserves(),
            token_amount,
            max_sol_cost,
        )?;

        require!(
            self.buyer.to_account_info().lamports() >= quote.sol_amount,
            PoolError::InsufficientFunds
        );

        vault::deposit_sol(
            quote.sol_amount,
            &self.system_program.to_account_info(),
            &self.buyer.to_account_info(),
            &self.vault_sol.to_account_info(),
        )?;

        let pool_key = self.pool.key();
        let authority_seeds = &[
            POOL_AUTHORITY_SEED,
            pool_key.as_ref(),
            &[self.pool.authority_bump],
        ];
        vault::mint_into_custody(
            token_amount,
            &self.token_program.to_account_info(),
            &self.mint.to_account_info(),
            &self.vault_token.to_account_info(),
            &self.pool_authority.to_account_info(),
            authority_seeds,
        )?;

        self.pool.apply_buy(token_amount, &quote)?;

        emit!(TradeExecuted {
            pool: pool_key,
            mint: self.pool.mint,
            side: TradeSide::Buy,
            token_amount,
            sol_amount: quote.sol_amount,
            total_tokens: self.pool.total_tokens,
            total_sol: self.pool.total_sol,
        });

        msg!(
            "Buy: {} tokens for {} lamports",
            token_amount,
            quote.sol_amount
        );

        Ok(())
    }
}
