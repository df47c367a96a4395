// Pool State
//
// One Pool account exists per traded mint, addressed by the PDA
// ["pool", mint]. The account is the authoritative record of curve custody:
// total_tokens tokens sit in the token vault and total_sol lamports sit in
// the SOL vault (on top of its rent-exempt floor) at every observable point.
//
// Lifecycle: the account's absence is the uninitialized state; init_pool
// creates it Active; graduate moves it to Graduated, which is terminal.
// `locked` is orthogonal and only restricts authority withdrawal.

use anchor_lang::prelude::*;

use crate::curve::{CurveReserves, CurveType, TradeQuote};
use crate::errors::PoolError;

/// Venue a graduated pool migrates to.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum GraduationDex {
    Raydium,
    Orca,
    Jupiter,
}

/// Pool lifecycle state. Graduation carries its destination so the terminal
/// record documents where the pair went; there is no edge back to Active.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum PoolStatus {
    Active,
    Graduated { dex: GraduationDex },
}

#[account]
#[derive(InitSpace)]
pub struct Pool {
    // Traded asset; immutable after creation
    pub mint: Pubkey,

    // May lock, graduate, and withdraw; immutable after creation
    pub authority: Pubkey,

    // Custodial balances backing the recorded reserves
    pub vault_sol: Pubkey,
    pub vault_token: Pubkey,

    pub curve_type: CurveType,
    pub status: PoolStatus,

    // Blocks authority withdrawal only, never trading
    pub locked: bool,

    // Recorded reserves
    pub total_tokens: u64,
    pub total_sol: u64,

    // Curve-internal reserves, seeded by the bootstrap trade
    pub virtual_tokens: u64,
    pub virtual_sol: u64,

    // Stored PDA bumps
    pub bump: u8,
    pub authority_bump: u8,
    pub sol_vault_bump: u8,
}

impl Pool {
    pub fn assert_is_authority(&self, caller: &Pubkey) -> Result<()> {
        require!(self.authority == *caller, PoolError::Unauthorized);
        Ok(())
    }

    // Trading and graduation both require a live curve.
    pub fn assert_active(&self) -> Result<()> {
        require!(
            matches!(self.status, PoolStatus::Active),
            PoolError::AlreadyGraduated
        );
        Ok(())
    }

    // Withdrawal gate: one combined capability check, one failure surface.
    pub fn assert_can_withdraw(&self, requester: &Pubkey) -> Result<()> {
        require!(
            self.authority == *requester && !self.locked,
            PoolError::LockedOrUnauthorized
        );
        Ok(())
    }

    pub fn is_graduated(&self) -> bool {
        !matches!(self.status, PoolStatus::Active)
    }

    pub fn graduation_dex(&self) -> Option<GraduationDex> {
        match self.status {
            PoolStatus::Active => None,
            PoolStatus::Graduated { dex } => Some(dex),
        }
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// One-way transition to the terminal state.
    pub fn graduate(&mut self, dex: GraduationDex) -> Result<()> {
        self.assert_active()?;
        self.status = PoolStatus::Graduated { dex };
        Ok(())
    }

    pub fn curve_reserves(&self) -> CurveReserves {
        CurveReserves {
            total_tokens: self.total_tokens,
            total_sol: self.total_sol,
            virtual_tokens: self.virtual_tokens,
            virtual_sol: self.virtual_sol,
        }
    }

    /// Record a priced buy: both reserves grow, the curve state advances.
    pub fn apply_buy(&mut self, token_amount: u64, quote: &TradeQuote) -> Result<()> {
        self.total_tokens = self
            .total_tokens
            .checked_add(token_amount)
            .ok_or(PoolError::Overflow)?;
        self.total_sol = self
            .total_sol
            .checked_add(quote.sol_amount)
            .ok_or(PoolError::Overflow)?;
        self.virtual_tokens = quote.virtual_tokens;
        self.virtual_sol = quote.virtual_sol;
        Ok(())
    }

    /// Record a priced sell: both reserves shrink, never below zero.
    pub fn apply_sell(&mut self, token_amount: u64, quote: &TradeQuote) -> Result<()> {
        self.total_tokens = self
            .total_tokens
            .checked_sub(token_amount)
            .ok_or(PoolError::InsufficientReserves)?;
        self.total_sol = self
            .total_sol
            .checked_sub(quote.sol_amount)
            .ok_or(PoolError::InsufficientReserves)?;
        self.virtual_tokens = quote.virtual_tokens;
        self.virtual_sol = quote.virtual_sol;
        Ok(())
    }

    pub fn debit_sol(&mut self, amount: u64) -> Result<()> {
        self.total_sol = self
            .total_sol
            .checked_sub(amount)
            .ok_or(PoolError::InsufficientReserves)?;
        Ok(())
    }

    pub fn debit_tokens(&mut self, amount: u64) -> Result<()> {
        self.total_tokens = self
            .total_tokens
            .checked_sub(amount)
            .ok_or(PoolError::InsufficientReserves)?;
        Ok(())
    }
}
