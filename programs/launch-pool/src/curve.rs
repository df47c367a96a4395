// Curve Engine
//
// Pure pricing functions for the launch pool. Quotes are computed over a
// plain reserve snapshot so the math stays independent of account plumbing.
//
// ConstantProduct law:
//
//   virtual_tokens * virtual_sol = K        (invariant after bootstrap)
//
//   buy  t:  virtual_tokens += t, charge   virtual_sol - K / virtual_tokens'
//   sell t:  virtual_tokens -= t, pay out  K / virtual_tokens' - virtual_sol
//
// The first trade on an empty pool bootstraps the curve: both supplied
// amounts are booked 1:1 as the reserves, and the virtual reserves are
// seeded as 3x the supplied tokens and 2x the supplied lamports. With that
// seeding, custody as a function of outstanding tokens is
// S(T) = 3*S0 * T / (T + 2*T0), and selling the entire outstanding supply
// returns exactly the custodied lamports.
//
// Rounding always favors the pool: costs round up, payouts round down.

use anchor_lang::prelude::*;

use crate::errors::PoolError;

// Virtual reserve seeding applied by the bootstrap trade.
const BOOTSTRAP_VIRTUAL_TOKEN_FACTOR: u64 = 3;
const BOOTSTRAP_VIRTUAL_SOL_FACTOR: u64 = 2;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum CurveType {
    /// Bootstrapped virtual-reserve product law.
    ConstantProduct,
    /// Trades execute at the current reserve ratio.
    FixedRatio,
}

/// Snapshot of the reserve state a quote is computed against.
#[derive(Clone, Copy, Debug)]
pub struct CurveReserves {
    pub total_tokens: u64,
    pub total_sol: u64,
    pub virtual_tokens: u64,
    pub virtual_sol: u64,
}

/// A priced trade: the lamport leg plus the virtual reserves after the
/// trade. Applied to the pool in the same instruction that moves funds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TradeQuote {
    pub sol_amount: u64,
    pub virtual_tokens: u64,
    pub virtual_sol: u64,
}

/// Price a buy of `token_amount` tokens. The quoted lamport cost must not
/// exceed `max_sol_cost`.
pub fn buy_quote(
    curve_type: CurveType,
    reserves: &CurveReserves,
    token_amount: u64,
    max_sol_cost: u64,
) -> Result<TradeQuote> {
    require!(token_amount > 0, PoolError::ZeroTradeAmount);

    if reserves.total_tokens == 0 {
        return bootstrap_quote(token_amount, max_sol_cost);
    }

    let quote = match curve_type {
        CurveType::ConstantProduct => {
            let k = (reserves.virtual_tokens as u128)
                .checked_mul(reserves.virtual_sol as u128)
                .ok_or(PoolError::Overflow)?;

            let new_virtual_tokens = reserves
                .virtual_tokens
                .checked_add(token_amount)
                .ok_or(PoolError::Overflow)?;

            // Floor division shrinks the post-trade sol side, which rounds
            // the charged cost up.
            let new_virtual_sol = k
                .checked_div(new_virtual_tokens as u128)
                .ok_or(PoolError::DivisionByZero)? as u64;

            let sol_cost = reserves
                .virtual_sol
                .checked_sub(new_virtual_sol)
                .ok_or(PoolError::Overflow)?;

            TradeQuote {
                sol_amount: sol_cost,
                virtual_tokens: new_virtual_tokens,
                virtual_sol: new_virtual_sol,
            }
        }
        CurveType::FixedRatio => TradeQuote {
            sol_amount: mul_div_ceil(token_amount, reserves.total_sol, reserves.total_tokens)?,
            virtual_tokens: reserves.virtual_tokens,
            virtual_sol: reserves.virtual_sol,
        },
    };

    require!(quote.sol_amount <= max_sol_cost, PoolError::SlippageExceeded);

    Ok(quote)
}

/// Price a sell of `token_amount` tokens. The quoted lamport payout must be
/// at least `min_sol_out`.
pub fn sell_quote(
    curve_type: CurveType,
    reserves: &CurveReserves,
    token_amount: u64,
    min_sol_out: u64,
) -> Result<TradeQuote> {
    require!(token_amount > 0, PoolError::ZeroTradeAmount);
    require!(
        token_amount <= reserves.total_tokens,
        PoolError::InsufficientReserves
    );

    let quote = match curve_type {
        CurveType::ConstantProduct => {
            let k = (reserves.virtual_tokens as u128)
                .checked_mul(reserves.virtual_sol as u128)
                .ok_or(PoolError::Overflow)?;

            // token_amount <= total_tokens keeps the token side at or above
            // its bootstrap offset, so it never reaches zero.
            let new_virtual_tokens = reserves
                .virtual_tokens
                .checked_sub(token_amount)
                .ok_or(PoolError::InsufficientReserves)?;
            require!(new_virtual_tokens > 0, PoolError::DivisionByZero);

            let new_virtual_sol = k
                .checked_div(new_virtual_tokens as u128)
                .ok_or(PoolError::DivisionByZero)?;

            // Floor division rounds the payout down.
            let payout = new_virtual_sol
                .checked_sub(reserves.virtual_sol as u128)
                .ok_or(PoolError::Overflow)?;
            require!(
                payout <= reserves.total_sol as u128,
                PoolError::InsufficientReserves
            );
            let payout = payout as u64;

            TradeQuote {
                sol_amount: payout,
                virtual_tokens: new_virtual_tokens,
                virtual_sol: reserves
                    .virtual_sol
                    .checked_add(payout)
                    .ok_or(PoolError::Overflow)?,
            }
        }
        CurveType::FixedRatio => TradeQuote {
            sol_amount: mul_div(token_amount, reserves.total_sol, reserves.total_tokens)?,
            virtual_tokens: reserves.virtual_tokens,
            virtual_sol: reserves.virtual_sol,
        },
    };

    require!(quote.sol_amount >= min_sol_out, PoolError::SlippageExceeded);

    Ok(quote)
}

// First trade on an empty pool: no reserve ratio exists yet, so the caller's
// amounts are booked 1:1 and seed the virtual reserves. A fully drained pool
// re-enters bootstrap on its next buy.
fn bootstrap_quote(token_amount: u64, max_sol_cost: u64) -> Result<TradeQuote> {
    require!(max_sol_cost > 0, PoolError::ZeroTradeAmount);

    Ok(TradeQuote {
        sol_amount: max_sol_cost,
        virtual_tokens: token_amount
            .checked_mul(BOOTSTRAP_VIRTUAL_TOKEN_FACTOR)
            .ok_or(PoolError::Overflow)?,
        virtual_sol: max_sol_cost
            .checked_mul(BOOTSTRAP_VIRTUAL_SOL_FACTOR)
            .ok_or(PoolError::Overflow)?,
    })
}

// (a * b) / denom with a u128 intermediate, rounding down.
fn mul_div(a: u64, b: u64, denom: u64) -> Result<u64> {
    require!(denom > 0, PoolError::DivisionByZero);
    let prod = (a as u128)
        .checked_mul(b as u128)
        .ok_or(PoolError::Overflow)?;
    u64::try_from(prod / denom as u128).map_err(|_| error!(PoolError::Overflow))
}

// (a * b) / denom with a u128 intermediate, rounding up.
fn mul_div_ceil(a: u64, b: u64, denom: u64) -> Result<u64> {
    require!(denom > 0, PoolError::DivisionByZero);
    let prod = (a as u128)
        .checked_mul(b as u128)
        .ok_or(PoolError::Overflow)?;
    let denom = denom as u128;
    let ceiled = prod
        .checked_add(denom - 1)
        .ok_or(PoolError::Overflow)?
        / denom;
    u64::try_from(ceiled).map_err(|_| error!(PoolError::Overflow))
}
