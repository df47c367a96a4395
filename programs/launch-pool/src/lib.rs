// Launch Pool Program
//
// Bonding-curve liquidity pool for trading pairs before they list on an
// external exchange. Each mint gets one deterministically addressed pool
// that prices buys and sells on a curve, custodies both legs in program
// vaults, and eventually graduates one-way to a DEX.
//
// Instructions:
// - init_config / update_config: protocol admin sets the graduation threshold
// - init_pool: create the pool for a mint (Active, zero reserves)
// - buy / sell: curve-priced trades with caller slippage bounds
// - lock_liquidity: authority toggles the withdrawal lock
// - graduate: authority moves an eligible pool to its terminal state
// - withdraw: authority pulls vault funds while unlocked

use anchor_lang::prelude::*;

pub mod constants;
pub mod curve;
pub mod errors;
pub mod events;
pub mod graduation;
pub mod instructions;
pub mod state;
pub mod vault;

use curve::CurveType;
use instructions::*;
use state::GraduationDex;
use vault::VaultKind;

declare_id!("6avMmcRVikm9UKcVjWKFvS7tYaaVRWRTPPNXvtPffhwD");

#[program]
pub mod launch_pool {
    use super::*;

    pub fn init_config(ctx: Context<InitConfig>, graduation_threshold: u64) -> Result<()> {
        ctx.accounts.init_config(graduation_threshold, &ctx.bumps)
    }

    pub fn update_config(ctx: Context<UpdateConfig>, graduation_threshold: u64) -> Result<()> {
        ctx.accounts.update_config(graduation_threshold)
    }

    pub fn init_pool(ctx: Context<InitPool>, curve_type: CurveType) -> Result<()> {
        ctx.accounts.init_pool(curve_type, &ctx.bumps)
    }

    pub fn buy(ctx: Context<Buy>, token_amount: u64, max_sol_cost: u64) -> Result<()> {
        ctx.accounts.buy(token_amount, max_sol_cost)
    }

    pub fn sell(ctx: Context<Sell>, token_amount: u64, min_sol_out: u64) -> Result<()> {
        ctx.accounts.sell(token_amount, min_sol_out)
    }

    pub fn lock_liquidity(ctx: Context<LockLiquidity>, locked: bool) -> Result<()> {
        ctx.accounts.lock_liquidity(locked)
    }

    pub fn graduate(ctx: Context<Graduate>, dex: GraduationDex) -> Result<()> {
        ctx.accounts.graduate(dex)
    }

    pub fn withdraw(ctx: Context<Withdraw>, side: VaultKind, amount: u64) -> Result<()> {
        ctx.accounts.withdraw(side, amount)
    }
}
