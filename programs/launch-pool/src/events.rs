// Events
//
// One event per mutating instruction, carrying post-state reserves. This is
// the change-notification channel downstream indexers and charting services
// subscribe to; they never mutate pool state directly.

use anchor_lang::prelude::*;

use crate::curve::CurveType;
use crate::state::GraduationDex;
use crate::vault::VaultKind;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum TradeSide {
    Buy,
    Sell,
}

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub mint: Pubkey,
    pub authority: Pubkey,
    pub curve_type: CurveType,
}

#[event]
pub struct TradeExecuted {
    pub pool: Pubkey,
    pub mint: Pubkey,
    pub side: TradeSide,
    pub token_amount: u64,
    pub sol_amount: u64,
    pub total_tokens: u64,
    pub total_sol: u64,
}

#[event]
pub struct LiquidityLocked {
    pub pool: Pubkey,
    pub mint: Pubkey,
    pub locked: bool,
}

#[event]
pub struct PoolGraduated {
    pub pool: Pubkey,
    pub mint: Pubkey,
    pub dex: GraduationDex,
    pub token_amount: u64,
    pub sol_amount: u64,
}

#[event]
pub struct FundsWithdrawn {
    pub pool: Pubkey,
    pub mint: Pubkey,
    pub side: VaultKind,
    pub amount: u64,
    pub total_tokens: u64,
    pub total_sol: u64,
}

#[event]
pub struct ConfigUpdated {
    pub admin: Pubkey,
    pub graduation_threshold: u64,
}
