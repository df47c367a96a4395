use anchor_lang::prelude::*;

#[error_code]
pub enum PoolError {
    #[msg("A pool already exists for this mint")]
    AlreadyInitialized,

    #[msg("Only the pool authority can perform this action")]
    Unauthorized,

    #[msg("Quote violates the caller's slippage bound")]
    SlippageExceeded,

    #[msg("Buyer does not have enough lamports to cover the quoted cost")]
    InsufficientFunds,

    #[msg("Trade or withdrawal exceeds the pool's recorded reserves")]
    InsufficientReserves,

    #[msg("Withdrawal requires the pool authority and unlocked liquidity")]
    LockedOrUnauthorized,

    #[msg("Pool has not reached the graduation threshold")]
    NotEligible,

    #[msg("Pool has already graduated")]
    AlreadyGraduated,

    #[msg("Arithmetic overflow occurred")]
    Overflow,

    #[msg("Division by zero attempted")]
    DivisionByZero,

    #[msg("Trade amount cannot be zero")]
    ZeroTradeAmount,

    #[msg("Withdrawal amount cannot be zero")]
    ZeroWithdrawAmount,

    #[msg("Graduation threshold must be non-zero")]
    InvalidThreshold,
}
