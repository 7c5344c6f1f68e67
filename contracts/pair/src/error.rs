// Pair error module for NarwhalSwap

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PairError {
    // Initialization errors (1-9)
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Quote errors (10-19)
    TokenNotInPair = 14,

    // Authorization and fee errors (20-29)
    FeeTooHigh = 21,

    // Liquidity errors (30-39)
    InsufficientInitialLiquidity = 30,
    InsufficientLiquidityMinted = 31,
    InsufficientLiquidityBurned = 32,
    InsufficientShareBalance = 33,

    // Swap errors (40-49)
    InsufficientOutput = 40,
    InsufficientLiquidity = 41,
    InsufficientInputAmount = 42,
    InvariantViolation = 43,
    InvalidRecipient = 44,

    // Pair state errors (50-59)
    ReserveOverflow = 50,
    Locked = 51,
}
