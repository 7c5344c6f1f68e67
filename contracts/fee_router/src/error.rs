//! Fee router error types

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum FeeRouterError {
    // Initialization
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Administration
    Forbidden = 10,
    ProportionTooHigh = 11,

    // Conversion
    NoBridgePair = 20,
    InsufficientLiquidity = 21,
    InsufficientOutput = 22,
    /// The router holds no shares of a listed pair
    InsufficientLiquidityBurned = 23,
}
