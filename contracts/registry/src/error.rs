// Registry error module for NarwhalSwap

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    // Initialization errors (1-9)
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Registry errors (10-19)
    IdenticalAssets = 10,
    ZeroAsset = 11,
    PairExists = 12,
    PairNotFound = 13,

    // Authorization and fee errors (20-29)
    Forbidden = 20,
    FeeTooHigh = 21,
    InvalidProtocolFee = 22,
}
