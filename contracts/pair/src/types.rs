//! Pair type definitions

use soroban_sdk::{contracttype, Address, U256};

/// Ledger of a single pair.
///
/// Reserves are the last synchronized balances and never exceed 2^112 - 1.
/// `k_last` is reserve0 * reserve1 after the last protocol-fee checkpoint,
/// or 0 while the protocol fee is off.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PairState {
    /// Registry that deployed this pair and owns the fee parameters
    pub registry: Address,
    pub token0: Address,
    pub token1: Address,
    pub reserve0: u128,
    pub reserve1: u128,
    /// Ledger timestamp (mod 2^32) of the last reserve update
    pub block_timestamp_last: u32,
    /// UQ112x112 time-weighted price of token0 in token1, wraps at 2^256
    pub price0_cumulative_last: U256,
    /// UQ112x112 time-weighted price of token1 in token0, wraps at 2^256
    pub price1_cumulative_last: U256,
    pub k_last: U256,
    pub total_shares: u128,
    pub swap_fee_bps: u32,
}
