//! Fee router type definitions

use soroban_sdk::{contracttype, Address};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Config,
}

// ============================================================
// CONFIG
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeRouterConfig {
    /// May change receivers, the split and the owner
    pub owner: Address,
    /// Registry whose pairs pay protocol-fee shares to this router
    pub registry: Address,
    /// Every harvested asset is first converted to this asset
    pub bridge_asset: Address,
    /// Non-direct bridge value is converted to this asset
    pub secondary_asset: Address,
    /// Receives the direct share of bridge value
    pub primary_receiver: Address,
    /// Receives half of the secondary asset
    pub secondary_receiver: Address,
    /// Receives the other half of the secondary asset
    pub burn_sink: Address,
    /// Direct share of bridge value, out of 1e10
    pub bridge_split_numerator: u64,
}

/// Everything `initialize` needs besides the owner and registry
#[contracttype]
#[derive(Clone, Debug)]
pub struct FeeRouterParams {
    pub bridge_asset: Address,
    pub secondary_asset: Address,
    pub primary_receiver: Address,
    pub secondary_receiver: Address,
    pub burn_sink: Address,
    pub bridge_split_numerator: u64,
}

// ============================================================
// RESULTS
// ============================================================

/// Outcome of one `take_protocol_fee` call
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HarvestSummary {
    /// Bridge asset gathered from all harvested pairs
    pub bridge_total: i128,
    /// Bridge asset sent to the primary receiver
    pub primary_amount: i128,
    /// Secondary asset sent to the secondary receiver
    pub secondary_amount: i128,
    /// Secondary asset sent to the burn sink
    pub burned_amount: i128,
}
