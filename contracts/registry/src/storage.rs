// Registry storage module for NarwhalSwap

use soroban_sdk::{contracttype, Address, Env};

use crate::error::RegistryError;
use crate::types::RegistryConfig;

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Registry configuration
    Config,
    /// Initialization flag
    Initialized,
    /// Number of pairs created
    PairCount,
    /// Pair address by creation index
    PairByIndex(u32),
    /// Pair address by (token0, token1), tokens sorted
    PairByTokens(Address, Address),
    /// Creation index by pair address
    PairIndex(Address),
    /// Assets that halve the default swap fee of new pairs
    DiscountedAsset(Address),
    /// Address allowed to set a pair's swap fee besides the fee setter
    SwapFeeDelegate(Address),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
/// TTL bump threshold
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    extend_ttl(env, &DataKey::Initialized);
}

// ============================================================
// REGISTRY CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &RegistryConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> Result<RegistryConfig, RegistryError> {
    env.storage()
        .persistent()
        .get(&DataKey::Config)
        .ok_or(RegistryError::NotInitialized)
}

// ============================================================
// DISCOUNTED ASSETS
// ============================================================

pub fn is_discounted(env: &Env, asset: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::DiscountedAsset(asset.clone()))
        .unwrap_or(false)
}

pub fn write_discounted(env: &Env, asset: &Address, discounted: bool) {
    let key = DataKey::DiscountedAsset(asset.clone());
    if discounted {
        env.storage().persistent().set(&key, &true);
        extend_ttl(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

// ============================================================
// PAIR INDEX
// ============================================================

pub fn read_pair_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::PairCount)
        .unwrap_or(0)
}

pub fn read_pair(env: &Env, token0: &Address, token1: &Address) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::PairByTokens(token0.clone(), token1.clone()))
}

pub fn read_pair_at(env: &Env, index: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::PairByIndex(index))
}

pub fn is_registered_pair(env: &Env, pair: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::PairIndex(pair.clone()))
}

/// Index a new pair and return its creation index
pub fn register_pair(env: &Env, token0: &Address, token1: &Address, pair: &Address) -> u32 {
    let index = read_pair_count(env);

    let key = DataKey::PairByTokens(token0.clone(), token1.clone());
    env.storage().persistent().set(&key, pair);
    extend_ttl(env, &key);

    let index_key = DataKey::PairByIndex(index);
    env.storage().persistent().set(&index_key, pair);
    extend_ttl(env, &index_key);

    let reverse_key = DataKey::PairIndex(pair.clone());
    env.storage().persistent().set(&reverse_key, &index);
    extend_ttl(env, &reverse_key);

    env.storage().persistent().set(&DataKey::PairCount, &(index + 1));
    extend_ttl(env, &DataKey::PairCount);

    index
}

// ============================================================
// SWAP FEE DELEGATES
// ============================================================

pub fn read_fee_delegate(env: &Env, pair: &Address) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::SwapFeeDelegate(pair.clone()))
}

pub fn write_fee_delegate(env: &Env, pair: &Address, delegate: &Option<Address>) {
    let key = DataKey::SwapFeeDelegate(pair.clone());
    match delegate {
        Some(addr) => {
            env.storage().persistent().set(&key, addr);
            extend_ttl(env, &key);
        }
        None => env.storage().persistent().remove(&key),
    }
}
