// Pair storage module for NarwhalSwap

use soroban_sdk::{contracttype, Address, Env};

use crate::error::PairError;
use crate::types::PairState;

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Reserves, oracle and fee state
    State,
    /// Share balance by holder
    Shares(Address),
    /// Reentrancy flag (temporary storage)
    Lock,
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
// PAIR STATE
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::State)
}

pub fn write_state(env: &Env, state: &PairState) {
    env.storage().persistent().set(&DataKey::State, state);
    extend_ttl(env, &DataKey::State);
}

pub fn read_state(env: &Env) -> Result<PairState, PairError> {
    env.storage()
        .persistent()
        .get(&DataKey::State)
        .ok_or(PairError::NotInitialized)
}

// ============================================================
// SHARES
// ============================================================

pub fn read_shares(env: &Env, holder: &Address) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::Shares(holder.clone()))
        .unwrap_or(0)
}

pub fn write_shares(env: &Env, holder: &Address, amount: u128) {
    let key = DataKey::Shares(holder.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_ttl(env, &key);
    }
}

// ============================================================
// REENTRANCY LOCK
// ============================================================

/// Marks the pair as mid-operation for the rest of the invocation.
///
/// The host refuses to re-enter a contract that is already on the call
/// stack, so a nested call into this pair traps before it reaches this
/// check. The flag still spans the whole operation, flash callback
/// included. An error return rolls back the invocation, so only the
/// success path releases it.
pub fn acquire_lock(env: &Env) -> Result<(), PairError> {
    if env.storage().temporary().has(&DataKey::Lock) {
        return Err(PairError::Locked);
    }
    env.storage().temporary().set(&DataKey::Lock, &true);
    Ok(())
}

pub fn release_lock(env: &Env) {
    env.storage().temporary().remove(&DataKey::Lock);
}
