//! Fee router events

use soroban_sdk::{Address, Env, Symbol};

use crate::types::HarvestSummary;

/// Emitted when the router is initialized
pub fn emit_initialized(env: &Env, owner: &Address, registry: &Address) {
    env.events().publish(
        (Symbol::new(env, "RouterInit"),),
        (owner.clone(), registry.clone()),
    );
}

/// Emitted per harvested pair with the amounts the burn returned
pub fn emit_fee_harvested(env: &Env, pair: &Address, shares: u128, amount0: i128, amount1: i128) {
    env.events().publish(
        (Symbol::new(env, "FeeHarvested"), pair.clone()),
        (shares, amount0, amount1),
    );
}

/// Emitted once per call after the bridge total is paid out
pub fn emit_fee_distributed(env: &Env, summary: &HarvestSummary) {
    env.events().publish(
        (Symbol::new(env, "FeeDistributed"),),
        summary.clone(),
    );
}

pub fn emit_receivers_updated(env: &Env, primary: &Address, secondary: &Address) {
    env.events().publish(
        (Symbol::new(env, "ReceiversUpdated"),),
        (primary.clone(), secondary.clone()),
    );
}

pub fn emit_split_updated(env: &Env, old: u64, new: u64) {
    env.events().publish(
        (Symbol::new(env, "SplitUpdated"),),
        (old, new),
    );
}

pub fn emit_ownership_transferred(env: &Env, old: &Address, new: &Address) {
    env.events().publish(
        (Symbol::new(env, "OwnershipTransferred"),),
        (old.clone(), new.clone()),
    );
}
