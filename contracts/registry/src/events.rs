//! Registry events

use soroban_sdk::{Address, BytesN, Env, Symbol};

/// Emitted when the registry is initialized
pub fn emit_initialized(env: &Env, fee_to_setter: &Address) {
    env.events().publish(
        (Symbol::new(env, "RegistryInit"),),
        (fee_to_setter.clone(),),
    );
}

/// Emitted when a pair is created
/// Data: (token0, token1, pair, index, swap_fee_bps)
pub fn emit_pair_created(
    env: &Env,
    token0: &Address,
    token1: &Address,
    pair: &Address,
    index: u32,
    swap_fee_bps: u32,
) {
    env.events().publish(
        (Symbol::new(env, "PairCreated"),),
        (token0.clone(), token1.clone(), pair.clone(), index, swap_fee_bps),
    );
}

pub fn emit_fee_to_updated(env: &Env, fee_to: &Option<Address>) {
    env.events().publish(
        (Symbol::new(env, "FeeToUpdated"),),
        (fee_to.clone(),),
    );
}

pub fn emit_fee_to_setter_updated(env: &Env, old: &Address, new: &Address) {
    env.events().publish(
        (Symbol::new(env, "FeeToSetterUpdated"),),
        (old.clone(), new.clone()),
    );
}

pub fn emit_protocol_fee_updated(env: &Env, denominator: u32) {
    env.events().publish(
        (Symbol::new(env, "ProtocolFeeUpdated"),),
        (denominator,),
    );
}

pub fn emit_pair_wasm_updated(env: &Env, wasm_hash: &BytesN<32>) {
    env.events().publish(
        (Symbol::new(env, "PairWasmUpdated"),),
        (wasm_hash.clone(),),
    );
}

pub fn emit_discount_updated(env: &Env, asset: &Address, discounted: bool) {
    env.events().publish(
        (Symbol::new(env, "DiscountUpdated"),),
        (asset.clone(), discounted),
    );
}

pub fn emit_fee_delegate_updated(env: &Env, pair: &Address, delegate: &Option<Address>) {
    env.events().publish(
        (Symbol::new(env, "FeeDelegateUpdated"), pair.clone()),
        (delegate.clone(),),
    );
}
