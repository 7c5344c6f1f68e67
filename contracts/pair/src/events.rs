//! Pair events. Topics carry the event name; the pair is the emitting
//! contract, so it is not repeated in the payload.

use soroban_sdk::{Address, Env, Symbol};

/// Emitted once when the registry initializes the pair
/// Data: (registry, token0, token1, swap_fee_bps)
pub fn emit_initialized(
    env: &Env,
    registry: &Address,
    token0: &Address,
    token1: &Address,
    swap_fee_bps: u32,
) {
    env.events().publish(
        (Symbol::new(env, "PairInit"),),
        (registry.clone(), token0.clone(), token1.clone(), swap_fee_bps),
    );
}

/// Emitted after liquidity is added
/// Data: (to, amount0, amount1, shares)
pub fn emit_mint(env: &Env, to: &Address, amount0: u128, amount1: u128, shares: u128) {
    env.events().publish(
        (Symbol::new(env, "Mint"),),
        (to.clone(), amount0, amount1, shares),
    );
}

/// Emitted after liquidity is removed
/// Data: (to, amount0, amount1, shares)
pub fn emit_burn(env: &Env, to: &Address, amount0: u128, amount1: u128, shares: u128) {
    env.events().publish(
        (Symbol::new(env, "Burn"),),
        (to.clone(), amount0, amount1, shares),
    );
}

/// Emitted after a swap settles
/// Data: (amount0_in, amount1_in, amount0_out, amount1_out, to)
pub fn emit_swap(env: &Env, amounts_in: (u128, u128), amounts_out: (u128, u128), to: &Address) {
    env.events().publish(
        (Symbol::new(env, "Swap"),),
        (amounts_in.0, amounts_in.1, amounts_out.0, amounts_out.1, to.clone()),
    );
}

/// Emitted on every reserve update
pub fn emit_sync(env: &Env, reserve0: u128, reserve1: u128) {
    env.events().publish((Symbol::new(env, "Sync"),), (reserve0, reserve1));
}

pub fn emit_swap_fee_updated(env: &Env, swap_fee_bps: u32) {
    env.events().publish(
        (Symbol::new(env, "SwapFeeUpdated"),),
        (swap_fee_bps,),
    );
}

/// Emitted on share mint (from = None), burn (to = None) and transfer
pub fn emit_shares_transfer(env: &Env, from: &Option<Address>, to: &Option<Address>, amount: u128) {
    env.events().publish(
        (Symbol::new(env, "SharesTransfer"),),
        (from.clone(), to.clone(), amount),
    );
}
