//! Pair ledger mechanics: custody, shares, reserves, oracle and protocol fee.
//!
//! The pair contract holds both assets itself. Whatever it holds above the
//! recorded reserves is what a caller transferred in before `mint` or `swap`.

use soroban_sdk::{log, token, vec, Address, Bytes, Env, IntoVal, String, Symbol, U256};

use narwhalswap_math::{
    accumulate_price, get_amounts_for_shares, get_initial_liquidity, get_proportional_liquidity,
    get_protocol_fee_liquidity, i128_to_u128_safe, k_invariant_holds, product, sqrt, sqrt_product,
    u128_to_i128_saturating, MAX_RESERVE, MINIMUM_LIQUIDITY, NULL_ACCOUNT,
};

use crate::error::PairError;
use crate::events::*;
use crate::storage::*;
use crate::types::PairState;

/// Function invoked on the swap recipient when callback data is supplied
const FLASH_CALLBACK: &str = "on_flash_swap";

// ============================================================
// LIQUIDITY
// ============================================================

/// Mint shares for whatever was transferred in since the last sync
pub fn mint(env: &Env, to: &Address) -> Result<u128, PairError> {
    let mut pair = read_state(env)?;
    acquire_lock(env)?;

    let balance0 = held_balance(env, &pair.token0);
    let balance1 = held_balance(env, &pair.token1);
    let amount0 = balance0.saturating_sub(pair.reserve0);
    let amount1 = balance1.saturating_sub(pair.reserve1);

    let fee_on = mint_protocol_fee(env, &mut pair);

    let liquidity = if pair.total_shares == 0 {
        let liquidity = get_initial_liquidity(env, amount0, amount1)
            .ok_or(PairError::InsufficientInitialLiquidity)?;
        mint_shares(env, &mut pair, &null_address(env), MINIMUM_LIQUIDITY);
        liquidity
    } else {
        get_proportional_liquidity(
            env,
            amount0,
            amount1,
            pair.reserve0,
            pair.reserve1,
            pair.total_shares,
        )
    };

    if liquidity == 0 {
        return Err(PairError::InsufficientLiquidityMinted);
    }
    mint_shares(env, &mut pair, to, liquidity);

    update(env, &mut pair, balance0, balance1)?;
    if fee_on {
        pair.k_last = product(env, pair.reserve0, pair.reserve1);
    }
    write_state(env, &pair);
    release_lock(env);

    emit_mint(env, to, amount0, amount1, liquidity);
    Ok(liquidity)
}

/// Burn the shares the pair holds for itself and pay out the underlying
pub fn burn(env: &Env, to: &Address) -> Result<(u128, u128), PairError> {
    let mut pair = read_state(env)?;
    acquire_lock(env)?;

    let this = env.current_contract_address();
    let balance0 = held_balance(env, &pair.token0);
    let balance1 = held_balance(env, &pair.token1);
    let liquidity = read_shares(env, &this);

    let fee_on = mint_protocol_fee(env, &mut pair);

    let (amount0, amount1) =
        get_amounts_for_shares(env, liquidity, balance0, balance1, pair.total_shares);
    if amount0 == 0 || amount1 == 0 {
        return Err(PairError::InsufficientLiquidityBurned);
    }

    burn_shares(env, &mut pair, &this, liquidity);
    transfer_out(env, &pair.token0, to, amount0);
    transfer_out(env, &pair.token1, to, amount1);

    let balance0 = held_balance(env, &pair.token0);
    let balance1 = held_balance(env, &pair.token1);
    update(env, &mut pair, balance0, balance1)?;
    if fee_on {
        pair.k_last = product(env, pair.reserve0, pair.reserve1);
    }
    write_state(env, &pair);
    release_lock(env);

    emit_burn(env, to, amount0, amount1, liquidity);
    Ok((amount0, amount1))
}

// ============================================================
// SWAP
// ============================================================

/// Optimistic swap: pay out first, optionally call back, then enforce K
pub fn swap(
    env: &Env,
    amount0_out: i128,
    amount1_out: i128,
    to: &Address,
    data: &Bytes,
) -> Result<(), PairError> {
    if amount0_out < 0 || amount1_out < 0 || (amount0_out == 0 && amount1_out == 0) {
        return Err(PairError::InsufficientOutput);
    }
    let out0 = amount0_out as u128;
    let out1 = amount1_out as u128;

    let mut pair = read_state(env)?;
    acquire_lock(env)?;

    let (reserve0, reserve1) = (pair.reserve0, pair.reserve1);
    if out0 >= reserve0 || out1 >= reserve1 {
        return Err(PairError::InsufficientLiquidity);
    }
    if *to == pair.token0 || *to == pair.token1 {
        return Err(PairError::InvalidRecipient);
    }

    if out0 > 0 {
        transfer_out(env, &pair.token0, to, out0);
    }
    if out1 > 0 {
        transfer_out(env, &pair.token1, to, out1);
    }
    if !data.is_empty() {
        let _: () = env.invoke_contract(
            to,
            &Symbol::new(env, FLASH_CALLBACK),
            vec![
                env,
                env.current_contract_address().into_val(env),
                amount0_out.into_val(env),
                amount1_out.into_val(env),
                data.into_val(env),
            ],
        );
    }

    let balance0 = held_balance(env, &pair.token0);
    let balance1 = held_balance(env, &pair.token1);
    let amount0_in = balance0.saturating_sub(reserve0 - out0);
    let amount1_in = balance1.saturating_sub(reserve1 - out1);
    if amount0_in == 0 && amount1_in == 0 {
        return Err(PairError::InsufficientInputAmount);
    }

    // Bound balances before the wide product check
    if balance0 > MAX_RESERVE || balance1 > MAX_RESERVE {
        return Err(PairError::ReserveOverflow);
    }
    if !k_invariant_holds(
        env,
        (balance0, balance1),
        (amount0_in, amount1_in),
        (reserve0, reserve1),
        pair.swap_fee_bps,
    ) {
        return Err(PairError::InvariantViolation);
    }

    update(env, &mut pair, balance0, balance1)?;
    write_state(env, &pair);
    release_lock(env);

    emit_swap(env, (amount0_in, amount1_in), (out0, out1), to);
    Ok(())
}

// ============================================================
// RECOVERY
// ============================================================

/// Send any held balance above the reserves to `to`
pub fn skim(env: &Env, to: &Address) -> Result<(), PairError> {
    let pair = read_state(env)?;
    acquire_lock(env)?;

    let excess0 = held_balance(env, &pair.token0).saturating_sub(pair.reserve0);
    let excess1 = held_balance(env, &pair.token1).saturating_sub(pair.reserve1);
    if excess0 > 0 {
        transfer_out(env, &pair.token0, to, excess0);
    }
    if excess1 > 0 {
        transfer_out(env, &pair.token1, to, excess1);
    }

    release_lock(env);
    Ok(())
}

/// Overwrite reserves with the held balances
pub fn sync(env: &Env) -> Result<(), PairError> {
    let mut pair = read_state(env)?;
    acquire_lock(env)?;

    let balance0 = held_balance(env, &pair.token0);
    let balance1 = held_balance(env, &pair.token1);
    update(env, &mut pair, balance0, balance1)?;
    write_state(env, &pair);

    release_lock(env);
    Ok(())
}

// ============================================================
// SHARES
// ============================================================

pub fn transfer_shares(env: &Env, from: &Address, to: &Address, amount: u128) -> Result<(), PairError> {
    read_state(env)?;

    let from_balance = read_shares(env, from);
    if from_balance < amount {
        return Err(PairError::InsufficientShareBalance);
    }
    if from != to {
        write_shares(env, from, from_balance - amount);
        let to_balance = read_shares(env, to);
        write_shares(env, to, to_balance + amount);
    }

    emit_shares_transfer(env, &Some(from.clone()), &Some(to.clone()), amount);
    Ok(())
}

fn mint_shares(env: &Env, pair: &mut PairState, to: &Address, amount: u128) {
    let balance = read_shares(env, to);
    write_shares(env, to, balance + amount);
    pair.total_shares += amount;
    emit_shares_transfer(env, &None, &Some(to.clone()), amount);
}

fn burn_shares(env: &Env, pair: &mut PairState, from: &Address, amount: u128) {
    let balance = read_shares(env, from);
    write_shares(env, from, balance.saturating_sub(amount));
    pair.total_shares = pair.total_shares.saturating_sub(amount);
    emit_shares_transfer(env, &Some(from.clone()), &None, amount);
}

// ============================================================
// INTERNAL HELPERS
// ============================================================

/// Holder of the shares locked by the first deposit
pub fn null_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, NULL_ACCOUNT))
}

fn held_balance(env: &Env, token: &Address) -> u128 {
    i128_to_u128_safe(token::Client::new(env, token).balance(&env.current_contract_address()))
}

fn transfer_out(env: &Env, token: &Address, to: &Address, amount: u128) {
    token::Client::new(env, token).transfer(
        &env.current_contract_address(),
        to,
        &u128_to_i128_saturating(amount),
    );
}

/// Accumulate prices over the elapsed time, then store the new reserves
fn update(env: &Env, pair: &mut PairState, balance0: u128, balance1: u128) -> Result<(), PairError> {
    if balance0 > MAX_RESERVE || balance1 > MAX_RESERVE {
        return Err(PairError::ReserveOverflow);
    }

    let now = (env.ledger().timestamp() & u32::MAX as u64) as u32;
    let elapsed = now.wrapping_sub(pair.block_timestamp_last);
    if elapsed > 0 && pair.reserve0 != 0 && pair.reserve1 != 0 {
        pair.price0_cumulative_last =
            accumulate_price(env, &pair.price0_cumulative_last, pair.reserve1, pair.reserve0, elapsed);
        pair.price1_cumulative_last =
            accumulate_price(env, &pair.price1_cumulative_last, pair.reserve0, pair.reserve1, elapsed);
    }

    pair.reserve0 = balance0;
    pair.reserve1 = balance1;
    pair.block_timestamp_last = now;

    emit_sync(env, balance0, balance1);
    Ok(())
}

/// Mint the protocol's cut of growth in sqrt(k) since the last checkpoint.
/// Returns whether the protocol fee is on.
fn mint_protocol_fee(env: &Env, pair: &mut PairState) -> bool {
    let fee_to: Option<Address> =
        env.invoke_contract(&pair.registry, &Symbol::new(env, "fee_to"), vec![env]);
    let zero = U256::from_u32(env, 0);

    match fee_to {
        Some(fee_to) => {
            if pair.k_last != zero {
                let denominator: u32 = env.invoke_contract(
                    &pair.registry,
                    &Symbol::new(env, "protocol_fee_denominator"),
                    vec![env],
                );
                let root_k = sqrt_product(env, pair.reserve0, pair.reserve1);
                let root_k_last = sqrt(env, &pair.k_last).to_u128().unwrap_or(u128::MAX);
                let liquidity = get_protocol_fee_liquidity(
                    env,
                    pair.total_shares,
                    root_k,
                    root_k_last,
                    denominator,
                );
                if liquidity > 0 {
                    log!(env, "protocol fee shares minted", liquidity);
                    mint_shares(env, pair, &fee_to, liquidity);
                }
            }
            true
        }
        None => {
            if pair.k_last != zero {
                pair.k_last = zero;
            }
            false
        }
    }
}
