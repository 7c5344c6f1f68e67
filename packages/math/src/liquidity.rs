// SPDX-License-Identifier: MIT
// Liquidity share calculations

use soroban_sdk::{Env, U256};

use crate::constants::MINIMUM_LIQUIDITY;
use crate::wide::{mul_div, sqrt_product};

/// Shares minted to the first depositor: floor(sqrt(a0 * a1)) - MINIMUM_LIQUIDITY.
///
/// Returns `None` when the geometric mean does not exceed the locked minimum.
pub fn get_initial_liquidity(env: &Env, amount0: u128, amount1: u128) -> Option<u128> {
    let root = sqrt_product(env, amount0, amount1);
    if root <= MINIMUM_LIQUIDITY {
        return None;
    }
    Some(root - MINIMUM_LIQUIDITY)
}

/// Shares for a deposit into a funded pair, rounded down on both sides
pub fn get_proportional_liquidity(
    env: &Env,
    amount0: u128,
    amount1: u128,
    reserve0: u128,
    reserve1: u128,
    total_shares: u128,
) -> u128 {
    if reserve0 == 0 || reserve1 == 0 {
        return 0;
    }
    let by0 = mul_div(env, amount0, total_shares, reserve0);
    let by1 = mul_div(env, amount1, total_shares, reserve1);
    by0.min(by1)
}

/// Underlying amounts released by burning `shares` out of `total_shares`
pub fn get_amounts_for_shares(
    env: &Env,
    shares: u128,
    balance0: u128,
    balance1: u128,
    total_shares: u128,
) -> (u128, u128) {
    if total_shares == 0 {
        return (0, 0);
    }
    (
        mul_div(env, shares, balance0, total_shares),
        mul_div(env, shares, balance1, total_shares),
    )
}

/// Protocol cut of liquidity growth since the last checkpoint.
///
/// total * (root_k - root_k_last) / (root_k * denominator + root_k_last)
pub fn get_protocol_fee_liquidity(
    env: &Env,
    total_shares: u128,
    root_k: u128,
    root_k_last: u128,
    denominator: u32,
) -> u128 {
    if root_k <= root_k_last {
        return 0;
    }

    let numerator = U256::from_u128(env, total_shares)
        .mul(&U256::from_u128(env, root_k - root_k_last));
    let divisor = U256::from_u128(env, root_k)
        .mul(&U256::from_u32(env, denominator))
        .add(&U256::from_u128(env, root_k_last));

    numerator.div(&divisor).to_u128().unwrap_or(0)
}
