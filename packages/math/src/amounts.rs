// SPDX-License-Identifier: MIT
// Constant-product swap quoting and the K check

use soroban_sdk::{Env, U256};

use crate::constants::FEE_DENOMINATOR;
use crate::wide::{mul_div, product};

/// Output for an exact input against a constant-product pair.
///
/// amount_in_with_fee = amount_in * (10000 - fee)
/// out = amount_in_with_fee * reserve_out / (reserve_in * 10000 + amount_in_with_fee)
///
/// Computed in 256 bits, so any u128 input is exact while the reserves
/// stay within MAX_RESERVE. Returns 0 if either reserve is empty.
pub fn get_amount_out(
    env: &Env,
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
    fee_bps: u32,
) -> u128 {
    if amount_in == 0 || reserve_in == 0 || reserve_out == 0 {
        return 0;
    }

    let fee_complement = FEE_DENOMINATOR.saturating_sub(fee_bps as u128);
    let amount_in_with_fee = product(env, amount_in, fee_complement);
    let numerator = amount_in_with_fee.mul(&U256::from_u128(env, reserve_out));
    let denominator = product(env, reserve_in, FEE_DENOMINATOR).add(&amount_in_with_fee);

    // out < reserve_out, so it always fits
    numerator.div(&denominator).to_u128().unwrap_or(reserve_out)
}

/// Smallest input that buys `amount_out`, or `None` when the pair
/// cannot supply that much.
pub fn get_amount_in(
    env: &Env,
    amount_out: u128,
    reserve_in: u128,
    reserve_out: u128,
    fee_bps: u32,
) -> Option<u128> {
    if amount_out == 0 || reserve_in == 0 || amount_out >= reserve_out {
        return None;
    }

    let fee_complement = FEE_DENOMINATOR.saturating_sub(fee_bps as u128);
    let numerator = product(env, reserve_in, amount_out).mul(&U256::from_u128(env, FEE_DENOMINATOR));
    let denominator = product(env, reserve_out - amount_out, fee_complement);

    numerator
        .div(&denominator)
        .to_u128()
        .and_then(|x| x.checked_add(1))
}

/// Amount of the other asset with equal value at the current reserve ratio
pub fn quote(env: &Env, amount_a: u128, reserve_a: u128, reserve_b: u128) -> u128 {
    if reserve_a == 0 {
        return 0;
    }
    mul_div(env, amount_a, reserve_b, reserve_a)
}

/// Fee-adjusted constant-product check applied after every swap.
///
/// (b0 * 10000 - in0 * fee) * (b1 * 10000 - in1 * fee) >= r0 * r1 * 10000^2
///
/// Balances must already be known to fit in 112 bits.
pub fn k_invariant_holds(
    env: &Env,
    balances: (u128, u128),
    amounts_in: (u128, u128),
    reserves: (u128, u128),
    fee_bps: u32,
) -> bool {
    let fee = fee_bps as u128;
    let adjusted0 = balances.0
        .saturating_mul(FEE_DENOMINATOR)
        .saturating_sub(amounts_in.0.saturating_mul(fee));
    let adjusted1 = balances.1
        .saturating_mul(FEE_DENOMINATOR)
        .saturating_sub(amounts_in.1.saturating_mul(fee));

    let after = product(env, adjusted0, adjusted1);
    let before = product(env, reserves.0, reserves.1)
        .mul(&product(env, FEE_DENOMINATOR, FEE_DENOMINATOR));

    after >= before
}
