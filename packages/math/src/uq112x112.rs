// SPDX-License-Identifier: MIT
// UQ112x112 price encoding and time-weighted accumulation

use soroban_sdk::{Env, U256};

use crate::constants::RESOLUTION;
use crate::wide::{wrapping_add, wrapping_sub};

/// Encode `numerator / denominator` as a UQ112x112 value.
///
/// Both inputs are reserves, so they are bounded by 2^112 and the
/// shifted numerator stays below 2^224.
pub fn encode_price(env: &Env, numerator: u128, denominator: u128) -> U256 {
    if denominator == 0 { panic!("encode_price: zero denominator"); }

    U256::from_u128(env, numerator)
        .shl(RESOLUTION)
        .div(&U256::from_u128(env, denominator))
}

/// Add `price(numerator / denominator) * elapsed` to a cumulative value.
///
/// The accumulator wraps modulo 2^256; consumers take differences of two
/// snapshots with `cumulative_delta`, which stays correct across a wrap.
pub fn accumulate_price(
    env: &Env,
    cumulative: &U256,
    numerator: u128,
    denominator: u128,
    elapsed: u32,
) -> U256 {
    let delta = encode_price(env, numerator, denominator).mul(&U256::from_u32(env, elapsed));
    wrapping_add(env, cumulative, &delta)
}

/// Difference between two accumulator snapshots (`later - earlier`, wrapping)
pub fn cumulative_delta(env: &Env, later: &U256, earlier: &U256) -> U256 {
    wrapping_sub(env, later, earlier)
}

/// Time-weighted average price over `elapsed` seconds, still in UQ112x112
pub fn average_price(env: &Env, later: &U256, earlier: &U256, elapsed: u32) -> U256 {
    if elapsed == 0 { panic!("average_price: zero interval"); }

    cumulative_delta(env, later, earlier).div(&U256::from_u32(env, elapsed))
}
