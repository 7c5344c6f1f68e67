// SPDX-License-Identifier: MIT
// 256-bit helpers built on the host U256 type

use soroban_sdk::{Env, U256};

/// Type conversion helpers
#[inline]
pub fn i128_to_u128_safe(x: i128) -> u128 {
    if x <= 0 { 0 } else { x as u128 }
}

#[inline]
pub fn u128_to_i128_saturating(x: u128) -> i128 {
    if x > i128::MAX as u128 { i128::MAX } else { x as i128 }
}

/// Safe multiply-divide using U256 to prevent overflow
/// Calculates: floor((a * b) / denominator)
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 { panic!("mul_div: divide by zero"); }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let result = product.div(&U256::from_u128(env, denominator));

    result.to_u128().unwrap_or(u128::MAX)
}

/// Full 256-bit product of two u128 values
pub fn product(env: &Env, a: u128, b: u128) -> U256 {
    U256::from_u128(env, a).mul(&U256::from_u128(env, b))
}

/// Largest representable U256 (2^256 - 1)
pub fn u256_max(env: &Env) -> U256 {
    U256::from_parts(env, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
}

/// Addition modulo 2^256.
///
/// The host `add` traps on overflow, so the wrap is computed from the
/// remaining headroom instead.
pub fn wrapping_add(env: &Env, a: &U256, b: &U256) -> U256 {
    let room = u256_max(env).sub(a);
    if *b > room {
        // a + b - 2^256 == b - (room + 1)
        b.sub(&room).sub(&U256::from_u32(env, 1))
    } else {
        a.add(b)
    }
}

/// Subtraction modulo 2^256, the inverse of `wrapping_add`.
pub fn wrapping_sub(env: &Env, a: &U256, b: &U256) -> U256 {
    if *a >= *b {
        a.sub(b)
    } else {
        // a - b + 2^256 == (MAX - b) + a + 1
        u256_max(env).sub(b).add(a).add(&U256::from_u32(env, 1))
    }
}

/// Floor square root of a u128 (Newton iteration from above)
pub fn sqrt_u128(y: u128) -> u128 {
    if y < 2 {
        return y;
    }
    let bits = 128 - y.leading_zeros();
    let mut z = 1u128 << ((bits + 1) / 2);
    loop {
        let x = (y / z + z) >> 1;
        if x >= z {
            return z;
        }
        z = x;
    }
}

/// Floor square root of a U256
pub fn sqrt(env: &Env, y: &U256) -> U256 {
    if let Some(small) = y.to_u128() {
        return U256::from_u128(env, sqrt_u128(small));
    }

    // y >= 2^128 here, so the high half is non-zero
    let high = y.shr(128).to_u128().unwrap_or(u128::MAX);
    let bits = 256 - high.leading_zeros();
    let mut z = U256::from_u32(env, 1).shl((bits + 1) / 2);
    loop {
        let x = y.div(&z).add(&z).shr(1);
        if x >= z {
            return z;
        }
        z = x;
    }
}

/// floor(sqrt(a * b)), always fits in u128
pub fn sqrt_product(env: &Env, a: u128, b: u128) -> u128 {
    sqrt(env, &product(env, a, b)).to_u128().unwrap_or(u128::MAX)
}
