// NarwhalSwap Math Package

#![no_std]

pub mod amounts;
pub mod constants;
pub mod liquidity;
pub mod uq112x112;
pub mod wide;

pub use constants::*;

pub use wide::{
    i128_to_u128_safe,
    mul_div,
    product,
    sqrt,
    sqrt_product,
    sqrt_u128,
    u128_to_i128_saturating,
    wrapping_add,
    wrapping_sub,
};

pub use uq112x112::{accumulate_price, average_price, cumulative_delta, encode_price};

pub use amounts::{get_amount_in, get_amount_out, k_invariant_holds, quote};

pub use liquidity::{
    get_amounts_for_shares,
    get_initial_liquidity,
    get_proportional_liquidity,
    get_protocol_fee_liquidity,
};
