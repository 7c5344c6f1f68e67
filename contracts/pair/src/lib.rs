#![no_std]

//! # NarwhalSwap Pair
//!
//! Constant-product ledger for one asset pair, deployed by the registry.
//!
//! ## Responsibilities:
//! 1. Hold both assets and track the last synchronized reserves
//! 2. Mint/burn liquidity shares, run optimistic swaps under the K check
//! 3. Accumulate UQ112x112 time-weighted prices
//! 4. Mint the protocol's share of fee growth to the registry's `fee_to`
//!
//! Callers follow "transfer, then call": send assets (or shares) to the
//! pair address, then call `mint`, `swap` or `burn`.

use soroban_sdk::{contract, contractimpl, Address, Bytes, Env, U256};

use narwhalswap_math::{
    get_amount_in, get_amount_out, i128_to_u128_safe, u128_to_i128_saturating, MAX_SWAP_FEE_BPS,
};

mod error;
mod events;
mod ledger;
mod storage;
mod types;

pub use error::PairError;
use events::*;
pub use ledger::null_address;
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct NarwhalPair;

#[contractimpl]
impl NarwhalPair {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Bind the pair to its registry and sorted assets. Called once by the
    /// registry right after deployment.
    pub fn initialize(
        env: Env,
        registry: Address,
        token0: Address,
        token1: Address,
        swap_fee_bps: u32,
    ) -> Result<(), PairError> {
        registry.require_auth();

        if is_initialized(&env) {
            return Err(PairError::AlreadyInitialized);
        }
        if swap_fee_bps > MAX_SWAP_FEE_BPS {
            return Err(PairError::FeeTooHigh);
        }

        let zero = U256::from_u32(&env, 0);
        let state = PairState {
            registry: registry.clone(),
            token0: token0.clone(),
            token1: token1.clone(),
            reserve0: 0,
            reserve1: 0,
            block_timestamp_last: 0,
            price0_cumulative_last: zero.clone(),
            price1_cumulative_last: zero.clone(),
            k_last: zero,
            total_shares: 0,
            swap_fee_bps,
        };
        write_state(&env, &state);

        emit_initialized(&env, &registry, &token0, &token1, swap_fee_bps);
        Ok(())
    }

    // ========================================================
    // LIQUIDITY AND SWAPS (Write)
    // ========================================================

    /// Mint shares to `to` for the assets transferred in since the last update
    pub fn mint(env: Env, to: Address) -> Result<u128, PairError> {
        ledger::mint(&env, &to)
    }

    /// Burn the shares previously transferred to the pair itself
    pub fn burn(env: Env, to: Address) -> Result<(i128, i128), PairError> {
        let (amount0, amount1) = ledger::burn(&env, &to)?;
        Ok((u128_to_i128_saturating(amount0), u128_to_i128_saturating(amount1)))
    }

    /// Pay out the requested amounts, run the flash callback when `data` is
    /// non-empty, then require the fee-adjusted product not to decrease
    pub fn swap(
        env: Env,
        amount0_out: i128,
        amount1_out: i128,
        to: Address,
        data: Bytes,
    ) -> Result<(), PairError> {
        ledger::swap(&env, amount0_out, amount1_out, &to, &data)
    }

    pub fn skim(env: Env, to: Address) -> Result<(), PairError> {
        ledger::skim(&env, &to)
    }

    pub fn sync(env: Env) -> Result<(), PairError> {
        ledger::sync(&env)
    }

    pub fn transfer_shares(
        env: Env,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), PairError> {
        from.require_auth();
        ledger::transfer_shares(&env, &from, &to, amount)
    }

    // ========================================================
    // ADMIN (Write)
    // ========================================================

    /// Set the swap fee. Only the registry may call this; it checks the
    /// caller against the fee setter and the pair's delegate.
    pub fn set_swap_fee(env: Env, swap_fee_bps: u32) -> Result<(), PairError> {
        let mut state = read_state(&env)?;
        state.registry.require_auth();

        if swap_fee_bps > MAX_SWAP_FEE_BPS {
            return Err(PairError::FeeTooHigh);
        }
        state.swap_fee_bps = swap_fee_bps;
        write_state(&env, &state);

        emit_swap_fee_updated(&env, swap_fee_bps);
        Ok(())
    }

    // ========================================================
    // VIEWS (Read)
    // ========================================================

    pub fn get_pair_info(env: Env) -> Result<PairState, PairError> {
        read_state(&env)
    }

    pub fn registry(env: Env) -> Result<Address, PairError> {
        Ok(read_state(&env)?.registry)
    }

    /// (reserve0, reserve1, block_timestamp_last)
    pub fn get_reserves(env: Env) -> Result<(u128, u128, u32), PairError> {
        let state = read_state(&env)?;
        Ok((state.reserve0, state.reserve1, state.block_timestamp_last))
    }

    pub fn get_tokens(env: Env) -> Result<(Address, Address), PairError> {
        let state = read_state(&env)?;
        Ok((state.token0, state.token1))
    }

    pub fn swap_fee(env: Env) -> Result<u32, PairError> {
        Ok(read_state(&env)?.swap_fee_bps)
    }

    pub fn total_shares(env: Env) -> Result<u128, PairError> {
        Ok(read_state(&env)?.total_shares)
    }

    pub fn share_balance(env: Env, holder: Address) -> u128 {
        read_shares(&env, &holder)
    }

    /// Quote the output for an exact input at current reserves
    pub fn get_amount_out(env: Env, token_in: Address, amount_in: i128) -> Result<i128, PairError> {
        let state = read_state(&env)?;
        let (reserve_in, reserve_out) = Self::oriented_reserves(&state, &token_in)?;

        let out = get_amount_out(
            &env,
            i128_to_u128_safe(amount_in),
            reserve_in,
            reserve_out,
            state.swap_fee_bps,
        );
        Ok(u128_to_i128_saturating(out))
    }

    /// Quote the input needed to receive `amount_out` of `token_out`
    pub fn get_amount_in(env: Env, token_out: Address, amount_out: i128) -> Result<i128, PairError> {
        let state = read_state(&env)?;
        let (reserve_out, reserve_in) = Self::oriented_reserves(&state, &token_out)?;

        get_amount_in(
            &env,
            i128_to_u128_safe(amount_out),
            reserve_in,
            reserve_out,
            state.swap_fee_bps,
        )
        .map(u128_to_i128_saturating)
        .ok_or(PairError::InsufficientLiquidity)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    /// (reserve of `token`, reserve of the other asset)
    fn oriented_reserves(state: &PairState, token: &Address) -> Result<(u128, u128), PairError> {
        if *token == state.token0 {
            Ok((state.reserve0, state.reserve1))
        } else if *token == state.token1 {
            Ok((state.reserve1, state.reserve0))
        } else {
            Err(PairError::TokenNotInPair)
        }
    }
}
