#![no_std]

//! # NarwhalSwap Registry
//!
//! Creates one pair contract per asset pair and owns the parameters every
//! pair reads.
//!
//! ## Responsibilities:
//! 1. Deploy pairs at addresses derived from the sorted asset pair
//! 2. Assign each new pair its fee class
//! 3. Index pairs by assets and by creation order
//! 4. Hold the protocol-fee receiver and denominator the pairs consult
//! 5. Gate swap-fee changes to the fee setter or a pair's delegate

use soroban_sdk::{contract, contractimpl, vec, Address, BytesN, Env, IntoVal, Symbol, Vec};

use narwhalswap_math::{
    DEFAULT_PROTOCOL_FEE_DENOMINATOR, DEFAULT_SWAP_FEE_BPS, DISCOUNTED_SWAP_FEE_BPS,
    MAX_SWAP_FEE_BPS,
};

mod error;
mod events;
mod registry;
mod storage;
mod types;

pub use error::RegistryError;
use events::*;
pub use registry::{pair_salt, sort_tokens};
use registry::{deploy_pair, null_address, pair_address, require_fee_to_setter};
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct NarwhalRegistry;

#[contractimpl]
impl NarwhalRegistry {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize the registry.
    ///
    /// # Arguments
    /// * `fee_to_setter` - Address allowed to change registry parameters
    /// * `pair_wasm_hash` - Uploaded pair contract code
    /// * `discounted_assets` - Assets whose new pairs get the halved default fee
    pub fn initialize(
        env: Env,
        fee_to_setter: Address,
        pair_wasm_hash: BytesN<32>,
        discounted_assets: Vec<Address>,
    ) -> Result<(), RegistryError> {
        fee_to_setter.require_auth();

        if is_initialized(&env) {
            return Err(RegistryError::AlreadyInitialized);
        }

        let config = RegistryConfig {
            fee_to: None,
            fee_to_setter: fee_to_setter.clone(),
            protocol_fee_denominator: DEFAULT_PROTOCOL_FEE_DENOMINATOR,
            pair_wasm_hash,
        };
        write_config(&env, &config);
        for asset in discounted_assets.iter() {
            write_discounted(&env, &asset, true);
        }
        set_initialized(&env);

        emit_initialized(&env, &fee_to_setter);
        Ok(())
    }

    // ========================================================
    // PAIR CREATION (Write)
    // ========================================================

    /// Deploy and initialize the pair for two assets, returning its address
    pub fn create_pair(
        env: Env,
        token_a: Address,
        token_b: Address,
    ) -> Result<Address, RegistryError> {
        let config = read_config(&env)?;
        if token_a == token_b {
            return Err(RegistryError::IdenticalAssets);
        }

        let (token0, token1) = sort_tokens(&token_a, &token_b);
        let null = null_address(&env);
        if token0 == null || token1 == null {
            return Err(RegistryError::ZeroAsset);
        }
        if read_pair(&env, &token0, &token1).is_some() {
            return Err(RegistryError::PairExists);
        }

        let swap_fee_bps = if is_discounted(&env, &token0) || is_discounted(&env, &token1) {
            DISCOUNTED_SWAP_FEE_BPS
        } else {
            DEFAULT_SWAP_FEE_BPS
        };

        let salt = pair_salt(&env, &token0, &token1);
        let pair = deploy_pair(&env, &config.pair_wasm_hash, salt);
        let _: () = env.invoke_contract(
            &pair,
            &Symbol::new(&env, "initialize"),
            vec![
                &env,
                env.current_contract_address().into_val(&env),
                token0.into_val(&env),
                token1.into_val(&env),
                swap_fee_bps.into_val(&env),
            ],
        );

        let index = register_pair(&env, &token0, &token1, &pair);

        emit_pair_created(&env, &token0, &token1, &pair, index, swap_fee_bps);
        Ok(pair)
    }

    // ========================================================
    // ADMIN (Write)
    // ========================================================

    /// Set the protocol-fee receiver; `None` turns the protocol fee off
    pub fn set_fee_to(
        env: Env,
        caller: Address,
        fee_to: Option<Address>,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        let mut config = require_fee_to_setter(&env, &caller)?;

        config.fee_to = fee_to.clone();
        write_config(&env, &config);

        emit_fee_to_updated(&env, &fee_to);
        Ok(())
    }

    pub fn set_fee_to_setter(
        env: Env,
        caller: Address,
        new_setter: Address,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        let mut config = require_fee_to_setter(&env, &caller)?;

        config.fee_to_setter = new_setter.clone();
        write_config(&env, &config);

        emit_fee_to_setter_updated(&env, &caller, &new_setter);
        Ok(())
    }

    /// Protocol receives 1/(denominator + 1) of fee growth; zero is rejected
    pub fn set_protocol_fee_denominator(
        env: Env,
        caller: Address,
        denominator: u32,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        let mut config = require_fee_to_setter(&env, &caller)?;

        if denominator == 0 {
            return Err(RegistryError::InvalidProtocolFee);
        }
        config.protocol_fee_denominator = denominator;
        write_config(&env, &config);

        emit_protocol_fee_updated(&env, denominator);
        Ok(())
    }

    /// Code used for pairs created from now on
    pub fn set_pair_wasm_hash(
        env: Env,
        caller: Address,
        wasm_hash: BytesN<32>,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        let mut config = require_fee_to_setter(&env, &caller)?;

        config.pair_wasm_hash = wasm_hash.clone();
        write_config(&env, &config);

        emit_pair_wasm_updated(&env, &wasm_hash);
        Ok(())
    }

    /// Add or remove an asset from the discounted set.
    /// Only pairs created afterwards are affected.
    pub fn set_discounted_asset(
        env: Env,
        caller: Address,
        asset: Address,
        discounted: bool,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        require_fee_to_setter(&env, &caller)?;

        write_discounted(&env, &asset, discounted);

        emit_discount_updated(&env, &asset, discounted);
        Ok(())
    }

    /// Name an extra address allowed to set one pair's swap fee
    pub fn set_swap_fee_delegate(
        env: Env,
        caller: Address,
        pair: Address,
        delegate: Option<Address>,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        require_fee_to_setter(&env, &caller)?;
        if !is_registered_pair(&env, &pair) {
            return Err(RegistryError::PairNotFound);
        }

        write_fee_delegate(&env, &pair, &delegate);

        emit_fee_delegate_updated(&env, &pair, &delegate);
        Ok(())
    }

    /// Set a pair's swap fee (fee setter or the pair's delegate)
    pub fn set_swap_fee(
        env: Env,
        caller: Address,
        pair: Address,
        swap_fee_bps: u32,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        let config = read_config(&env)?;
        if !is_registered_pair(&env, &pair) {
            return Err(RegistryError::PairNotFound);
        }

        let is_delegate = read_fee_delegate(&env, &pair).map_or(false, |d| d == caller);
        if caller != config.fee_to_setter && !is_delegate {
            return Err(RegistryError::Forbidden);
        }
        if swap_fee_bps > MAX_SWAP_FEE_BPS {
            return Err(RegistryError::FeeTooHigh);
        }

        let _: () = env.invoke_contract(
            &pair,
            &Symbol::new(&env, "set_swap_fee"),
            vec![&env, swap_fee_bps.into_val(&env)],
        );
        Ok(())
    }

    // ========================================================
    // VIEWS (Read)
    // ========================================================

    /// Order-independent lookup; `None` if the pair was never created
    pub fn get_pair(env: Env, token_a: Address, token_b: Address) -> Option<Address> {
        let (token0, token1) = sort_tokens(&token_a, &token_b);
        read_pair(&env, &token0, &token1)
    }

    /// Address the pair of these assets has (or will have once created)
    pub fn pair_address_for(env: Env, token_a: Address, token_b: Address) -> Address {
        pair_address(&env, &token_a, &token_b)
    }

    pub fn all_pairs_length(env: Env) -> u32 {
        read_pair_count(&env)
    }

    pub fn all_pairs(env: Env, index: u32) -> Option<Address> {
        read_pair_at(&env, index)
    }

    pub fn get_config(env: Env) -> Result<RegistryConfig, RegistryError> {
        read_config(&env)
    }

    pub fn fee_to(env: Env) -> Result<Option<Address>, RegistryError> {
        Ok(read_config(&env)?.fee_to)
    }

    pub fn fee_to_setter(env: Env) -> Result<Address, RegistryError> {
        Ok(read_config(&env)?.fee_to_setter)
    }

    pub fn protocol_fee_denominator(env: Env) -> Result<u32, RegistryError> {
        Ok(read_config(&env)?.protocol_fee_denominator)
    }

    pub fn is_discounted_asset(env: Env, asset: Address) -> bool {
        is_discounted(&env, &asset)
    }

    pub fn swap_fee_delegate(env: Env, pair: Address) -> Option<Address> {
        read_fee_delegate(&env, &pair)
    }
}
