#![no_std]

//! # NarwhalSwap Fee Router
//!
//! Converts protocol-fee shares of registry pairs into payouts.
//!
//! ## Flow:
//! 1. Burn the router's shares of each named pair
//! 2. Swap both underlying assets into the bridge asset
//! 3. Send the direct share of bridge value to the primary receiver
//! 4. Swap the rest into the secondary asset and split it between the
//!    secondary receiver and the burn sink
//!
//! ## Functions:
//! - Write (5): initialize, take_protocol_fee, change_receivers,
//!   change_split_proportion, transfer_ownership
//! - Read (1): get_config

use soroban_sdk::{contract, contractimpl, token, vec, Address, Bytes, Env, IntoVal, Symbol, Vec};

use narwhalswap_math::{
    get_amount_out, i128_to_u128_safe, mul_div, u128_to_i128_saturating, MAX_SPLIT_NUMERATOR,
    SPLIT_DENOMINATOR,
};

mod error;
mod events;
mod storage;
mod types;

pub use error::FeeRouterError;
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct NarwhalFeeRouter;

#[contractimpl]
impl NarwhalFeeRouter {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize the router for one registry
    pub fn initialize(
        env: Env,
        owner: Address,
        registry: Address,
        params: FeeRouterParams,
    ) -> Result<(), FeeRouterError> {
        owner.require_auth();

        if is_initialized(&env) {
            return Err(FeeRouterError::AlreadyInitialized);
        }
        if params.bridge_split_numerator as u128 > MAX_SPLIT_NUMERATOR {
            return Err(FeeRouterError::ProportionTooHigh);
        }

        let config = FeeRouterConfig {
            owner: owner.clone(),
            registry: registry.clone(),
            bridge_asset: params.bridge_asset,
            secondary_asset: params.secondary_asset,
            primary_receiver: params.primary_receiver,
            secondary_receiver: params.secondary_receiver,
            burn_sink: params.burn_sink,
            bridge_split_numerator: params.bridge_split_numerator,
        };
        write_config(&env, &config);
        set_initialized(&env);

        emit_initialized(&env, &owner, &registry);
        Ok(())
    }

    // ========================================================
    // HARVEST (Write)
    // ========================================================

    /// Burn the router's shares of every listed pair and pay out the proceeds.
    ///
    /// Any failure aborts the whole batch, including a listed pair where the
    /// router holds no shares (a repeated pair has none left the second time).
    pub fn take_protocol_fee(
        env: Env,
        pairs: Vec<Address>,
    ) -> Result<HarvestSummary, FeeRouterError> {
        let config = read_config(&env)?;
        let this = env.current_contract_address();

        let mut bridge_total: i128 = 0;
        for pair in pairs.iter() {
            let shares = Self::share_balance(&env, &pair, &this);
            if shares == 0 {
                return Err(FeeRouterError::InsufficientLiquidityBurned);
            }

            let (token0, token1) = Self::pair_tokens(&env, &pair);
            Self::deposit_shares(&env, &pair, &this, shares);
            let (amount0, amount1): (i128, i128) = env.invoke_contract(
                &pair,
                &Symbol::new(&env, "burn"),
                vec![&env, this.clone().into_val(&env)],
            );
            emit_fee_harvested(&env, &pair, shares, amount0, amount1);

            let bridged0 = Self::convert(&env, &config.registry, &token0, &config.bridge_asset, amount0)?;
            let bridged1 = Self::convert(&env, &config.registry, &token1, &config.bridge_asset, amount1)?;
            bridge_total = bridge_total.saturating_add(bridged0).saturating_add(bridged1);
        }

        let summary = Self::distribute(&env, &config, bridge_total)?;
        emit_fee_distributed(&env, &summary);
        Ok(summary)
    }

    // ========================================================
    // ADMIN (Write)
    // ========================================================

    pub fn change_receivers(
        env: Env,
        caller: Address,
        primary: Address,
        secondary: Address,
    ) -> Result<(), FeeRouterError> {
        caller.require_auth();
        let mut config = Self::require_owner(&env, &caller)?;

        config.primary_receiver = primary.clone();
        config.secondary_receiver = secondary.clone();
        write_config(&env, &config);

        emit_receivers_updated(&env, &primary, &secondary);
        Ok(())
    }

    /// Set the direct share of bridge value, out of 1e10; at most half
    pub fn change_split_proportion(
        env: Env,
        caller: Address,
        numerator: u64,
    ) -> Result<(), FeeRouterError> {
        caller.require_auth();
        let mut config = Self::require_owner(&env, &caller)?;

        if numerator as u128 > MAX_SPLIT_NUMERATOR {
            return Err(FeeRouterError::ProportionTooHigh);
        }
        let old = config.bridge_split_numerator;
        config.bridge_split_numerator = numerator;
        write_config(&env, &config);

        emit_split_updated(&env, old, numerator);
        Ok(())
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), FeeRouterError> {
        caller.require_auth();
        let mut config = Self::require_owner(&env, &caller)?;

        config.owner = new_owner.clone();
        write_config(&env, &config);

        emit_ownership_transferred(&env, &caller, &new_owner);
        Ok(())
    }

    // ========================================================
    // VIEWS (Read)
    // ========================================================

    pub fn get_config(env: Env) -> Result<FeeRouterConfig, FeeRouterError> {
        read_config(&env)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn require_owner(env: &Env, caller: &Address) -> Result<FeeRouterConfig, FeeRouterError> {
        let config = read_config(env)?;
        if *caller != config.owner {
            return Err(FeeRouterError::Forbidden);
        }
        Ok(config)
    }

    /// Split the bridge total between the primary receiver and the
    /// secondary conversion
    fn distribute(
        env: &Env,
        config: &FeeRouterConfig,
        bridge_total: i128,
    ) -> Result<HarvestSummary, FeeRouterError> {
        if bridge_total == 0 {
            return Ok(HarvestSummary {
                bridge_total: 0,
                primary_amount: 0,
                secondary_amount: 0,
                burned_amount: 0,
            });
        }

        let this = env.current_contract_address();
        let direct = u128_to_i128_saturating(mul_div(
            env,
            i128_to_u128_safe(bridge_total),
            config.bridge_split_numerator as u128,
            SPLIT_DENOMINATOR,
        ));
        if direct > 0 {
            token::Client::new(env, &config.bridge_asset).transfer(&this, &config.primary_receiver, &direct);
        }

        let remainder = bridge_total - direct;
        let secondary_out = Self::convert(
            env,
            &config.registry,
            &config.bridge_asset,
            &config.secondary_asset,
            remainder,
        )?;

        // Odd unit goes to the burn sink
        let secondary_amount = secondary_out / 2;
        let burned_amount = secondary_out - secondary_amount;
        let secondary = token::Client::new(env, &config.secondary_asset);
        if secondary_amount > 0 {
            secondary.transfer(&this, &config.secondary_receiver, &secondary_amount);
        }
        if burned_amount > 0 {
            secondary.transfer(&this, &config.burn_sink, &burned_amount);
        }

        Ok(HarvestSummary {
            bridge_total,
            primary_amount: direct,
            secondary_amount,
            burned_amount,
        })
    }

    /// Swap `amount` of `from` into `to` through their pair, returning the
    /// output. Identity when the assets match.
    fn convert(
        env: &Env,
        registry: &Address,
        from: &Address,
        to: &Address,
        amount: i128,
    ) -> Result<i128, FeeRouterError> {
        if from == to {
            return Ok(amount);
        }

        let pair: Option<Address> = env.invoke_contract(
            registry,
            &Symbol::new(env, "get_pair"),
            vec![env, from.clone().into_val(env), to.clone().into_val(env)],
        );
        let pair = pair.ok_or(FeeRouterError::NoBridgePair)?;

        let (token0, _) = Self::pair_tokens(env, &pair);
        let (reserve0, reserve1, _): (u128, u128, u32) =
            env.invoke_contract(&pair, &Symbol::new(env, "get_reserves"), vec![env]);
        if reserve0 == 0 || reserve1 == 0 {
            return Err(FeeRouterError::InsufficientLiquidity);
        }
        let fee_bps: u32 = env.invoke_contract(&pair, &Symbol::new(env, "swap_fee"), vec![env]);

        let from_is_token0 = *from == token0;
        let (reserve_in, reserve_out) = if from_is_token0 {
            (reserve0, reserve1)
        } else {
            (reserve1, reserve0)
        };
        let out = get_amount_out(env, i128_to_u128_safe(amount), reserve_in, reserve_out, fee_bps);
        if out == 0 {
            return Err(FeeRouterError::InsufficientOutput);
        }
        let out = u128_to_i128_saturating(out);
        let (amount0_out, amount1_out) = if from_is_token0 { (0, out) } else { (out, 0) };

        let this = env.current_contract_address();
        token::Client::new(env, from).transfer(&this, &pair, &amount);
        env.invoke_contract::<()>(
            &pair,
            &Symbol::new(env, "swap"),
            vec![
                env,
                amount0_out.into_val(env),
                amount1_out.into_val(env),
                this.into_val(env),
                Bytes::new(env).into_val(env),
            ],
        );

        Ok(out)
    }

    fn pair_tokens(env: &Env, pair: &Address) -> (Address, Address) {
        env.invoke_contract(pair, &Symbol::new(env, "get_tokens"), vec![env])
    }

    fn share_balance(env: &Env, pair: &Address, holder: &Address) -> u128 {
        env.invoke_contract(
            pair,
            &Symbol::new(env, "share_balance"),
            vec![env, holder.clone().into_val(env)],
        )
    }

    /// Hand shares to the pair so the next `burn` redeems them
    fn deposit_shares(env: &Env, pair: &Address, holder: &Address, shares: u128) {
        env.invoke_contract::<()>(
            pair,
            &Symbol::new(env, "transfer_shares"),
            vec![
                env,
                holder.clone().into_val(env),
                pair.clone().into_val(env),
                shares.into_val(env),
            ],
        );
    }
}
