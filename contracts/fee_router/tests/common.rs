#![allow(dead_code)]

use narwhalswap_fee_router::{FeeRouterParams, NarwhalFeeRouter, NarwhalFeeRouterClient};
use narwhalswap_pair::NarwhalPairClient;
use narwhalswap_registry::{NarwhalRegistry, NarwhalRegistryClient};
use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    vec, Address, BytesN, Env,
};

/// One token with 7 decimals
pub const E: i128 = 10_000_000;

/// 50% direct to the primary receiver
pub const HALF_SPLIT: u64 = 5_000_000_000;

pub struct Deployment<'a> {
    pub registry: NarwhalRegistryClient<'a>,
    pub router: NarwhalFeeRouterClient<'a>,
    pub fee_to_setter: Address,
    pub owner: Address,
    pub bridge: Address,
    pub secondary: Address,
    pub primary_receiver: Address,
    pub secondary_receiver: Address,
    pub burn_sink: Address,
    /// The (bridge, secondary) pair, funded 1000E bridge / 500E secondary
    pub distribution_pair: Address,
}

/// Registry with the router as protocol-fee receiver
pub fn setup(env: &Env, split_numerator: u64) -> Deployment<'_> {
    let fee_to_setter = Address::generate(env);
    let registry_id = env.register(NarwhalRegistry, ());
    let registry = NarwhalRegistryClient::new(env, &registry_id);
    registry.initialize(&fee_to_setter, &BytesN::from_array(env, &[0u8; 32]), &vec![env]);

    let bridge = create_token(env);
    let secondary = create_token(env);
    let owner = Address::generate(env);
    let primary_receiver = Address::generate(env);
    let secondary_receiver = Address::generate(env);
    let burn_sink = Address::generate(env);

    let router_id = env.register(NarwhalFeeRouter, ());
    let router = NarwhalFeeRouterClient::new(env, &router_id);
    router.initialize(
        &owner,
        &registry_id,
        &FeeRouterParams {
            bridge_asset: bridge.clone(),
            secondary_asset: secondary.clone(),
            primary_receiver: primary_receiver.clone(),
            secondary_receiver: secondary_receiver.clone(),
            burn_sink: burn_sink.clone(),
            bridge_split_numerator: split_numerator,
        },
    );
    registry.set_fee_to(&fee_to_setter, &Some(router_id));

    let lp = Address::generate(env);
    let distribution_pair = add_liquidity(env, &registry, &bridge, &secondary, 1000 * E, 500 * E, &lp);

    Deployment {
        registry,
        router,
        fee_to_setter,
        owner,
        bridge,
        secondary,
        primary_receiver,
        secondary_receiver,
        burn_sink,
        distribution_pair,
    }
}

pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}

pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, holder: &Address) -> i128 {
    TokenClient::new(env, token).balance(holder)
}

/// Create the pair if needed, deposit both amounts and mint to `provider`
pub fn add_liquidity(
    env: &Env,
    registry: &NarwhalRegistryClient,
    token_a: &Address,
    token_b: &Address,
    amount_a: i128,
    amount_b: i128,
    provider: &Address,
) -> Address {
    let pair = match registry.get_pair(token_a, token_b) {
        Some(pair) => pair,
        None => registry.create_pair(token_a, token_b),
    };

    mint_tokens(env, token_a, provider, amount_a);
    mint_tokens(env, token_b, provider, amount_b);
    TokenClient::new(env, token_a).transfer(provider, &pair, &amount_a);
    TokenClient::new(env, token_b).transfer(provider, &pair, &amount_b);
    NarwhalPairClient::new(env, &pair).mint(provider);

    pair
}

pub fn pair_client<'a>(env: &'a Env, pair: &Address) -> NarwhalPairClient<'a> {
    NarwhalPairClient::new(env, pair)
}

/// Sell `amount_in` of `token_in` into the pair at the quoted price
pub fn swap_exact_in(
    env: &Env,
    pair: &Address,
    token_in: &Address,
    amount_in: i128,
    to: &Address,
) -> i128 {
    let client = NarwhalPairClient::new(env, pair);
    let out = client.get_amount_out(token_in, &amount_in);
    let (token0, _) = client.get_tokens();

    let trader = Address::generate(env);
    mint_tokens(env, token_in, &trader, amount_in);
    TokenClient::new(env, token_in).transfer(&trader, pair, &amount_in);

    let (out0, out1) = if *token_in == token0 { (0, out) } else { (out, 0) };
    client.swap(&out0, &out1, to, &soroban_sdk::Bytes::new(env));
    out
}

/// Every listed asset balance of the router is zero
pub fn assert_router_empty(env: &Env, d: &Deployment, tokens: &[&Address]) {
    for token in tokens {
        assert_eq!(balance(env, token, &d.router.address), 0);
    }
}
