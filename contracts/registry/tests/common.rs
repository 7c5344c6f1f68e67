#![allow(dead_code)]

use narwhalswap_pair::NarwhalPairClient;
use narwhalswap_registry::{NarwhalRegistry, NarwhalRegistryClient};
use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    vec, Address, BytesN, Env, String, Vec,
};

/// One token with 7 decimals
pub const E: i128 = 10_000_000;

pub const MINIMUM_LIQUIDITY: u128 = 1_000;

/// Placeholder code hash; host builds register pairs natively
pub fn pair_wasm_hash(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[0u8; 32])
}

/// Register and initialize a registry, returning it and its fee setter
pub fn setup_registry(env: &Env) -> (NarwhalRegistryClient<'_>, Address) {
    setup_registry_with_discounts(env, &vec![env])
}

pub fn setup_registry_with_discounts<'a>(
    env: &'a Env,
    discounted: &Vec<Address>,
) -> (NarwhalRegistryClient<'a>, Address) {
    let fee_to_setter = Address::generate(env);
    let registry_id = env.register(NarwhalRegistry, ());
    let client = NarwhalRegistryClient::new(env, &registry_id);

    client.initialize(&fee_to_setter, &pair_wasm_hash(env), discounted);

    (client, fee_to_setter)
}

/// Registry plus one pair; tokens are returned sorted
pub fn setup_pair(
    env: &Env,
) -> (
    NarwhalRegistryClient<'_>,
    Address,
    Address,
    Address,
    NarwhalPairClient<'_>,
) {
    let (registry, fee_to_setter) = setup_registry(env);
    let (token0, token1) = create_sorted_tokens(env);
    let pair = registry.create_pair(&token0, &token1);

    (registry, fee_to_setter, token0, token1, NarwhalPairClient::new(env, &pair))
}

pub fn pair_client<'a>(env: &'a Env, pair: &Address) -> NarwhalPairClient<'a> {
    NarwhalPairClient::new(env, pair)
}

/// Create a test token
pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}

pub fn create_sorted_tokens(env: &Env) -> (Address, Address) {
    let a = create_token(env);
    let b = create_token(env);
    if a < b { (a, b) } else { (b, a) }
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, holder: &Address) -> i128 {
    TokenClient::new(env, token).balance(holder)
}

/// Mint `amount` to a fresh account and transfer it to the pair
pub fn send_to_pair(env: &Env, pair: &NarwhalPairClient, token: &Address, amount: i128) {
    let sender = Address::generate(env);
    mint_tokens(env, token, &sender, amount);
    TokenClient::new(env, token).transfer(&sender, &pair.address, &amount);
}

/// Transfer both assets in and mint shares to `provider`
pub fn add_liquidity(
    env: &Env,
    pair: &NarwhalPairClient,
    amount0: i128,
    amount1: i128,
    provider: &Address,
) -> u128 {
    let (token0, token1) = pair.get_tokens();
    send_to_pair(env, pair, &token0, amount0);
    send_to_pair(env, pair, &token1, amount1);
    pair.mint(provider)
}

/// Transfer `shares` from `holder` to the pair and burn them
pub fn remove_liquidity(
    pair: &NarwhalPairClient,
    holder: &Address,
    shares: u128,
    to: &Address,
) -> (i128, i128) {
    pair.transfer_shares(holder, &pair.address, &shares);
    pair.burn(to)
}

/// The unspendable account that holds locked liquidity
pub fn null_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(
        env,
        "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF",
    ))
}

/// Constant-product quote, mirrored here to keep expectations explicit
pub fn expected_amount_out(amount_in: i128, reserve_in: i128, reserve_out: i128, fee_bps: u32) -> i128 {
    let with_fee = amount_in * (10_000 - fee_bps as i128);
    with_fee * reserve_out / (reserve_in * 10_000 + with_fee)
}
