mod common;

use common::{E, MINIMUM_LIQUIDITY};
use narwhalswap_pair::NarwhalPairClient;
use narwhalswap_registry::NarwhalRegistryClient;
use soroban_sdk::{testutils::Address as _, Address, Bytes, Env, U256};

/// 1000E/1000E pool with one swap of E token1 in for 9_960_069 token0 out
fn traded_pool<'a>(
    env: &'a Env,
    fee_to: Option<&Address>,
) -> (NarwhalRegistryClient<'a>, Address, Address, NarwhalPairClient<'a>) {
    let (registry, fee_to_setter, _, token1, pair) = common::setup_pair(env);
    if let Some(fee_to) = fee_to {
        registry.set_fee_to(&fee_to_setter, &Some(fee_to.clone()));
    }

    let provider = Address::generate(env);
    common::add_liquidity(env, &pair, 1000 * E, 1000 * E, &provider);

    let trader = Address::generate(env);
    common::send_to_pair(env, &pair, &token1, E);
    pair.swap(&9_960_069, &0, &trader, &Bytes::new(env));

    (registry, fee_to_setter, provider, pair)
}

#[test]
fn test_fee_off_burn_returns_everything_but_locked_liquidity() {
    let env = Env::default();
    env.mock_all_auths();

    let (_, _, provider, pair) = traded_pool(&env, None);
    let shares = pair.share_balance(&provider);
    assert_eq!(shares, 1000 * E as u128 - MINIMUM_LIQUIDITY);

    let (amount0, amount1) = common::remove_liquidity(&pair, &provider, shares, &provider);
    assert_eq!((amount0, amount1), (9_990_038_931, 10_009_998_999));

    let info = pair.get_pair_info();
    assert_eq!((info.reserve0, info.reserve1), (1_000, 1_001));
    assert_eq!(info.total_shares, MINIMUM_LIQUIDITY);
    assert_eq!(info.k_last, U256::from_u32(&env, 0));
}

#[test]
fn test_fee_on_mints_one_sixth_of_growth() {
    let env = Env::default();
    env.mock_all_auths();

    let fee_to = Address::generate(&env);
    let (_, _, provider, pair) = traded_pool(&env, Some(&fee_to));
    let shares = pair.share_balance(&provider);

    let (amount0, amount1) = common::remove_liquidity(&pair, &provider, shares, &provider);
    assert_eq!((amount0, amount1), (9_990_036_437, 10_009_996_499));
    assert_eq!(pair.share_balance(&fee_to), 2_497);

    let info = pair.get_pair_info();
    assert_eq!((info.reserve0, info.reserve1), (3_494, 3_501));
    assert_eq!(info.total_shares, MINIMUM_LIQUIDITY + 2_497);
    // Checkpoint follows the post-burn reserves
    assert_eq!(info.k_last, U256::from_u128(&env, 3_494 * 3_501));

    // fee_to redeems its shares for their pro-rata value
    let (fee0, fee1) = common::remove_liquidity(&pair, &fee_to, 2_497, &fee_to);
    assert_eq!((fee0, fee1), (2_494, 2_499));
}

#[test]
fn test_protocol_fee_denominator_controls_cut() {
    let env = Env::default();
    env.mock_all_auths();

    let fee_to = Address::generate(&env);
    let (registry, fee_to_setter, provider, pair) = traded_pool(&env, Some(&fee_to));
    registry.set_protocol_fee_denominator(&fee_to_setter, &1);

    // Any mint or burn settles the fee first
    common::add_liquidity(&env, &pair, E, E, &provider);
    assert_eq!(pair.share_balance(&fee_to), 7_492);
}

#[test]
fn test_fee_not_minted_without_growth() {
    let env = Env::default();
    env.mock_all_auths();

    let fee_to = Address::generate(&env);
    let (registry, fee_to_setter, _, _, pair) = common::setup_pair(&env);
    registry.set_fee_to(&fee_to_setter, &Some(fee_to.clone()));

    let provider = Address::generate(&env);
    common::add_liquidity(&env, &pair, 10 * E, 10 * E, &provider);
    common::add_liquidity(&env, &pair, 10 * E, 10 * E, &provider);

    assert_eq!(pair.share_balance(&fee_to), 0);
    assert_eq!(pair.get_pair_info().k_last, U256::from_u128(&env, (20 * E * 20 * E) as u128));
}

#[test]
fn test_turning_fee_off_clears_checkpoint() {
    let env = Env::default();
    env.mock_all_auths();

    let fee_to = Address::generate(&env);
    let (registry, fee_to_setter, provider, pair) = traded_pool(&env, Some(&fee_to));
    assert_ne!(pair.get_pair_info().k_last, U256::from_u32(&env, 0));

    registry.set_fee_to(&fee_to_setter, &None);
    common::add_liquidity(&env, &pair, E, E, &provider);
    assert_eq!(pair.get_pair_info().k_last, U256::from_u32(&env, 0));
    assert_eq!(pair.share_balance(&fee_to), 0);

    // Turning it back on starts from a fresh checkpoint; earlier growth is not charged
    registry.set_fee_to(&fee_to_setter, &Some(fee_to.clone()));
    common::add_liquidity(&env, &pair, E, E, &provider);
    assert_eq!(pair.share_balance(&fee_to), 0);
    assert_ne!(pair.get_pair_info().k_last, U256::from_u32(&env, 0));
}
