// Property tests against live pairs
// Run with: cargo test -p narwhalswap-registry --test test_proptest

mod common;

use narwhalswap_pair::PairError;
use proptest::prelude::*;
use soroban_sdk::{testutils::Address as _, Address, Bytes, Env};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Property: the quoted output clears the K check and one unit more does not
    #[test]
    fn prop_quoted_swap_is_tight(
        reserve0 in 10_000i128..1_000_000_000_000_000,
        reserve1 in 10_000i128..1_000_000_000_000_000,
        amount_in in 1_000i128..1_000_000_000_000,
        zero_for_one in any::<bool>(),
    ) {
        let env = Env::default();
        env.mock_all_auths();

        let (_, _, token0, token1, pair) = common::setup_pair(&env);
        let lp = Address::generate(&env);
        common::add_liquidity(&env, &pair, reserve0, reserve1, &lp);

        let token_in = if zero_for_one { &token0 } else { &token1 };
        let out = pair.get_amount_out(token_in, &amount_in);
        prop_assume!(out > 0);

        let trader = Address::generate(&env);
        common::send_to_pair(&env, &pair, token_in, amount_in);
        let (too_much, quoted) = if zero_for_one {
            ((0, out + 1), (0, out))
        } else {
            ((out + 1, 0), (out, 0))
        };

        let overdraw = pair.try_swap(&too_much.0, &too_much.1, &trader, &Bytes::new(&env));
        prop_assert!(
            overdraw == Err(Ok(PairError::InvariantViolation))
                || overdraw == Err(Ok(PairError::InsufficientLiquidity))
        );
        pair.swap(&quoted.0, &quoted.1, &trader, &Bytes::new(&env));

        let (r0, r1, _) = pair.get_reserves();
        prop_assert!(r0 * r1 >= (reserve0 as u128) * (reserve1 as u128));
    }

    /// Property: adding then removing liquidity never returns more than deposited
    #[test]
    fn prop_round_trip_never_profits(
        seed0 in 100_000i128..1_000_000_000_000,
        seed1 in 100_000i128..1_000_000_000_000,
        deposit0 in 1_000i128..1_000_000_000_000,
        deposit1 in 1_000i128..1_000_000_000_000,
    ) {
        let env = Env::default();
        env.mock_all_auths();

        let (_, _, _, _, pair) = common::setup_pair(&env);
        let seeder = Address::generate(&env);
        common::add_liquidity(&env, &pair, seed0, seed1, &seeder);

        let provider = Address::generate(&env);
        let (token0, token1) = pair.get_tokens();
        common::send_to_pair(&env, &pair, &token0, deposit0);
        common::send_to_pair(&env, &pair, &token1, deposit1);
        let minted = pair.try_mint(&provider);
        prop_assume!(minted.is_ok());
        let shares = pair.share_balance(&provider);

        let removed = pair.try_transfer_shares(&provider, &pair.address, &shares)
            .ok()
            .and_then(|_| pair.try_burn(&provider).ok());
        if let Some(Ok((amount0, amount1))) = removed {
            prop_assert!(amount0 <= deposit0);
            prop_assert!(amount1 <= deposit1);
        }
    }
}
