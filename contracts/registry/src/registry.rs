//! Pair identity, deployment and registry access checks

use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, String};

use narwhalswap_math::NULL_ACCOUNT;

use crate::error::RegistryError;
use crate::storage::read_config;
use crate::types::RegistryConfig;

/// Domain tag mixed into every pair salt
const PAIR_SALT: &[u8] = b"narwhalswap:pair:v1";

/// The null asset handle
pub fn null_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, NULL_ACCOUNT))
}

/// Canonical (token0, token1) ordering
pub fn sort_tokens(token_a: &Address, token_b: &Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a.clone(), token_b.clone())
    } else {
        (token_b.clone(), token_a.clone())
    }
}

/// sha256(PAIR_SALT ++ xdr(token0) ++ xdr(token1)) over the sorted tokens
pub fn pair_salt(env: &Env, token_a: &Address, token_b: &Address) -> BytesN<32> {
    let (token0, token1) = sort_tokens(token_a, token_b);

    let mut data = Bytes::from_slice(env, PAIR_SALT);
    data.append(&token0.to_xdr(env));
    data.append(&token1.to_xdr(env));

    env.crypto().sha256(&data).to_bytes()
}

/// Address the pair of these assets has, or will have once created
pub fn pair_address(env: &Env, token_a: &Address, token_b: &Address) -> Address {
    env.deployer()
        .with_current_contract(pair_salt(env, token_a, token_b))
        .deployed_address()
}

/// Deploy the pair contract at its derived address
#[cfg(target_family = "wasm")]
pub fn deploy_pair(env: &Env, wasm_hash: &BytesN<32>, salt: BytesN<32>) -> Address {
    env.deployer()
        .with_current_contract(salt)
        .deploy_v2(wasm_hash.clone(), ())
}

/// Host builds have no uploaded pair code, so the pair contract is
/// registered natively at the address the deployment would produce.
#[cfg(not(target_family = "wasm"))]
pub fn deploy_pair(env: &Env, _wasm_hash: &BytesN<32>, salt: BytesN<32>) -> Address {
    let address = env.deployer().with_current_contract(salt).deployed_address();
    env.register_at(&address, narwhalswap_pair::NarwhalPair, ())
}

/// Load the config and check that `caller` is the fee setter.
/// Authorization of `caller` is the entrypoint's job.
pub fn require_fee_to_setter(env: &Env, caller: &Address) -> Result<RegistryConfig, RegistryError> {
    let config = read_config(env)?;
    if *caller != config.fee_to_setter {
        return Err(RegistryError::Forbidden);
    }
    Ok(config)
}
