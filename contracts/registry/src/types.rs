//! Registry type definitions

use soroban_sdk::{contracttype, Address, BytesN};

/// Global parameters owned by the registry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    /// Receiver of protocol-fee shares (None = protocol fee off)
    pub fee_to: Option<Address>,
    /// Sole address allowed to change registry parameters
    pub fee_to_setter: Address,
    /// Protocol takes 1/(denominator + 1) of fee-driven growth
    pub protocol_fee_denominator: u32,
    /// Uploaded pair contract code deployed by `create_pair`
    pub pair_wasm_hash: BytesN<32>,
}
