// Constants shared by the registry, the pairs and the fee router.
//
// Grouped by concern:
// - Fee arithmetic (basis points)
// - Liquidity shares and the null account
// - Reserve width and UQ112x112 fixed point
// - Protocol fee split

// ============================================================
// FEE CONSTANTS
// ============================================================

/// Denominator for swap fees expressed in basis points
pub const FEE_DENOMINATOR: u128 = 10_000;

/// Highest swap fee a pair may be configured with (10%)
pub const MAX_SWAP_FEE_BPS: u32 = 1_000;

/// Swap fee assigned to a newly created pair (0.30%)
pub const DEFAULT_SWAP_FEE_BPS: u32 = 30;

/// Swap fee for pairs that contain a discounted asset (0.15%)
pub const DISCOUNTED_SWAP_FEE_BPS: u32 = DEFAULT_SWAP_FEE_BPS / 2;

/// Protocol fee denominator set at initialization.
/// The protocol receives 1/(denominator + 1) of fee-driven growth.
pub const DEFAULT_PROTOCOL_FEE_DENOMINATOR: u32 = 5;

// ============================================================
// LIQUIDITY CONSTANTS
// ============================================================

/// Shares permanently locked on the first deposit into a pair
pub const MINIMUM_LIQUIDITY: u128 = 1_000;

/// Stellar account with an all-zero key. Nobody can sign for it, so it
/// doubles as the null asset handle and the holder of locked liquidity.
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

// ============================================================
// RESERVE / FIXED POINT CONSTANTS
// ============================================================

/// Fractional bits of the UQ112x112 price format
pub const RESOLUTION: u32 = 112;

/// Largest value a reserve may hold (2^112 - 1)
pub const MAX_RESERVE: u128 = (1u128 << RESOLUTION) - 1;

// ============================================================
// FEE SPLIT CONSTANTS
// ============================================================

/// Denominator of the fee router's direct split
pub const SPLIT_DENOMINATOR: u128 = 10_000_000_000;

/// Largest direct split numerator the fee router accepts (50%)
pub const MAX_SPLIT_NUMERATOR: u128 = SPLIT_DENOMINATOR / 2;
