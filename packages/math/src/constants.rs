// Tideswap math constants

// ============================================================
// TICK CONSTANTS
// ============================================================

/// Minimum valid tick. Bounded so sqrt(1.0001^tick) * 2^64 stays
/// representable in Q64.64 in both directions.
pub const MIN_TICK: i32 = -443636;

/// Maximum valid tick.
pub const MAX_TICK: i32 = 443636;

/// Maximum steps when walking initialized ticks (bounds swap crossing
/// sweeps and next-tick searches)
pub const MAX_TICK_SEARCH_STEPS: i32 = 2000;

// ============================================================
// SQRT PRICE CONSTANTS (Q64.64 format)
// ============================================================

/// Protocol floor for swap price limits (price = 2^-64)
pub const MIN_SQRT_PRICE: u128 = 1u128 << 32;

/// Protocol ceiling for swap price limits (price = 2^64)
pub const MAX_SQRT_PRICE: u128 = 1u128 << 96;

/// Sqrt price for the 1:1 ratio (2^64); the default pool price at tick 0
pub const SQRT_PRICE_1_1: u128 = 1u128 << 64;

// ============================================================
// FEE CONSTANTS (parts per million of input)
// ============================================================

/// Fee denominator: fees are expressed in parts per million
pub const FEE_DENOMINATOR: i128 = 1_000_000;

/// Maximum pool fee tier (10%)
pub const MAX_FEE_PPM: u32 = 100_000;

/// Maximum protocol share of the pool fee (50%)
pub const MAX_PROTOCOL_FEE_PPM: u32 = 500_000;

// ============================================================
// LIQUIDITY / AMOUNT CONSTANTS
// ============================================================

/// Maximum liquidity per tick, half of i128::MAX for headroom
pub const MAX_LIQUIDITY_PER_TICK: i128 = i128::MAX / 2;

/// Minimum liquidity for the amount-based add_liquidity entry point
pub const MIN_LIQUIDITY: i128 = 1000;

// ============================================================
// MATH CONSTANTS
// ============================================================

/// Q64 scaling factor (2^64) for Q64.64 fixed point
pub const Q64: u128 = 1u128 << 64;
