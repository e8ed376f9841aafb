// Pool types

use soroban_sdk::{contracttype, Address};

pub use tideswap_position::{Position, PositionInfo};
pub use tideswap_tick::TickInfo;

/// Immutable pool configuration
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolConfig {
    /// Admin entitled to the protocol fee share
    pub admin: Address,
    /// First token (original order from initialization)
    pub token_a: Address,
    /// Second token (original order from initialization)
    pub token_b: Address,
    /// Trading fee in parts per million of input (e.g. 3000 = 0.30%)
    pub fee_ppm: u32,
    /// Protocol's share of the trading fee, in parts per million of the fee
    pub protocol_fee_ppm: u32,
}

/// Mutable pool state
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolState {
    /// Current sqrt price as Q64.64 fixed point
    pub sqrt_price_x64: u128,
    /// Current tick, consistent with sqrt_price_x64
    pub current_tick: i32,
    /// Liquidity of positions whose range contains the current tick
    pub liquidity: i128,
    /// Tick spacing for this pool
    pub tick_spacing: i32,
    /// Token0 address (sorted: token0 < token1)
    pub token0: Address,
    /// Token1 address
    pub token1: Address,
    /// Global fee growth per unit liquidity for token0 (Q64.64, wrapping)
    pub fee_growth_global_0: u128,
    /// Global fee growth per unit liquidity for token1
    pub fee_growth_global_1: u128,
    /// Accumulated protocol fees in token0
    pub protocol_fees_0: u128,
    /// Accumulated protocol fees in token1
    pub protocol_fees_1: u128,
}

/// Compact view consumed by the order schedulers
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolSnapshot {
    pub sqrt_price_x64: u128,
    pub current_tick: i32,
    pub liquidity: i128,
    pub tick_spacing: i32,
    pub token0: Address,
    pub token1: Address,
    pub fee_ppm: u32,
}

/// Result of a swap
#[contracttype]
#[derive(Clone, Debug)]
pub struct SwapResult {
    pub amount_in: i128,
    pub amount_out: i128,
    pub sqrt_price_x64: u128,
    pub current_tick: i32,
}
