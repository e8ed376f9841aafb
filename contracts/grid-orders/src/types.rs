// Grid order types

use soroban_sdk::{contracttype, Address};

pub use tideswap_order_core::NextWake;

/// Scheduler configuration
#[contracttype]
#[derive(Clone, Debug)]
pub struct GridOrderConfig {
    /// Factory registry used to resolve pools at trigger time
    pub factory: Address,
}

/// A grid strategy: evenly spaced price levels between two bounds, buying
/// base with quote as the price steps down and selling it back as the price
/// steps up.
///
/// `token_base` must be the pool's token0 so level prices read directly as
/// pool sqrt prices. `active = false` is terminal.
#[contracttype]
#[derive(Clone, Debug)]
pub struct GridOrder {
    pub id: u64,
    pub owner: Address,
    pub token_base: Address,
    pub token_quote: Address,
    /// Fee tier of the pool this grid trades against
    pub fee_ppm: u32,
    pub level_count: u32,
    /// Quote budget allotted to each level's buy
    pub amount_per_level: i128,
    /// Price of the lowest level, Q64.64 sqrt price
    pub lower_sqrt_price_x64: u128,
    /// Price of the highest level
    pub upper_sqrt_price_x64: u128,
    /// Quote escrow not currently deployed into base
    pub quote_remaining: i128,
    pub active: bool,
    pub cancelled: bool,
}

/// What a level last did
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridLevelStatus {
    Idle,
    BuyPending,
    SellPending,
}

/// Per-level state, stored under `(grid_id, level_index)`
#[contracttype]
#[derive(Clone, Debug)]
pub struct GridLevel {
    /// This level's price, Q64.64 sqrt price
    pub sqrt_price_x64: u128,
    /// Quote spent per buy at this level
    pub amount: i128,
    pub status: GridLevelStatus,
    /// Base bought at this level and not yet sold back
    pub base_acquired: i128,
    /// Last ledger this level acted on; one action per ledger
    pub last_fill_ledger: u32,
}
