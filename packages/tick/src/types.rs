// Tick state

use soroban_sdk::contracttype;

/// State tracked for each initialized tick boundary
#[contracttype]
#[derive(Clone, Debug)]
pub struct TickInfo {
    /// Total liquidity referencing this tick from either side
    pub liquidity_gross: i128,
    /// Net liquidity change when crossing left-to-right
    pub liquidity_net: i128,
    /// Fee growth on the far side of this tick for token0
    pub fee_growth_outside_0: u128,
    /// Fee growth on the far side of this tick for token1
    pub fee_growth_outside_1: u128,
    /// Ledger time spent on the far side of this tick
    pub seconds_outside: u64,
    /// Whether this tick currently bounds any position
    pub initialized: bool,
}

impl Default for TickInfo {
    fn default() -> Self {
        Self {
            liquidity_gross: 0,
            liquidity_net: 0,
            fee_growth_outside_0: 0,
            fee_growth_outside_1: 0,
            seconds_outside: 0,
            initialized: false,
        }
    }
}
