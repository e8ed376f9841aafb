// Limit order types

use soroban_sdk::{contracttype, Address};

pub use tideswap_order_core::{NextWake, OrderSide};

/// Scheduler configuration
#[contracttype]
#[derive(Clone, Debug)]
pub struct LimitOrderConfig {
    /// Factory registry used to resolve pools at trigger time
    pub factory: Address,
}

/// A resting limit order.
///
/// `filled` and `cancelled` are terminal: once either is set no amount or
/// escrow field changes again.
#[contracttype]
#[derive(Clone, Debug)]
pub struct LimitOrder {
    pub id: u64,
    pub owner: Address,
    pub token_in: Address,
    pub token_out: Address,
    /// Fee tier of the pool this order trades against
    pub fee_ppm: u32,
    /// Escrowed input amount, swapped in full on fill
    pub amount_in: i128,
    pub min_amount_out: i128,
    /// Trigger price bound, Q64.64 sqrt price
    pub limit_sqrt_price_x64: u128,
    pub side: OrderSide,
    /// Ledger sequence at which the order lapses
    pub expiry_ledger: u32,
    pub filled: bool,
    pub cancelled: bool,
}

impl LimitOrder {
    pub fn is_terminal(&self) -> bool {
        self.filled || self.cancelled
    }
}
