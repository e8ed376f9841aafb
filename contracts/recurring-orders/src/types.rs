// Recurring order types

use soroban_sdk::{contracttype, Address};

pub use tideswap_order_core::{NextWake, OrderSide};

/// Scheduler configuration
#[contracttype]
#[derive(Clone, Debug)]
pub struct RecurringOrderConfig {
    /// Factory registry used to resolve pools at trigger time
    pub factory: Address,
}

/// A dollar-cost-averaging order: a fixed slice swapped every interval.
///
/// The full budget `amount_per_execution * total_executions` is escrowed at
/// creation; `active = false` is terminal.
#[contracttype]
#[derive(Clone, Debug)]
pub struct RecurringOrder {
    pub id: u64,
    pub owner: Address,
    pub token_in: Address,
    pub token_out: Address,
    /// Fee tier of the pool this order trades against
    pub fee_ppm: u32,
    pub amount_per_execution: i128,
    /// Minimum ledgers between executions
    pub interval_ledgers: u32,
    pub total_executions: u32,
    pub executed_count: u32,
    /// Ledger sequence of the most recent execution, 0 before the first
    pub last_execution_ledger: u32,
    pub min_amount_out: i128,
    /// Price guard, Q64.64 sqrt price; executions wait for it like a limit
    pub limit_sqrt_price_x64: u128,
    pub side: OrderSide,
    pub active: bool,
}

impl RecurringOrder {
    /// Whether enough ledgers have passed since the last execution
    pub fn is_due(&self, sequence: u32) -> bool {
        sequence >= self.last_execution_ledger.saturating_add(self.interval_ledgers)
            || self.last_execution_ledger == 0
    }

    pub fn remaining_executions(&self) -> u32 {
        self.total_executions.saturating_sub(self.executed_count)
    }
}
