// Shared plumbing for the order automation contracts

#![no_std]

pub mod active_list;
pub mod guard;
pub mod pool_client;
pub mod schedule;
pub mod types;

pub use active_list::{active_push, active_swap_remove};
pub use guard::ReentrancyGuard;
pub use pool_client::{fetch_pool_snapshot, lookup_pool, try_pool_swap, PoolSnapshot, SwapOutcome};
pub use schedule::{arm, disarm, next_ledger, NextWake};
pub use types::{price_condition_met, zero_for_one_for_side, OrderSide};
