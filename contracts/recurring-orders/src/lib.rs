#![no_std]

//! # Tideswap Recurring Orders
//!
//! Dollar-cost-averaging over tideswap pools: each order swaps a fixed slice
//! of its escrowed budget every `interval_ledgers`, optionally gated on a
//! price bound, until `total_executions` slices have run. The trigger
//! re-arms itself at the tightest interval across live orders.
//!
//! ## Functions:
//! - Write (4): initialize, create_recurring_order, cancel_recurring_order,
//!   check_and_execute
//! - Read (5): get_recurring_order, get_recurring_orders_count,
//!   get_active_count, get_trigger_state, get_config

use soroban_sdk::{contract, contractimpl, token, Address, Env};

use tideswap_order_core::{
    arm, disarm, fetch_pool_snapshot, lookup_pool, next_ledger, price_condition_met, try_pool_swap,
    zero_for_one_for_side, ReentrancyGuard,
};

mod error;
mod events;
mod storage;
mod types;

pub use error::RecurringOrderError;
use events::*;
use storage::*;
pub use types::*;

/// Orders examined per trigger pass; the remainder waits for the next run
const MAX_ORDERS_PER_CHECK: u32 = 10;

#[contract]
pub struct TideswapRecurringOrders;

#[contractimpl]
impl TideswapRecurringOrders {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    pub fn initialize(env: Env, factory: Address) -> Result<(), RecurringOrderError> {
        if is_initialized(&env) {
            return Err(RecurringOrderError::AlreadyInitialized);
        }

        write_config(&env, &RecurringOrderConfig { factory: factory.clone() });
        set_initialized(&env);

        emit_initialized(&env, &factory);

        Ok(())
    }

    // ========================================================
    // ORDER LIFECYCLE
    // ========================================================

    /// Create a recurring order, escrowing the full budget
    /// `amount_per_execution * total_executions` from the owner.
    #[allow(clippy::too_many_arguments)]
    pub fn create_recurring_order(
        env: Env,
        owner: Address,
        token_in: Address,
        token_out: Address,
        fee_ppm: u32,
        amount_per_execution: i128,
        interval_ledgers: u32,
        total_executions: u32,
        min_amount_out: i128,
        limit_sqrt_price_x64: u128,
        side: OrderSide,
    ) -> Result<u64, RecurringOrderError> {
        owner.require_auth();
        let _guard = ReentrancyGuard::lock(&env);

        if !is_initialized(&env) {
            return Err(RecurringOrderError::NotInitialized);
        }
        if token_in == token_out {
            return Err(RecurringOrderError::InvalidTokenPair);
        }
        if amount_per_execution <= 0 || min_amount_out < 0 {
            return Err(RecurringOrderError::InvalidAmount);
        }
        if interval_ledgers == 0 {
            return Err(RecurringOrderError::InvalidInterval);
        }
        if total_executions == 0 {
            return Err(RecurringOrderError::InvalidExecutionCount);
        }
        if limit_sqrt_price_x64 == 0 {
            return Err(RecurringOrderError::InvalidPrice);
        }
        if zero_for_one_for_side(side) != (token_in < token_out) {
            return Err(RecurringOrderError::InvalidSide);
        }

        let budget = amount_per_execution
            .checked_mul(total_executions as i128)
            .ok_or(RecurringOrderError::InvalidAmount)?;

        token::Client::new(&env, &token_in).transfer(
            &owner,
            &env.current_contract_address(),
            &budget,
        );

        let id = next_order_id(&env);
        let order = RecurringOrder {
            id,
            owner: owner.clone(),
            token_in: token_in.clone(),
            token_out: token_out.clone(),
            fee_ppm,
            amount_per_execution,
            interval_ledgers,
            total_executions,
            executed_count: 0,
            last_execution_ledger: 0,
            min_amount_out,
            limit_sqrt_price_x64,
            side,
            active: true,
        };
        write_order(&env, &order);

        let live = active_list_push(&env, id) + 1;
        if live == 1 {
            arm(&env, |e, wake| write_trigger(e, wake), next_ledger(&env));
        }

        emit_order_created(
            &env,
            id,
            &owner,
            &token_in,
            &token_out,
            amount_per_execution,
            interval_ledgers,
            total_executions,
        );

        Ok(id)
    }

    /// Cancel a live order and refund the unspent part of its budget.
    /// Owner only.
    pub fn cancel_recurring_order(env: Env, id: u64) -> Result<(), RecurringOrderError> {
        let _guard = ReentrancyGuard::lock(&env);

        let mut order = read_order(&env, id).ok_or(RecurringOrderError::OrderNotFound)?;
        order.owner.require_auth();

        if !order.active {
            return Err(RecurringOrderError::OrderNotActive);
        }

        let refund = order
            .amount_per_execution
            .saturating_mul(order.remaining_executions() as i128);

        order.active = false;
        write_order(&env, &order);
        active_list_remove_id(&env, id);

        if refund > 0 {
            token::Client::new(&env, &order.token_in).transfer(
                &env.current_contract_address(),
                &order.owner,
                &refund,
            );
        }

        emit_order_cancelled(&env, id, &order.owner, refund);

        Ok(())
    }

    // ========================================================
    // TRIGGER
    // ========================================================

    /// Keeper entry point: run every due slice whose price bound is met.
    ///
    /// Entries not yet due, price-gated, or hitting a transient pool failure
    /// stay live and are retried; completed orders leave the active list.
    /// Re-arms at `sequence + min(interval)` across live orders, or the next
    /// ledger when the pass was cut short by the per-call cap.
    pub fn check_and_execute(env: Env) -> NextWake {
        let _guard = ReentrancyGuard::lock(&env);

        let config = match read_config(&env) {
            Some(config) => config,
            None => return NextWake::idle(),
        };

        let sequence = env.ledger().sequence();
        let mut index: u32 = 0;
        let mut checked: u32 = 0;
        let mut executed: u32 = 0;

        while checked < MAX_ORDERS_PER_CHECK && index < read_active_count(&env) {
            checked += 1;

            let id = match read_active_slot(&env, index) {
                Some(id) => id,
                None => {
                    index += 1;
                    continue;
                }
            };
            let mut order = match read_order(&env, id) {
                Some(order) => order,
                None => {
                    // Stale slot; drop it and re-examine this index
                    active_list_swap_remove(&env, index);
                    continue;
                }
            };

            if !order.active {
                active_list_swap_remove(&env, index);
                continue;
            }

            if !order.is_due(sequence) {
                index += 1;
                continue;
            }

            let pool = match lookup_pool(
                &env,
                &config.factory,
                &order.token_in,
                &order.token_out,
                order.fee_ppm,
            ) {
                Some(pool) => pool,
                None => {
                    index += 1;
                    continue;
                }
            };
            let snapshot = match fetch_pool_snapshot(&env, &pool) {
                Some(snapshot) => snapshot,
                None => {
                    index += 1;
                    continue;
                }
            };

            if !price_condition_met(
                order.side,
                snapshot.sqrt_price_x64,
                order.limit_sqrt_price_x64,
            ) {
                index += 1;
                continue;
            }

            let outcome = match try_pool_swap(
                &env,
                &pool,
                &order.token_in,
                &order.owner,
                zero_for_one_for_side(order.side),
                order.amount_per_execution,
                order.limit_sqrt_price_x64,
                order.min_amount_out,
            ) {
                Some(outcome) => outcome,
                None => {
                    index += 1;
                    continue;
                }
            };

            order.executed_count += 1;
            order.last_execution_ledger = sequence;
            executed += 1;
            emit_order_executed(
                &env,
                id,
                order.executed_count,
                order.amount_per_execution,
                outcome.amount_out,
            );

            if order.executed_count == order.total_executions {
                order.active = false;
                write_order(&env, &order);
                active_list_swap_remove(&env, index);
                emit_order_completed(&env, id, &order.owner);
            } else {
                write_order(&env, &order);
                index += 1;
            }
        }

        let deferred = index < read_active_count(&env);
        let wake = if read_active_count(&env) > 0 {
            let target = if deferred {
                next_ledger(&env)
            } else {
                sequence.saturating_add(Self::min_live_interval(&env))
            };
            arm(&env, |e, w| write_trigger(e, w), target)
        } else {
            emit_idle(&env);
            disarm(&env, |e, w| write_trigger(e, w))
        };

        emit_trigger_checked(&env, checked, executed, &wake);
        wake
    }

    // ========================================================
    // VIEWS
    // ========================================================

    pub fn get_recurring_order(env: Env, id: u64) -> Result<RecurringOrder, RecurringOrderError> {
        read_order(&env, id).ok_or(RecurringOrderError::OrderNotFound)
    }

    /// Total orders ever created
    pub fn get_recurring_orders_count(env: Env) -> u64 {
        read_order_count(&env)
    }

    pub fn get_active_count(env: Env) -> u32 {
        read_active_count(&env)
    }

    pub fn get_trigger_state(env: Env) -> NextWake {
        read_trigger(&env)
    }

    pub fn get_config(env: Env) -> Result<RecurringOrderConfig, RecurringOrderError> {
        read_config(&env).ok_or(RecurringOrderError::NotInitialized)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    /// Tightest execution interval across orders still on the active list
    fn min_live_interval(env: &Env) -> u32 {
        let count = read_active_count(env);
        let mut min_interval = u32::MAX;
        for index in 0..count {
            if let Some(id) = read_active_slot(env, index) {
                if let Some(order) = read_order(env, id) {
                    if order.active && order.interval_ledgers < min_interval {
                        min_interval = order.interval_ledgers;
                    }
                }
            }
        }
        if min_interval == u32::MAX {
            1
        } else {
            min_interval
        }
    }
}
