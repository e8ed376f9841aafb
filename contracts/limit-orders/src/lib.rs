#![no_std]

//! # Tideswap Limit Orders
//!
//! Fill-or-keep limit orders over tideswap pools. Orders escrow their input
//! on creation and a keeper-driven `check_and_execute` pass fills whichever
//! ones the pool price has reached, re-arming itself for the next ledger
//! while live orders remain.
//!
//! ## Functions:
//! - Write (4): initialize, create_limit_order, cancel_limit_order, check_and_execute
//! - Read (5): get_limit_order, get_limit_orders_count, get_active_count,
//!   get_trigger_state, get_config

use soroban_sdk::{contract, contractimpl, token, Address, Env};

use tideswap_order_core::{
    arm, disarm, fetch_pool_snapshot, lookup_pool, next_ledger, price_condition_met, try_pool_swap,
    zero_for_one_for_side, ReentrancyGuard,
};

mod error;
mod events;
mod storage;
mod types;

pub use error::LimitOrderError;
use events::*;
use storage::*;
pub use types::*;

/// Orders examined per trigger pass; the remainder waits for the next run
const MAX_ORDERS_PER_CHECK: u32 = 10;

#[contract]
pub struct TideswapLimitOrders;

#[contractimpl]
impl TideswapLimitOrders {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    pub fn initialize(env: Env, factory: Address) -> Result<(), LimitOrderError> {
        if is_initialized(&env) {
            return Err(LimitOrderError::AlreadyInitialized);
        }

        write_config(&env, &LimitOrderConfig { factory: factory.clone() });
        set_initialized(&env);

        emit_initialized(&env, &factory);

        Ok(())
    }

    // ========================================================
    // ORDER LIFECYCLE
    // ========================================================

    /// Create a limit order, escrowing `amount_in` from the owner.
    ///
    /// The side must agree with the token ordering: a sell disposes of
    /// token0 (`token_in < token_out`), a buy acquires it. Arms the trigger
    /// when this is the first live order.
    #[allow(clippy::too_many_arguments)]
    pub fn create_limit_order(
        env: Env,
        owner: Address,
        token_in: Address,
        token_out: Address,
        fee_ppm: u32,
        amount_in: i128,
        min_amount_out: i128,
        limit_sqrt_price_x64: u128,
        side: OrderSide,
        expiry_ledger: u32,
    ) -> Result<u64, LimitOrderError> {
        owner.require_auth();
        let _guard = ReentrancyGuard::lock(&env);

        if !is_initialized(&env) {
            return Err(LimitOrderError::NotInitialized);
        }
        if token_in == token_out {
            return Err(LimitOrderError::InvalidTokenPair);
        }
        if amount_in <= 0 || min_amount_out < 0 {
            return Err(LimitOrderError::InvalidAmount);
        }
        if limit_sqrt_price_x64 == 0 {
            return Err(LimitOrderError::InvalidPrice);
        }
        if expiry_ledger <= env.ledger().sequence() {
            return Err(LimitOrderError::InvalidExpiry);
        }
        if zero_for_one_for_side(side) != (token_in < token_out) {
            return Err(LimitOrderError::InvalidSide);
        }

        token::Client::new(&env, &token_in).transfer(
            &owner,
            &env.current_contract_address(),
            &amount_in,
        );

        let id = next_order_id(&env);
        let order = LimitOrder {
            id,
            owner: owner.clone(),
            token_in: token_in.clone(),
            token_out: token_out.clone(),
            fee_ppm,
            amount_in,
            min_amount_out,
            limit_sqrt_price_x64,
            side,
            expiry_ledger,
            filled: false,
            cancelled: false,
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
            amount_in,
            limit_sqrt_price_x64,
            expiry_ledger,
        );

        Ok(id)
    }

    /// Cancel a live order and refund its escrow. Owner only.
    pub fn cancel_limit_order(env: Env, id: u64) -> Result<(), LimitOrderError> {
        let _guard = ReentrancyGuard::lock(&env);

        let mut order = read_order(&env, id).ok_or(LimitOrderError::OrderNotFound)?;
        order.owner.require_auth();

        if order.is_terminal() {
            return Err(LimitOrderError::OrderNotActive);
        }

        order.cancelled = true;
        write_order(&env, &order);
        active_list_remove_id(&env, id);

        token::Client::new(&env, &order.token_in).transfer(
            &env.current_contract_address(),
            &order.owner,
            &order.amount_in,
        );

        emit_order_cancelled(&env, id, &order.owner, order.amount_in);

        Ok(())
    }

    // ========================================================
    // TRIGGER
    // ========================================================

    /// Keeper entry point: walk the active list, fill what the price has
    /// reached, sweep what has expired, and report when to call again.
    ///
    /// A missing pool or a rejected swap skips the entry for this pass; it
    /// stays live and is retried on the next one.
    pub fn check_and_execute(env: Env) -> NextWake {
        let _guard = ReentrancyGuard::lock(&env);

        let config = match read_config(&env) {
            Some(config) => config,
            None => return NextWake::idle(),
        };

        let sequence = env.ledger().sequence();
        let mut index: u32 = 0;
        let mut checked: u32 = 0;
        let mut filled: u32 = 0;

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

            if order.is_terminal() {
                active_list_swap_remove(&env, index);
                continue;
            }

            if sequence >= order.expiry_ledger {
                order.cancelled = true;
                write_order(&env, &order);
                active_list_swap_remove(&env, index);
                token::Client::new(&env, &order.token_in).transfer(
                    &env.current_contract_address(),
                    &order.owner,
                    &order.amount_in,
                );
                emit_order_expired(&env, id, &order.owner, order.amount_in);
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
                order.amount_in,
                order.limit_sqrt_price_x64,
                order.min_amount_out,
            ) {
                Some(outcome) => outcome,
                None => {
                    index += 1;
                    continue;
                }
            };

            order.filled = true;
            write_order(&env, &order);
            active_list_swap_remove(&env, index);
            filled += 1;
            emit_order_filled(&env, id, &order.owner, order.amount_in, outcome.amount_out);
        }

        let wake = if read_active_count(&env) > 0 {
            arm(&env, |e, w| write_trigger(e, w), next_ledger(&env))
        } else {
            emit_idle(&env);
            disarm(&env, |e, w| write_trigger(e, w))
        };

        emit_trigger_checked(&env, checked, filled, &wake);
        wake
    }

    // ========================================================
    // VIEWS
    // ========================================================

    pub fn get_limit_order(env: Env, id: u64) -> Result<LimitOrder, LimitOrderError> {
        read_order(&env, id).ok_or(LimitOrderError::OrderNotFound)
    }

    /// Total orders ever created
    pub fn get_limit_orders_count(env: Env) -> u64 {
        read_order_count(&env)
    }

    pub fn get_active_count(env: Env) -> u32 {
        read_active_count(&env)
    }

    pub fn get_trigger_state(env: Env) -> NextWake {
        read_trigger(&env)
    }

    pub fn get_config(env: Env) -> Result<LimitOrderConfig, LimitOrderError> {
        read_config(&env).ok_or(LimitOrderError::NotInitialized)
    }
}
