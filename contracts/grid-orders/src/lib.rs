#![no_std]

//! # Tideswap Grid Orders
//!
//! Grid trading over tideswap pools: each grid spreads evenly spaced price
//! levels between two bounds, buying base as the price steps down onto a
//! level and selling that base back as it steps up again. Proceeds of sells
//! replenish the quote escrow, so a grid keeps cycling until cancelled.
//!
//! ## Functions:
//! - Write (4): initialize, create_grid_order, cancel_grid_order, check_and_execute
//! - Read (6): get_grid_order, get_grid_level, get_grid_orders_count,
//!   get_active_count, get_trigger_state, get_config

use soroban_sdk::{contract, contractimpl, token, Address, Env};

use tideswap_order_core::{arm, disarm, fetch_pool_snapshot, lookup_pool, next_ledger,
    try_pool_swap, ReentrancyGuard};

mod error;
mod events;
mod storage;
mod types;

pub use error::GridOrderError;
use events::*;
use storage::*;
pub use types::*;

/// Grids examined per trigger pass; the remainder waits for the next run
const MAX_GRIDS_PER_CHECK: u32 = 5;
/// Upper bound on levels per grid, keeping one grid within call limits
const MAX_GRID_LEVELS: u32 = 20;

#[contract]
pub struct TideswapGridOrders;

#[contractimpl]
impl TideswapGridOrders {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    pub fn initialize(env: Env, factory: Address) -> Result<(), GridOrderError> {
        if is_initialized(&env) {
            return Err(GridOrderError::AlreadyInitialized);
        }

        write_config(&env, &GridOrderConfig { factory: factory.clone() });
        set_initialized(&env);

        emit_initialized(&env, &factory);

        Ok(())
    }

    // ========================================================
    // GRID LIFECYCLE
    // ========================================================

    /// Create a grid, escrowing `amount_per_level * level_count` of the
    /// quote token. Level `i` sits at
    /// `lower + i * (upper - lower) / (level_count - 1)`.
    ///
    /// `token_base` must sort below `token_quote` so the grid's prices read
    /// directly as pool sqrt prices of quote per base.
    #[allow(clippy::too_many_arguments)]
    pub fn create_grid_order(
        env: Env,
        owner: Address,
        token_base: Address,
        token_quote: Address,
        fee_ppm: u32,
        lower_sqrt_price_x64: u128,
        upper_sqrt_price_x64: u128,
        level_count: u32,
        amount_per_level: i128,
    ) -> Result<u64, GridOrderError> {
        owner.require_auth();
        let _guard = ReentrancyGuard::lock(&env);

        if !is_initialized(&env) {
            return Err(GridOrderError::NotInitialized);
        }
        if token_base >= token_quote {
            return Err(GridOrderError::InvalidTokenPair);
        }
        if amount_per_level <= 0 {
            return Err(GridOrderError::InvalidAmount);
        }
        if lower_sqrt_price_x64 == 0 || lower_sqrt_price_x64 >= upper_sqrt_price_x64 {
            return Err(GridOrderError::InvalidPriceRange);
        }
        if !(2..=MAX_GRID_LEVELS).contains(&level_count) {
            return Err(GridOrderError::InvalidLevelCount);
        }

        let budget = amount_per_level
            .checked_mul(level_count as i128)
            .ok_or(GridOrderError::InvalidAmount)?;

        token::Client::new(&env, &token_quote).transfer(
            &owner,
            &env.current_contract_address(),
            &budget,
        );

        let id = next_order_id(&env);
        let order = GridOrder {
            id,
            owner: owner.clone(),
            token_base: token_base.clone(),
            token_quote: token_quote.clone(),
            fee_ppm,
            level_count,
            amount_per_level,
            lower_sqrt_price_x64,
            upper_sqrt_price_x64,
            quote_remaining: budget,
            active: true,
            cancelled: false,
        };
        write_order(&env, &order);

        for index in 0..level_count {
            let level = GridLevel {
                sqrt_price_x64: Self::level_price(&order, index),
                amount: amount_per_level,
                status: GridLevelStatus::Idle,
                base_acquired: 0,
                last_fill_ledger: 0,
            };
            write_level(&env, id, index, &level);
        }

        let live = active_list_push(&env, id) + 1;
        if live == 1 {
            arm(&env, |e, wake| write_trigger(e, wake), next_ledger(&env));
        }

        emit_grid_created(
            &env,
            id,
            &owner,
            &token_base,
            &token_quote,
            level_count,
            amount_per_level,
        );

        Ok(id)
    }

    /// Cancel a grid, refunding the remaining quote escrow and every level's
    /// held base. Owner only.
    pub fn cancel_grid_order(env: Env, id: u64) -> Result<(), GridOrderError> {
        let _guard = ReentrancyGuard::lock(&env);

        let mut order = read_order(&env, id).ok_or(GridOrderError::OrderNotFound)?;
        order.owner.require_auth();

        if !order.active {
            return Err(GridOrderError::OrderNotActive);
        }

        let mut base_held: i128 = 0;
        for index in 0..order.level_count {
            if let Some(mut level) = read_level(&env, id, index) {
                base_held = base_held.saturating_add(level.base_acquired);
                level.base_acquired = 0;
                write_level(&env, id, index, &level);
            }
        }

        let quote_refund = order.quote_remaining;
        order.quote_remaining = 0;
        order.active = false;
        order.cancelled = true;
        write_order(&env, &order);
        active_list_remove_id(&env, id);

        let contract = env.current_contract_address();
        if quote_refund > 0 {
            token::Client::new(&env, &order.token_quote).transfer(
                &contract,
                &order.owner,
                &quote_refund,
            );
        }
        if base_held > 0 {
            token::Client::new(&env, &order.token_base).transfer(
                &contract,
                &order.owner,
                &base_held,
            );
        }

        emit_grid_cancelled(&env, id, &order.owner, quote_refund, base_held);

        Ok(())
    }

    // ========================================================
    // TRIGGER
    // ========================================================

    /// Keeper entry point: re-evaluate every level of every live grid
    /// against the pool price. Each level acts at most once per ledger, buys
    /// are checked before sells, and only the level the price brackets acts.
    pub fn check_and_execute(env: Env) -> NextWake {
        let _guard = ReentrancyGuard::lock(&env);

        let config = match read_config(&env) {
            Some(config) => config,
            None => return NextWake::idle(),
        };

        let mut index: u32 = 0;
        let mut checked: u32 = 0;
        let mut actions: u32 = 0;

        while checked < MAX_GRIDS_PER_CHECK && index < read_active_count(&env) {
            checked += 1;

            let id = match read_active_slot(&env, index) {
                Some(id) => id,
                None => {
                    index += 1;
                    continue;
                }
            };
            let order = match read_order(&env, id) {
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

            actions += Self::run_grid(&env, &config, order);
            index += 1;
        }

        let wake = if read_active_count(&env) > 0 {
            arm(&env, |e, w| write_trigger(e, w), next_ledger(&env))
        } else {
            emit_idle(&env);
            disarm(&env, |e, w| write_trigger(e, w))
        };

        emit_trigger_checked(&env, checked, actions, &wake);
        wake
    }

    // ========================================================
    // VIEWS
    // ========================================================

    pub fn get_grid_order(env: Env, id: u64) -> Result<GridOrder, GridOrderError> {
        read_order(&env, id).ok_or(GridOrderError::OrderNotFound)
    }

    pub fn get_grid_level(env: Env, id: u64, index: u32) -> Result<GridLevel, GridOrderError> {
        read_level(&env, id, index).ok_or(GridOrderError::LevelNotFound)
    }

    /// Total grids ever created
    pub fn get_grid_orders_count(env: Env) -> u64 {
        read_order_count(&env)
    }

    pub fn get_active_count(env: Env) -> u32 {
        read_active_count(&env)
    }

    pub fn get_trigger_state(env: Env) -> NextWake {
        read_trigger(&env)
    }

    pub fn get_config(env: Env) -> Result<GridOrderConfig, GridOrderError> {
        read_config(&env).ok_or(GridOrderError::NotInitialized)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    /// Evenly spaced level price between the grid's bounds
    fn level_price(order: &GridOrder, index: u32) -> u128 {
        let span = order.upper_sqrt_price_x64 - order.lower_sqrt_price_x64;
        let step = span / (order.level_count - 1) as u128;
        order.lower_sqrt_price_x64 + step * index as u128
    }

    /// One trigger pass over a single grid; returns the number of fills.
    ///
    /// Every executed swap lands the pool price exactly on the level's
    /// price, so the local price is advanced without refetching.
    fn run_grid(env: &Env, config: &GridOrderConfig, mut order: GridOrder) -> u32 {
        let pool = match lookup_pool(
            env,
            &config.factory,
            &order.token_base,
            &order.token_quote,
            order.fee_ppm,
        ) {
            Some(pool) => pool,
            None => return 0,
        };
        let snapshot = match fetch_pool_snapshot(env, &pool) {
            Some(snapshot) => snapshot,
            None => return 0,
        };

        let sequence = env.ledger().sequence();
        let contract = env.current_contract_address();
        let mut price = snapshot.sqrt_price_x64;
        let mut actions: u32 = 0;

        for index in 0..order.level_count {
            let mut level = match read_level(env, order.id, index) {
                Some(level) => level,
                None => continue,
            };

            if level.last_fill_ledger == sequence && level.last_fill_ledger != 0 {
                continue;
            }

            let below_ok = index == 0 || price > Self::level_price(&order, index - 1);
            let above_ok = index + 1 == order.level_count
                || price < Self::level_price(&order, index + 1);

            // The price has come down onto this level: deploy quote into base
            let wants_buy = price <= level.sqrt_price_x64
                && below_ok
                && level.status != GridLevelStatus::BuyPending
                && order.quote_remaining >= level.amount;

            if wants_buy {
                if let Some(outcome) = try_pool_swap(
                    env,
                    &pool,
                    &order.token_quote,
                    &contract,
                    false,
                    level.amount,
                    level.sqrt_price_x64,
                    0,
                ) {
                    order.quote_remaining -= level.amount;
                    level.base_acquired = level.base_acquired.saturating_add(outcome.amount_out);
                    level.status = GridLevelStatus::BuyPending;
                    level.last_fill_ledger = sequence;
                    write_level(env, order.id, index, &level);
                    price = level.sqrt_price_x64;
                    actions += 1;
                    emit_level_bought(env, order.id, index, level.amount, outcome.amount_out);
                }
                continue;
            }

            // The price has come back up through this level: unwind its base
            let wants_sell = price >= level.sqrt_price_x64
                && above_ok
                && level.status != GridLevelStatus::SellPending
                && level.base_acquired > 0;

            if wants_sell {
                let base_in = level.base_acquired;
                if let Some(outcome) = try_pool_swap(
                    env,
                    &pool,
                    &order.token_base,
                    &contract,
                    true,
                    base_in,
                    level.sqrt_price_x64,
                    0,
                ) {
                    order.quote_remaining = order.quote_remaining.saturating_add(outcome.amount_out);
                    level.base_acquired = 0;
                    level.status = GridLevelStatus::SellPending;
                    level.last_fill_ledger = sequence;
                    write_level(env, order.id, index, &level);
                    price = level.sqrt_price_x64;
                    actions += 1;
                    emit_level_sold(env, order.id, index, base_in, outcome.amount_out);
                }
            }
        }

        if actions > 0 {
            write_order(env, &order);
        }
        actions
    }
}
