// Grid order storage

use soroban_sdk::{contracttype, Env};

use crate::types::{GridLevel, GridOrder, GridOrderConfig};
use tideswap_order_core::{active_push, active_swap_remove, NextWake};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum GridDataKey {
    /// Scheduler configuration
    Config,
    /// Initialization flag
    Initialized,
    /// Monotonically increasing grid id counter
    OrderCounter,
    /// Grid record by id
    Order(u64),
    /// Level state by (grid_id, level_index)
    Level(u64, u32),
    /// Number of live entries in the active list
    ActiveCount,
    /// Active list slot by index
    ActiveSlot(u32),
    /// Persisted trigger state
    Trigger,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &GridDataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// INITIALIZATION / CONFIG
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&GridDataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage()
        .persistent()
        .set(&GridDataKey::Initialized, &true);
    extend_ttl(env, &GridDataKey::Initialized);
}

pub fn write_config(env: &Env, config: &GridOrderConfig) {
    env.storage().persistent().set(&GridDataKey::Config, config);
    extend_ttl(env, &GridDataKey::Config);
}

pub fn read_config(env: &Env) -> Option<GridOrderConfig> {
    env.storage().persistent().get(&GridDataKey::Config)
}

// ============================================================
// ORDERS / LEVELS
// ============================================================

/// Allocate the next grid id, starting at 1
pub fn next_order_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .persistent()
        .get(&GridDataKey::OrderCounter)
        .unwrap_or(0)
        + 1;
    env.storage()
        .persistent()
        .set(&GridDataKey::OrderCounter, &id);
    extend_ttl(env, &GridDataKey::OrderCounter);
    id
}

pub fn read_order_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&GridDataKey::OrderCounter)
        .unwrap_or(0)
}

pub fn read_order(env: &Env, id: u64) -> Option<GridOrder> {
    env.storage().persistent().get(&GridDataKey::Order(id))
}

pub fn write_order(env: &Env, order: &GridOrder) {
    let key = GridDataKey::Order(order.id);
    env.storage().persistent().set(&key, order);
    extend_ttl(env, &key);
}

pub fn read_level(env: &Env, grid_id: u64, index: u32) -> Option<GridLevel> {
    env.storage()
        .persistent()
        .get(&GridDataKey::Level(grid_id, index))
}

pub fn write_level(env: &Env, grid_id: u64, index: u32, level: &GridLevel) {
    let key = GridDataKey::Level(grid_id, index);
    env.storage().persistent().set(&key, level);
    extend_ttl(env, &key);
}

// ============================================================
// ACTIVE LIST
// ============================================================

pub fn read_active_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&GridDataKey::ActiveCount)
        .unwrap_or(0)
}

pub fn read_active_slot(env: &Env, index: u32) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&GridDataKey::ActiveSlot(index))
}

/// Append a grid id to the active list, returning its index
pub fn active_list_push(env: &Env, id: u64) -> u32 {
    active_push(
        env,
        |e| read_active_count(e),
        |e, count| {
            e.storage()
                .persistent()
                .set(&GridDataKey::ActiveCount, &count);
            extend_ttl(e, &GridDataKey::ActiveCount);
        },
        |e, index, slot_id| {
            let key = GridDataKey::ActiveSlot(index);
            e.storage().persistent().set(&key, &slot_id);
            extend_ttl(e, &key);
        },
        id,
    )
}

/// Swap-remove the entry at `index`, returning the id moved into its place
pub fn active_list_swap_remove(env: &Env, index: u32) -> Option<u64> {
    active_swap_remove(
        env,
        |e| read_active_count(e),
        |e, count| {
            e.storage()
                .persistent()
                .set(&GridDataKey::ActiveCount, &count);
            extend_ttl(e, &GridDataKey::ActiveCount);
        },
        |e, idx| {
            e.storage()
                .persistent()
                .get(&GridDataKey::ActiveSlot(idx))
                .unwrap_or(0)
        },
        |e, idx, slot_id| {
            let key = GridDataKey::ActiveSlot(idx);
            e.storage().persistent().set(&key, &slot_id);
            extend_ttl(e, &key);
        },
        |e, idx| {
            e.storage()
                .persistent()
                .remove(&GridDataKey::ActiveSlot(idx));
        },
        index,
    )
}

/// Remove a grid id from the active list by value
pub fn active_list_remove_id(env: &Env, id: u64) {
    let count = read_active_count(env);
    for index in 0..count {
        if read_active_slot(env, index) == Some(id) {
            active_list_swap_remove(env, index);
            return;
        }
    }
}

// ============================================================
// TRIGGER STATE
// ============================================================

pub fn read_trigger(env: &Env) -> NextWake {
    env.storage()
        .persistent()
        .get(&GridDataKey::Trigger)
        .unwrap_or(NextWake::idle())
}

pub fn write_trigger(env: &Env, wake: &NextWake) {
    env.storage().persistent().set(&GridDataKey::Trigger, wake);
    extend_ttl(env, &GridDataKey::Trigger);
}
