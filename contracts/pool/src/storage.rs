// SPDX-License-Identifier: MIT
// Pool storage

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{PoolConfig, PoolState};
use tideswap_position::{is_empty, Position};
use tideswap_tick::TickInfo;

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum PoolDataKey {
    /// Pool configuration
    Config,
    /// Pool state
    State,
    /// Initialization flag
    Initialized,
    /// Tick record by tick index
    Tick(i32),
    /// Position by (owner, lower_tick, upper_tick)
    Position(Address, i32, i32),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &PoolDataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&PoolDataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage()
        .persistent()
        .set(&PoolDataKey::Initialized, &true);
    extend_ttl(env, &PoolDataKey::Initialized);
}

// ============================================================
// CONFIG / STATE
// ============================================================

pub fn write_pool_config(env: &Env, config: &PoolConfig) {
    env.storage().persistent().set(&PoolDataKey::Config, config);
    extend_ttl(env, &PoolDataKey::Config);
}

pub fn read_pool_config(env: &Env) -> PoolConfig {
    env.storage()
        .persistent()
        .get(&PoolDataKey::Config)
        .expect("pool not initialized")
}

pub fn write_pool_state(env: &Env, state: &PoolState) {
    env.storage().persistent().set(&PoolDataKey::State, state);
    extend_ttl(env, &PoolDataKey::State);
}

pub fn read_pool_state(env: &Env) -> PoolState {
    env.storage()
        .persistent()
        .get(&PoolDataKey::State)
        .expect("pool not initialized")
}

// ============================================================
// TICKS
// ============================================================

pub fn read_tick_info(env: &Env, tick: i32) -> TickInfo {
    env.storage()
        .persistent()
        .get(&PoolDataKey::Tick(tick))
        .unwrap_or_default()
}

/// Write a tick record, deleting the key once the tick no longer bounds
/// any position
pub fn write_tick_info(env: &Env, tick: i32, info: &TickInfo) {
    let key = PoolDataKey::Tick(tick);
    if info.liquidity_gross == 0 && !info.initialized {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, info);
        extend_ttl(env, &key);
    }
}

// ============================================================
// POSITIONS
// ============================================================

pub fn read_position(env: &Env, owner: &Address, lower: i32, upper: i32) -> Position {
    env.storage()
        .persistent()
        .get(&PoolDataKey::Position(owner.clone(), lower, upper))
        .unwrap_or_default()
}

pub fn position_exists(env: &Env, owner: &Address, lower: i32, upper: i32) -> bool {
    env.storage()
        .persistent()
        .has(&PoolDataKey::Position(owner.clone(), lower, upper))
}

/// Write a position, deleting the key once it holds no liquidity and no
/// uncollected fees
pub fn write_position(env: &Env, owner: &Address, lower: i32, upper: i32, pos: &Position) {
    let key = PoolDataKey::Position(owner.clone(), lower, upper);
    if is_empty(pos) {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, pos);
        extend_ttl(env, &key);
    }
}
