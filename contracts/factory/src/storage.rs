// Factory storage

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{FactoryConfig, PoolInfo};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum FactoryDataKey {
    Config,
    Initialized,
    PoolCount,
    Pool(Address, Address, u32),
    PoolInfo(Address),
    PoolByIndex(u32),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &FactoryDataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn factory_is_initialized(env: &Env) -> bool {
    env.storage()
        .persistent()
        .has(&FactoryDataKey::Initialized)
}

pub fn factory_set_initialized(env: &Env) {
    env.storage()
        .persistent()
        .set(&FactoryDataKey::Initialized, &true);
    extend_ttl(env, &FactoryDataKey::Initialized);
}

// ============================================================
// FACTORY CONFIG
// ============================================================

pub fn write_factory_config(env: &Env, config: &FactoryConfig) {
    env.storage()
        .persistent()
        .set(&FactoryDataKey::Config, config);
    extend_ttl(env, &FactoryDataKey::Config);
}

pub fn read_factory_config(env: &Env) -> FactoryConfig {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::Config)
        .expect("factory not initialized")
}

// ============================================================
// POOL REGISTRY
// ============================================================

/// Canonical pair key: tokens ordered so both (a, b) and (b, a) resolve to
/// the same pool
pub fn pair_key(token_a: &Address, token_b: &Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a.clone(), token_b.clone())
    } else {
        (token_b.clone(), token_a.clone())
    }
}

pub fn pool_exists(env: &Env, token_a: &Address, token_b: &Address, fee_ppm: u32) -> bool {
    let (t0, t1) = pair_key(token_a, token_b);
    env.storage()
        .persistent()
        .has(&FactoryDataKey::Pool(t0, t1, fee_ppm))
}

pub fn read_pool_address(
    env: &Env,
    token_a: &Address,
    token_b: &Address,
    fee_ppm: u32,
) -> Option<Address> {
    let (t0, t1) = pair_key(token_a, token_b);
    env.storage()
        .persistent()
        .get(&FactoryDataKey::Pool(t0, t1, fee_ppm))
}

pub fn write_pool(env: &Env, token_a: &Address, token_b: &Address, info: &PoolInfo) {
    let (t0, t1) = pair_key(token_a, token_b);

    let pair = FactoryDataKey::Pool(t0, t1, info.fee_ppm);
    env.storage().persistent().set(&pair, &info.pool);
    extend_ttl(env, &pair);

    let by_pool = FactoryDataKey::PoolInfo(info.pool.clone());
    env.storage().persistent().set(&by_pool, info);
    extend_ttl(env, &by_pool);

    let index = read_pool_count(env);
    let by_index = FactoryDataKey::PoolByIndex(index);
    env.storage().persistent().set(&by_index, &info.pool);
    extend_ttl(env, &by_index);

    write_pool_count(env, index + 1);
}

pub fn read_pool_info(env: &Env, pool: &Address) -> Option<PoolInfo> {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::PoolInfo(pool.clone()))
}

pub fn read_pool_by_index(env: &Env, index: u32) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::PoolByIndex(index))
}

pub fn read_pool_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::PoolCount)
        .unwrap_or(0)
}

fn write_pool_count(env: &Env, count: u32) {
    env.storage()
        .persistent()
        .set(&FactoryDataKey::PoolCount, &count);
    extend_ttl(env, &FactoryDataKey::PoolCount);
}
