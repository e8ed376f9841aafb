//! Factory events

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when the factory is initialized
pub fn emit_initialized(env: &Env, admin: &Address) {
    env.events()
        .publish((Symbol::new(env, "FactoryInit"),), (admin.clone(),));
}

/// Emitted when a pool is registered for a token pair and fee tier
pub fn emit_pool_registered(
    env: &Env,
    pool: &Address,
    token0: &Address,
    token1: &Address,
    fee_ppm: u32,
) {
    env.events().publish(
        (Symbol::new(env, "PoolRegistered"),),
        (pool.clone(), token0.clone(), token1.clone(), fee_ppm),
    );
}

/// Emitted when the admin is rotated
pub fn emit_admin_updated(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "AdminUpdated"),),
        (old_admin.clone(), new_admin.clone()),
    );
}
