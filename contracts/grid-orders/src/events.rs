//! Grid order events

use soroban_sdk::{Address, Env, Symbol};

use tideswap_order_core::NextWake;

/// Emitted when the scheduler is initialized
pub fn emit_initialized(env: &Env, factory: &Address) {
    env.events()
        .publish((Symbol::new(env, "GridInit"),), (factory.clone(),));
}

/// Emitted when a grid is created and its quote budget escrowed
pub fn emit_grid_created(
    env: &Env,
    id: u64,
    owner: &Address,
    token_base: &Address,
    token_quote: &Address,
    level_count: u32,
    amount_per_level: i128,
) {
    env.events().publish(
        (Symbol::new(env, "GridCreated"), id),
        (
            owner.clone(),
            token_base.clone(),
            token_quote.clone(),
            level_count,
            amount_per_level,
        ),
    );
}

/// Emitted when a level buys base
pub fn emit_level_bought(env: &Env, id: u64, level: u32, quote_in: i128, base_out: i128) {
    env.events().publish(
        (Symbol::new(env, "GridBuy"), id, level),
        (quote_in, base_out),
    );
}

/// Emitted when a level sells its base back
pub fn emit_level_sold(env: &Env, id: u64, level: u32, base_in: i128, quote_out: i128) {
    env.events().publish(
        (Symbol::new(env, "GridSell"), id, level),
        (base_in, quote_out),
    );
}

/// Emitted when a grid is cancelled and fully refunded
pub fn emit_grid_cancelled(
    env: &Env,
    id: u64,
    owner: &Address,
    quote_refunded: i128,
    base_refunded: i128,
) {
    env.events().publish(
        (Symbol::new(env, "GridCancelled"), id),
        (owner.clone(), quote_refunded, base_refunded),
    );
}

/// Emitted at the end of every trigger pass
pub fn emit_trigger_checked(env: &Env, checked: u32, actions: u32, wake: &NextWake) {
    env.events().publish(
        (Symbol::new(env, "TriggerCheck"),),
        (checked, actions, wake.armed, wake.target_ledger),
    );
}

/// Emitted when the active set drains and the scheduler goes to sleep
pub fn emit_idle(env: &Env) {
    env.events().publish((Symbol::new(env, "Idle"),), ());
}
