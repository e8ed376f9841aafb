//! Limit order events

use soroban_sdk::{Address, Env, Symbol};

use tideswap_order_core::NextWake;

/// Emitted when the scheduler is initialized
pub fn emit_initialized(env: &Env, factory: &Address) {
    env.events()
        .publish((Symbol::new(env, "LimitInit"),), (factory.clone(),));
}

/// Emitted when a new order is created and escrowed
pub fn emit_order_created(
    env: &Env,
    id: u64,
    owner: &Address,
    token_in: &Address,
    token_out: &Address,
    amount_in: i128,
    limit_sqrt_price_x64: u128,
    expiry_ledger: u32,
) {
    env.events().publish(
        (Symbol::new(env, "OrderCreated"), id),
        (
            owner.clone(),
            token_in.clone(),
            token_out.clone(),
            amount_in,
            limit_sqrt_price_x64,
            expiry_ledger,
        ),
    );
}

/// Emitted when an order fills
pub fn emit_order_filled(env: &Env, id: u64, owner: &Address, amount_in: i128, amount_out: i128) {
    env.events().publish(
        (Symbol::new(env, "OrderFilled"), id),
        (owner.clone(), amount_in, amount_out),
    );
}

/// Emitted when an order is cancelled and refunded
pub fn emit_order_cancelled(env: &Env, id: u64, owner: &Address, refunded: i128) {
    env.events().publish(
        (Symbol::new(env, "OrderCancelled"), id),
        (owner.clone(), refunded),
    );
}

/// Emitted when an expired order is swept during a trigger pass
pub fn emit_order_expired(env: &Env, id: u64, owner: &Address, refunded: i128) {
    env.events().publish(
        (Symbol::new(env, "OrderExpired"), id),
        (owner.clone(), refunded),
    );
}

/// Emitted at the end of every trigger pass
pub fn emit_trigger_checked(env: &Env, checked: u32, filled: u32, wake: &NextWake) {
    env.events().publish(
        (Symbol::new(env, "TriggerCheck"),),
        (checked, filled, wake.armed, wake.target_ledger),
    );
}

/// Emitted when the active set drains and the scheduler goes to sleep
pub fn emit_idle(env: &Env) {
    env.events().publish((Symbol::new(env, "Idle"),), ());
}
