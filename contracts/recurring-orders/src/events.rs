//! Recurring order events

use soroban_sdk::{Address, Env, Symbol};

use tideswap_order_core::NextWake;

/// Emitted when the scheduler is initialized
pub fn emit_initialized(env: &Env, factory: &Address) {
    env.events()
        .publish((Symbol::new(env, "RecurInit"),), (factory.clone(),));
}

/// Emitted when a new order is created and its full budget escrowed
pub fn emit_order_created(
    env: &Env,
    id: u64,
    owner: &Address,
    token_in: &Address,
    token_out: &Address,
    amount_per_execution: i128,
    interval_ledgers: u32,
    total_executions: u32,
) {
    env.events().publish(
        (Symbol::new(env, "RecurCreated"), id),
        (
            owner.clone(),
            token_in.clone(),
            token_out.clone(),
            amount_per_execution,
            interval_ledgers,
            total_executions,
        ),
    );
}

/// Emitted per successful execution
pub fn emit_order_executed(
    env: &Env,
    id: u64,
    executed_count: u32,
    amount_in: i128,
    amount_out: i128,
) {
    env.events().publish(
        (Symbol::new(env, "RecurExec"), id),
        (executed_count, amount_in, amount_out),
    );
}

/// Emitted once the final execution completes
pub fn emit_order_completed(env: &Env, id: u64, owner: &Address) {
    env.events()
        .publish((Symbol::new(env, "RecurDone"), id), (owner.clone(),));
}

/// Emitted when an order is cancelled and its unspent budget refunded
pub fn emit_order_cancelled(env: &Env, id: u64, owner: &Address, refunded: i128) {
    env.events().publish(
        (Symbol::new(env, "RecurCancelled"), id),
        (owner.clone(), refunded),
    );
}

/// Emitted at the end of every trigger pass
pub fn emit_trigger_checked(env: &Env, checked: u32, executed: u32, wake: &NextWake) {
    env.events().publish(
        (Symbol::new(env, "TriggerCheck"),),
        (checked, executed, wake.armed, wake.target_ledger),
    );
}

/// Emitted when the active set drains and the scheduler goes to sleep
pub fn emit_idle(env: &Env) {
    env.events().publish((Symbol::new(env, "Idle"),), ());
}
