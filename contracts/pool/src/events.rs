// Pool events, compact topic names

use soroban_sdk::{Address, Env, Symbol};

/// Topics: ("PoolInit",)
/// Data: (token0, token1, fee_ppm, tick_spacing, sqrt_price, tick)
pub fn emit_initialized(
    env: &Env,
    token0: &Address,
    token1: &Address,
    fee_ppm: u32,
    tick_spacing: i32,
    sqrt_price_x64: u128,
    current_tick: i32,
) {
    env.events().publish(
        (Symbol::new(env, "PoolInit"),),
        (
            token0.clone(),
            token1.clone(),
            fee_ppm,
            tick_spacing,
            sqrt_price_x64,
            current_tick,
        ),
    );
}

/// Topics: ("Mint",)
/// Data: (recipient, lower_tick, upper_tick, liquidity, amount0, amount1)
pub fn emit_mint(
    env: &Env,
    recipient: &Address,
    lower_tick: i32,
    upper_tick: i32,
    liquidity: i128,
    amount0: i128,
    amount1: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Mint"),),
        (
            recipient.clone(),
            lower_tick,
            upper_tick,
            liquidity,
            amount0,
            amount1,
        ),
    );
}

/// Topics: ("Burn",)
/// Data: (owner, lower_tick, upper_tick, liquidity, amount0, amount1)
pub fn emit_burn(
    env: &Env,
    owner: &Address,
    lower_tick: i32,
    upper_tick: i32,
    liquidity: i128,
    amount0: i128,
    amount1: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Burn"),),
        (
            owner.clone(),
            lower_tick,
            upper_tick,
            liquidity,
            amount0,
            amount1,
        ),
    );
}

/// Topics: ("Swap",)
/// Data: (sender, recipient, zero_for_one, amount_in, amount_out, sqrt_price, tick)
pub fn emit_swap(
    env: &Env,
    sender: &Address,
    recipient: &Address,
    zero_for_one: bool,
    amount_in: i128,
    amount_out: i128,
    sqrt_price_x64: u128,
    current_tick: i32,
) {
    env.events().publish(
        (Symbol::new(env, "Swap"),),
        (
            sender.clone(),
            recipient.clone(),
            zero_for_one,
            amount_in,
            amount_out,
            sqrt_price_x64,
            current_tick,
        ),
    );
}

/// Topics: ("Collect",)
/// Data: (owner, recipient, lower_tick, upper_tick, amount0, amount1)
pub fn emit_collect(
    env: &Env,
    owner: &Address,
    recipient: &Address,
    lower_tick: i32,
    upper_tick: i32,
    amount0: u128,
    amount1: u128,
) {
    env.events().publish(
        (Symbol::new(env, "Collect"),),
        (
            owner.clone(),
            recipient.clone(),
            lower_tick,
            upper_tick,
            amount0,
            amount1,
        ),
    );
}

/// Topics: ("ProtoFees",)
/// Data: (recipient, amount0, amount1)
pub fn emit_collect_protocol(env: &Env, recipient: &Address, amount0: u128, amount1: u128) {
    env.events().publish(
        (Symbol::new(env, "ProtoFees"),),
        (recipient.clone(), amount0, amount1),
    );
}

/// Topics: ("AddLiq",)
/// Data: (owner, liquidity, amount0, amount1)
pub fn emit_add_liquidity(env: &Env, owner: &Address, liquidity: i128, amount0: i128, amount1: i128) {
    env.events().publish(
        (Symbol::new(env, "AddLiq"),),
        (owner.clone(), liquidity, amount0, amount1),
    );
}
