// Tick update and crossing logic

use crate::types::TickInfo;
use soroban_sdk::Env;
use tideswap_math::{
    constants::{MAX_LIQUIDITY_PER_TICK, MAX_TICK, MAX_TICK_SEARCH_STEPS, MIN_TICK},
    snap_tick_to_spacing,
};

/// Apply a liquidity delta to one boundary tick of a position.
///
/// Returns true when the tick flipped between initialized and empty, so the
/// caller can maintain any derived bookkeeping. When a tick is initialized
/// while the current price is at or above it, its outside accumulators are
/// seeded with the globals so fee-growth-inside differencing stays consistent.
pub fn update_tick(
    env: &Env,
    read_tick: impl Fn(&Env, i32) -> TickInfo,
    write_tick: impl Fn(&Env, i32, &TickInfo),
    tick: i32,
    current_tick: i32,
    liquidity_delta: i128,
    fee_growth_global_0: u128,
    fee_growth_global_1: u128,
    now: u64,
    upper: bool,
) -> bool {
    let mut info = read_tick(env, tick);

    let liquidity_gross_before = info.liquidity_gross;
    let liquidity_gross_after = match liquidity_gross_before.checked_add(liquidity_delta) {
        Some(after) => after,
        None => panic!("tick liquidity overflow"),
    };

    if liquidity_gross_after < 0 {
        panic!("tick liquidity underflow");
    }
    if liquidity_gross_after > MAX_LIQUIDITY_PER_TICK {
        panic!("tick liquidity exceeds maximum");
    }

    let flipped = (liquidity_gross_after == 0) != (liquidity_gross_before == 0);

    if liquidity_gross_before == 0 && liquidity_gross_after > 0 {
        if current_tick >= tick {
            info.fee_growth_outside_0 = fee_growth_global_0;
            info.fee_growth_outside_1 = fee_growth_global_1;
            info.seconds_outside = now;
        } else {
            info.fee_growth_outside_0 = 0;
            info.fee_growth_outside_1 = 0;
            info.seconds_outside = 0;
        }
        info.initialized = true;
    }

    info.liquidity_gross = liquidity_gross_after;

    if upper {
        info.liquidity_net = info.liquidity_net.saturating_sub(liquidity_delta);
    } else {
        info.liquidity_net = info.liquidity_net.saturating_add(liquidity_delta);
    }

    // An empty tick no longer bounds anything and can be re-seeded later
    if liquidity_gross_after == 0 {
        info.initialized = false;
        info.liquidity_net = 0;
    }

    write_tick(env, tick, &info);

    flipped
}

/// Cross a tick boundary during a price move.
///
/// Flips the outside accumulators to the other side of the tick and returns
/// the net liquidity change to apply (left-to-right sign convention; the
/// caller negates for right-to-left crossings).
pub fn cross_tick(
    env: &Env,
    read_tick: impl Fn(&Env, i32) -> TickInfo,
    write_tick: impl Fn(&Env, i32, &TickInfo),
    tick: i32,
    fee_growth_global_0: u128,
    fee_growth_global_1: u128,
    now: u64,
) -> i128 {
    let mut info = read_tick(env, tick);

    info.fee_growth_outside_0 = fee_growth_global_0.wrapping_sub(info.fee_growth_outside_0);
    info.fee_growth_outside_1 = fee_growth_global_1.wrapping_sub(info.fee_growth_outside_1);
    info.seconds_outside = now.wrapping_sub(info.seconds_outside);

    write_tick(env, tick, &info);

    info.liquidity_net
}

/// Find the next initialized tick at or beyond one spacing away in the given
/// direction. Returns the current tick unchanged when nothing is found within
/// the search bound.
pub fn find_next_initialized_tick(
    env: &Env,
    read_tick: impl Fn(&Env, i32) -> TickInfo,
    current_tick: i32,
    tick_spacing: i32,
    zero_for_one: bool,
) -> i32 {
    if tick_spacing <= 0 {
        return current_tick;
    }

    let step = if zero_for_one {
        -tick_spacing
    } else {
        tick_spacing
    };

    let mut tick = snap_tick_to_spacing(current_tick, tick_spacing);
    tick = tick.saturating_add(step);

    for _ in 0..MAX_TICK_SEARCH_STEPS {
        if !(MIN_TICK..=MAX_TICK).contains(&tick) {
            return current_tick;
        }

        let info = read_tick(env, tick);

        if info.initialized && info.liquidity_gross > 0 {
            return tick;
        }

        tick = tick.saturating_add(step);
    }

    current_tick
}

/// Check that a tick is inside the supported range
#[inline]
pub fn is_valid_tick(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}
