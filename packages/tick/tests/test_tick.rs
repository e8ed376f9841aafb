use std::cell::RefCell;
use std::collections::BTreeMap;

use soroban_sdk::Env;
use tideswap_tick::{
    cross_tick, find_next_initialized_tick, get_fee_growth_inside, is_valid_tick, update_tick,
    TickInfo,
};

struct TickMap {
    ticks: RefCell<BTreeMap<i32, TickInfo>>,
}

impl TickMap {
    fn new() -> Self {
        Self {
            ticks: RefCell::new(BTreeMap::new()),
        }
    }

    fn read(&self) -> impl Fn(&Env, i32) -> TickInfo + '_ {
        |_env, tick| self.ticks.borrow().get(&tick).cloned().unwrap_or_default()
    }

    fn write(&self) -> impl Fn(&Env, i32, &TickInfo) + '_ {
        |_env, tick, info| {
            self.ticks.borrow_mut().insert(tick, info.clone());
        }
    }
}

#[test]
fn test_update_tick_initializes_and_flips() {
    let env = Env::default();
    let map = TickMap::new();

    let flipped = update_tick(
        &env,
        map.read(),
        map.write(),
        100,
        0,
        1_000,
        0,
        0,
        0,
        false,
    );
    assert!(flipped, "first liquidity must flip the tick on");

    let info = map.read()(&env, 100);
    assert!(info.initialized);
    assert_eq!(info.liquidity_gross, 1_000);
    assert_eq!(info.liquidity_net, 1_000);
}

#[test]
fn test_update_tick_upper_negates_net() {
    let env = Env::default();
    let map = TickMap::new();

    update_tick(&env, map.read(), map.write(), 200, 0, 1_000, 0, 0, 0, true);

    let info = map.read()(&env, 200);
    assert_eq!(info.liquidity_gross, 1_000);
    assert_eq!(info.liquidity_net, -1_000);
}

#[test]
fn test_update_tick_seeds_outside_below_current() {
    let env = Env::default();
    let map = TickMap::new();

    // Tick at or below the current price inherits the global accumulators
    update_tick(&env, map.read(), map.write(), -50, 0, 500, 777, 888, 42, false);
    let info = map.read()(&env, -50);
    assert_eq!(info.fee_growth_outside_0, 777);
    assert_eq!(info.fee_growth_outside_1, 888);
    assert_eq!(info.seconds_outside, 42);

    // A tick above the current price starts from zero
    update_tick(&env, map.read(), map.write(), 50, 0, 500, 777, 888, 42, false);
    let info = map.read()(&env, 50);
    assert_eq!(info.fee_growth_outside_0, 0);
    assert_eq!(info.fee_growth_outside_1, 0);
    assert_eq!(info.seconds_outside, 0);
}

#[test]
fn test_update_tick_clears_when_empty() {
    let env = Env::default();
    let map = TickMap::new();

    update_tick(&env, map.read(), map.write(), 100, 0, 1_000, 0, 0, 0, false);
    let flipped = update_tick(&env, map.read(), map.write(), 100, 0, -1_000, 0, 0, 0, false);

    assert!(flipped, "removing the last liquidity must flip the tick off");
    let info = map.read()(&env, 100);
    assert!(!info.initialized);
    assert_eq!(info.liquidity_gross, 0);
    assert_eq!(info.liquidity_net, 0);
}

#[test]
fn test_update_tick_no_flip_on_partial_remove() {
    let env = Env::default();
    let map = TickMap::new();

    update_tick(&env, map.read(), map.write(), 100, 0, 1_000, 0, 0, 0, false);
    let flipped = update_tick(&env, map.read(), map.write(), 100, 0, -400, 0, 0, 0, false);

    assert!(!flipped);
    let info = map.read()(&env, 100);
    assert!(info.initialized);
    assert_eq!(info.liquidity_gross, 600);
}

#[test]
#[should_panic(expected = "tick liquidity underflow")]
fn test_update_tick_underflow_panics() {
    let env = Env::default();
    let map = TickMap::new();

    update_tick(&env, map.read(), map.write(), 100, 0, 500, 0, 0, 0, false);
    update_tick(&env, map.read(), map.write(), 100, 0, -600, 0, 0, 0, false);
}

#[test]
fn test_cross_tick_flips_outside() {
    let env = Env::default();
    let map = TickMap::new();

    update_tick(&env, map.read(), map.write(), 0, 10, 1_000, 100, 200, 5, false);

    let net = cross_tick(&env, map.read(), map.write(), 0, 500, 900, 60);
    assert_eq!(net, 1_000);

    let info = map.read()(&env, 0);
    assert_eq!(info.fee_growth_outside_0, 400);
    assert_eq!(info.fee_growth_outside_1, 700);
    assert_eq!(info.seconds_outside, 55);

    // Crossing back restores the original checkpoints
    cross_tick(&env, map.read(), map.write(), 0, 500, 900, 60);
    let info = map.read()(&env, 0);
    assert_eq!(info.fee_growth_outside_0, 100);
    assert_eq!(info.fee_growth_outside_1, 200);
    assert_eq!(info.seconds_outside, 5);
}

#[test]
fn test_find_next_initialized_tick() {
    let env = Env::default();
    let map = TickMap::new();

    update_tick(&env, map.read(), map.write(), -120, 0, 1_000, 0, 0, 0, false);
    update_tick(&env, map.read(), map.write(), 180, 0, 1_000, 0, 0, 0, true);

    // Upward search from tick 5 with spacing 60 lands on 180
    let up = find_next_initialized_tick(&env, map.read(), 5, 60, false);
    assert_eq!(up, 180);

    // Downward search lands on -120
    let down = find_next_initialized_tick(&env, map.read(), 5, 60, true);
    assert_eq!(down, -120);
}

#[test]
fn test_find_next_initialized_tick_none_found() {
    let env = Env::default();
    let map = TickMap::new();

    let tick = find_next_initialized_tick(&env, map.read(), 1_000, 60, false);
    assert_eq!(tick, 1_000, "no initialized tick returns the current tick");
}

#[test]
fn test_fee_growth_inside_range_containing_price() {
    let env = Env::default();
    let map = TickMap::new();

    // Fresh ticks around the current price: all growth counts as inside
    update_tick(&env, map.read(), map.write(), -60, 0, 1_000, 0, 0, 0, false);
    update_tick(&env, map.read(), map.write(), 60, 0, 1_000, 0, 0, 0, true);

    let (inside_0, inside_1) =
        get_fee_growth_inside(&env, map.read(), -60, 60, 0, 5_000, 7_000);
    assert_eq!(inside_0, 5_000);
    assert_eq!(inside_1, 7_000);
}

#[test]
fn test_fee_growth_inside_price_below_range() {
    let env = Env::default();
    let map = TickMap::new();

    // Price below the range: growth since checkpointing stays outside
    update_tick(&env, map.read(), map.write(), 60, -10, 1_000, 3_000, 0, 0, false);
    update_tick(&env, map.read(), map.write(), 120, -10, 1_000, 3_000, 0, 0, true);

    let (inside_0, _) = get_fee_growth_inside(&env, map.read(), 60, 120, -10, 9_000, 0);
    assert_eq!(inside_0, 0, "growth below the range is not inside");
}

#[test]
fn test_fee_growth_inside_wrapping() {
    let env = Env::default();
    let map = TickMap::new();

    update_tick(
        &env,
        map.read(),
        map.write(),
        -60,
        0,
        1_000,
        u128::MAX - 10,
        0,
        0,
        false,
    );
    update_tick(
        &env,
        map.read(),
        map.write(),
        60,
        0,
        1_000,
        u128::MAX - 10,
        0,
        0,
        true,
    );

    // Global wrapped past zero; inside growth still differences correctly
    let (inside_0, _) = get_fee_growth_inside(&env, map.read(), -60, 60, 0, 30, 0);
    assert_eq!(inside_0, 41);
}

#[test]
fn test_is_valid_tick() {
    assert!(is_valid_tick(0));
    assert!(is_valid_tick(443_636));
    assert!(is_valid_tick(-443_636));
    assert!(!is_valid_tick(443_637));
    assert!(!is_valid_tick(-443_637));
}
