mod common;

use common::*;
use soroban_sdk::{testutils::Address as _, Address, Env};
use tideswap_limit_orders::OrderSide;
use tideswap_math::get_sqrt_ratio_at_tick;

const AMOUNT_IN: i128 = 100_000;

/// Sell order: dispose of token0 once the price has risen to `limit_tick`
fn create_sell_order(env: &Env, market: &Market, limit_tick: i32, expiry: u32) -> (Address, u64) {
    let owner = Address::generate(env);
    mint_tokens(env, &market.token0, &owner, 1_000_000_000);

    let id = market.orders.create_limit_order(
        &owner,
        &market.token0,
        &market.token1,
        &FEE_PPM,
        &AMOUNT_IN,
        &0i128,
        &get_sqrt_ratio_at_tick(limit_tick),
        &OrderSide::Sell,
        &expiry,
    );
    (owner, id)
}

/// Buy order: acquire token0 once the price has fallen to `limit_tick`
fn create_buy_order(env: &Env, market: &Market, limit_tick: i32, expiry: u32) -> (Address, u64) {
    let owner = Address::generate(env);
    mint_tokens(env, &market.token1, &owner, 1_000_000_000);

    let id = market.orders.create_limit_order(
        &owner,
        &market.token1,
        &market.token0,
        &FEE_PPM,
        &AMOUNT_IN,
        &0i128,
        &get_sqrt_ratio_at_tick(limit_tick),
        &OrderSide::Buy,
        &expiry,
    );
    (owner, id)
}

#[test]
fn test_create_escrows_and_arms_trigger() {
    let env = Env::default();
    env.mock_all_auths();
    set_sequence(&env, 100);

    let market = setup_market(&env);
    let (owner, id) = create_sell_order(&env, &market, 120, 10_000);

    assert_eq!(id, 1);
    assert_eq!(market.orders.get_limit_orders_count(), 1);
    assert_eq!(market.orders.get_active_count(), 1);

    // Escrow sits on the scheduler
    assert_eq!(
        balance(&env, &market.token0, &market.orders.address),
        AMOUNT_IN
    );
    assert_eq!(
        balance(&env, &market.token0, &owner),
        1_000_000_000 - AMOUNT_IN
    );

    // First order arms the trigger for the next ledger
    let wake = market.orders.get_trigger_state();
    assert!(wake.armed);
    assert_eq!(wake.target_ledger, 101);

    let order = market.orders.get_limit_order(&id);
    assert_eq!(order.owner, owner);
    assert_eq!(order.amount_in, AMOUNT_IN);
    assert!(!order.filled);
    assert!(!order.cancelled);
}

#[test]
fn test_no_fill_while_price_short_of_limit() {
    let env = Env::default();
    env.mock_all_auths();
    set_sequence(&env, 100);

    let market = setup_market(&env);
    let (_, id) = create_sell_order(&env, &market, 120, 10_000);

    // Price still at 1.0, below the sell limit
    let wake = market.orders.check_and_execute();

    assert!(wake.armed);
    assert_eq!(wake.target_ledger, 101);
    assert_eq!(market.orders.get_active_count(), 1);
    assert!(!market.orders.get_limit_order(&id).filled);
}

#[test]
fn test_sell_fills_once_price_reaches_limit() {
    let env = Env::default();
    env.mock_all_auths();
    set_sequence(&env, 100);

    let market = setup_market(&env);
    let (owner, id) = create_sell_order(&env, &market, 120, 10_000);

    move_price_to_tick(&env, &market, 180);

    let before_out = balance(&env, &market.token1, &owner);
    let wake = market.orders.check_and_execute();

    let order = market.orders.get_limit_order(&id);
    assert!(order.filled);
    assert_eq!(market.orders.get_active_count(), 0);

    // Output lands with the owner, escrow is gone
    assert!(balance(&env, &market.token1, &owner) > before_out);
    assert_eq!(balance(&env, &market.token0, &market.orders.address), 0);

    // Nothing live: scheduler sleeps
    assert!(!wake.armed);
    assert!(!market.orders.get_trigger_state().armed);
}

#[test]
fn test_buy_fills_once_price_drops_to_limit() {
    let env = Env::default();
    env.mock_all_auths();
    set_sequence(&env, 100);

    let market = setup_market(&env);
    let (owner, id) = create_buy_order(&env, &market, -120, 10_000);

    // Not yet
    market.orders.check_and_execute();
    assert!(!market.orders.get_limit_order(&id).filled);

    move_price_to_tick(&env, &market, -180);

    let before_out = balance(&env, &market.token0, &owner);
    market.orders.check_and_execute();

    assert!(market.orders.get_limit_order(&id).filled);
    assert!(balance(&env, &market.token0, &owner) > before_out);
}

#[test]
fn test_only_eligible_orders_fill() {
    let env = Env::default();
    env.mock_all_auths();
    set_sequence(&env, 100);

    let market = setup_market(&env);
    let (_, near) = create_sell_order(&env, &market, 120, 10_000);
    let (_, far) = create_sell_order(&env, &market, 3000, 10_000);

    move_price_to_tick(&env, &market, 180);
    let wake = market.orders.check_and_execute();

    assert!(market.orders.get_limit_order(&near).filled);
    assert!(!market.orders.get_limit_order(&far).filled);
    assert_eq!(market.orders.get_active_count(), 1);

    // Work remains: re-armed for the next ledger
    assert!(wake.armed);
    assert_eq!(wake.target_ledger, 101);
}

#[test]
fn test_cancel_refunds_escrow() {
    let env = Env::default();
    env.mock_all_auths();
    set_sequence(&env, 100);

    let market = setup_market(&env);
    let (owner, id) = create_sell_order(&env, &market, 120, 10_000);

    market.orders.cancel_limit_order(&id);

    assert_eq!(balance(&env, &market.token0, &owner), 1_000_000_000);
    assert_eq!(market.orders.get_active_count(), 0);
    assert!(market.orders.get_limit_order(&id).cancelled);

    // Next pass finds nothing and disarms
    let wake = market.orders.check_and_execute();
    assert!(!wake.armed);
}

#[test]
#[should_panic(expected = "Error(Contract, #3201)")]
fn test_cancel_twice_fails() {
    let env = Env::default();
    env.mock_all_auths();
    set_sequence(&env, 100);

    let market = setup_market(&env);
    let (_, id) = create_sell_order(&env, &market, 120, 10_000);

    market.orders.cancel_limit_order(&id);
    market.orders.cancel_limit_order(&id);
}

#[test]
#[should_panic(expected = "Error(Contract, #3201)")]
fn test_cancel_filled_order_fails() {
    let env = Env::default();
    env.mock_all_auths();
    set_sequence(&env, 100);

    let market = setup_market(&env);
    let (_, id) = create_sell_order(&env, &market, 120, 10_000);

    move_price_to_tick(&env, &market, 180);
    market.orders.check_and_execute();

    market.orders.cancel_limit_order(&id);
}

#[test]
fn test_expired_order_swept_and_refunded() {
    let env = Env::default();
    env.mock_all_auths();
    set_sequence(&env, 100);

    let market = setup_market(&env);
    let (owner, id) = create_sell_order(&env, &market, 120, 150);

    set_sequence(&env, 150);
    let wake = market.orders.check_and_execute();

    let order = market.orders.get_limit_order(&id);
    assert!(order.cancelled);
    assert!(!order.filled);
    assert_eq!(balance(&env, &market.token0, &owner), 1_000_000_000);
    assert_eq!(market.orders.get_active_count(), 0);
    assert!(!wake.armed);
}

#[test]
fn test_terminal_order_keeps_amounts_frozen() {
    let env = Env::default();
    env.mock_all_auths();
    set_sequence(&env, 100);

    let market = setup_market(&env);
    let (owner, id) = create_sell_order(&env, &market, 120, 10_000);

    market.orders.cancel_limit_order(&id);
    let after_cancel = balance(&env, &market.token0, &owner);

    // Further passes never touch a terminal record
    move_price_to_tick(&env, &market, 180);
    market.orders.check_and_execute();
    market.orders.check_and_execute();

    let order = market.orders.get_limit_order(&id);
    assert!(order.cancelled);
    assert_eq!(order.amount_in, AMOUNT_IN);
    assert_eq!(balance(&env, &market.token0, &owner), after_cancel);
}

#[test]
fn test_missing_pool_skips_entry() {
    let env = Env::default();
    env.mock_all_auths();
    set_sequence(&env, 100);

    let market = setup_market(&env);
    let owner = Address::generate(&env);
    mint_tokens(&env, &market.token0, &owner, 1_000_000_000);

    // No pool registered for this fee tier
    let id = market.orders.create_limit_order(
        &owner,
        &market.token0,
        &market.token1,
        &500u32,
        &AMOUNT_IN,
        &0i128,
        &get_sqrt_ratio_at_tick(120),
        &OrderSide::Sell,
        &10_000u32,
    );

    let wake = market.orders.check_and_execute();

    // Entry stays live and is retried next ledger
    assert_eq!(market.orders.get_active_count(), 1);
    assert!(!market.orders.get_limit_order(&id).filled);
    assert!(wake.armed);
}

#[test]
#[should_panic(expected = "Error(Contract, #3100)")]
fn test_create_identical_tokens_fails() {
    let env = Env::default();
    env.mock_all_auths();
    set_sequence(&env, 100);

    let market = setup_market(&env);
    let owner = Address::generate(&env);

    market.orders.create_limit_order(
        &owner,
        &market.token0,
        &market.token0,
        &FEE_PPM,
        &AMOUNT_IN,
        &0i128,
        &get_sqrt_ratio_at_tick(120),
        &OrderSide::Sell,
        &10_000u32,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #3101)")]
fn test_create_zero_amount_fails() {
    let env = Env::default();
    env.mock_all_auths();
    set_sequence(&env, 100);

    let market = setup_market(&env);
    let owner = Address::generate(&env);

    market.orders.create_limit_order(
        &owner,
        &market.token0,
        &market.token1,
        &FEE_PPM,
        &0i128,
        &0i128,
        &get_sqrt_ratio_at_tick(120),
        &OrderSide::Sell,
        &10_000u32,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #3103)")]
fn test_create_past_expiry_fails() {
    let env = Env::default();
    env.mock_all_auths();
    set_sequence(&env, 100);

    let market = setup_market(&env);
    let owner = Address::generate(&env);
    mint_tokens(&env, &market.token0, &owner, 1_000_000_000);

    market.orders.create_limit_order(
        &owner,
        &market.token0,
        &market.token1,
        &FEE_PPM,
        &AMOUNT_IN,
        &0i128,
        &get_sqrt_ratio_at_tick(120),
        &OrderSide::Sell,
        &100u32,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #3104)")]
fn test_create_side_against_token_order_fails() {
    let env = Env::default();
    env.mock_all_auths();
    set_sequence(&env, 100);

    let market = setup_market(&env);
    let owner = Address::generate(&env);
    mint_tokens(&env, &market.token1, &owner, 1_000_000_000);

    // Selling token1 for token0 is a buy of token0, not a sell
    market.orders.create_limit_order(
        &owner,
        &market.token1,
        &market.token0,
        &FEE_PPM,
        &AMOUNT_IN,
        &0i128,
        &get_sqrt_ratio_at_tick(-120),
        &OrderSide::Sell,
        &10_000u32,
    );
}
