#![no_std]

//! # Tideswap Pool
//!
//! Concentrated-liquidity pool over a sorted token pair. Liquidity lives in
//! tick-bounded positions; swaps are single-step at the spot price with the
//! caller-supplied sqrt price limit becoming the post-swap price, so the
//! order schedulers act as the effective price setters within their bounds.
//!
//! ## Functions:
//! - Write (6): initialize, mint, add_liquidity, burn, swap, collect, collect_protocol
//! - Read (9): get_pool_state, get_pool_config, get_snapshot, get_sqrt_price,
//!   get_tick, get_liquidity, get_tick_info, get_position, is_initialized

use soroban_sdk::{contract, contractimpl, token, Address, Env};

use tideswap_math::{
    compute_swap_output,
    constants::{
        FEE_DENOMINATOR, MAX_FEE_PPM, MAX_PROTOCOL_FEE_PPM, MAX_SQRT_PRICE, MAX_TICK,
        MAX_TICK_SEARCH_STEPS, MIN_LIQUIDITY, MIN_SQRT_PRICE, MIN_TICK, Q64,
    },
    get_amount_0_delta, get_amount_1_delta, get_amounts_for_liquidity, get_liquidity_for_amounts,
    get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio, i128_to_u128_safe, mul_div,
    snap_tick_to_spacing, u128_to_i128_saturating,
};
use tideswap_order_core::ReentrancyGuard;
use tideswap_position::{
    calculate_pending_fees, clear_fees, modify_position, update_position,
    validate_position_params,
};
use tideswap_tick::{cross_tick, find_next_initialized_tick, get_fee_growth_inside, update_tick};

mod error;
mod events;
mod storage;
pub mod types;

use error::ErrorMsg;
use events::*;
use storage::*;
use types::{PoolConfig, PoolSnapshot, PoolState, PositionInfo, SwapResult, TickInfo};

#[contract]
pub struct TideswapPool;

#[contractimpl]
impl TideswapPool {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize the pool.
    ///
    /// `sqrt_price_x64 = 0` selects the 1:1 default price (tick 0). Tokens
    /// are stored sorted; callers may pass them in either order.
    pub fn initialize(
        env: Env,
        admin: Address,
        token_a: Address,
        token_b: Address,
        fee_ppm: u32,
        protocol_fee_ppm: u32,
        sqrt_price_x64: u128,
        tick_spacing: i32,
    ) {
        admin.require_auth();

        if is_initialized(&env) {
            panic!("{}", ErrorMsg::ALREADY_INITIALIZED);
        }

        if token_a == token_b {
            panic!("{}", ErrorMsg::INVALID_TOKEN_PAIR);
        }

        if fee_ppm == 0 || fee_ppm > MAX_FEE_PPM {
            panic!("{}", ErrorMsg::INVALID_FEE);
        }

        if protocol_fee_ppm > MAX_PROTOCOL_FEE_PPM {
            panic!("{}", ErrorMsg::INVALID_PROTOCOL_FEE);
        }

        if tick_spacing <= 0 {
            panic!("{}", ErrorMsg::INVALID_TICK_SPACING);
        }

        let initial_price = if sqrt_price_x64 == 0 {
            get_sqrt_ratio_at_tick(0)
        } else {
            sqrt_price_x64
        };

        if initial_price < get_sqrt_ratio_at_tick(MIN_TICK)
            || initial_price > get_sqrt_ratio_at_tick(MAX_TICK)
        {
            panic!("{}", ErrorMsg::INVALID_INITIAL_PRICE);
        }

        let current_tick = get_tick_at_sqrt_ratio(initial_price);

        let (token0, token1) = if token_a < token_b {
            (token_a.clone(), token_b.clone())
        } else {
            (token_b.clone(), token_a.clone())
        };

        let config = PoolConfig {
            admin,
            token_a,
            token_b,
            fee_ppm,
            protocol_fee_ppm,
        };
        write_pool_config(&env, &config);

        let state = PoolState {
            sqrt_price_x64: initial_price,
            current_tick,
            liquidity: 0,
            tick_spacing,
            token0: token0.clone(),
            token1: token1.clone(),
            fee_growth_global_0: 0,
            fee_growth_global_1: 0,
            protocol_fees_0: 0,
            protocol_fees_1: 0,
        };
        write_pool_state(&env, &state);
        set_initialized(&env);

        emit_initialized(
            &env,
            &token0,
            &token1,
            fee_ppm,
            tick_spacing,
            initial_price,
            current_tick,
        );
    }

    // ========================================================
    // LIQUIDITY
    // ========================================================

    /// Mint liquidity into a tick range for `recipient`.
    ///
    /// Ticks must be aligned to the pool's spacing; misalignment is an
    /// error, not a snap. Pulls both token amounts from `sender` and
    /// returns them.
    pub fn mint(
        env: Env,
        sender: Address,
        recipient: Address,
        lower_tick: i32,
        upper_tick: i32,
        liquidity_delta: i128,
    ) -> (i128, i128) {
        sender.require_auth();
        let _guard = ReentrancyGuard::lock(&env);

        if !is_initialized(&env) {
            panic!("{}", ErrorMsg::NOT_INITIALIZED);
        }

        let state = read_pool_state(&env);
        if let Err(msg) = validate_position_params(lower_tick, upper_tick, state.tick_spacing) {
            panic!("{}", msg);
        }
        if liquidity_delta <= 0 {
            panic!("{}", ErrorMsg::INVALID_LIQUIDITY_AMOUNT);
        }

        let (amount0, amount1) =
            Self::apply_mint(&env, &recipient, lower_tick, upper_tick, liquidity_delta);

        let pool_addr = env.current_contract_address();
        if amount0 > 0 {
            token::Client::new(&env, &state.token0).transfer(&sender, &pool_addr, &amount0);
        }
        if amount1 > 0 {
            token::Client::new(&env, &state.token1).transfer(&sender, &pool_addr, &amount1);
        }

        emit_mint(
            &env,
            &recipient,
            lower_tick,
            upper_tick,
            liquidity_delta,
            amount0,
            amount1,
        );

        (amount0, amount1)
    }

    /// Amount-based convenience entry point: computes the largest liquidity
    /// both desired amounts can fund at the current price, snapping ticks to
    /// the spacing grid.
    pub fn add_liquidity(
        env: Env,
        owner: Address,
        lower_tick: i32,
        upper_tick: i32,
        amount0_desired: i128,
        amount1_desired: i128,
        amount0_min: i128,
        amount1_min: i128,
    ) -> (i128, i128, i128) {
        owner.require_auth();
        let _guard = ReentrancyGuard::lock(&env);

        if !is_initialized(&env) {
            panic!("{}", ErrorMsg::NOT_INITIALIZED);
        }

        let state = read_pool_state(&env);
        let lower = snap_tick_to_spacing(lower_tick, state.tick_spacing);
        let upper = snap_tick_to_spacing(upper_tick, state.tick_spacing);

        if lower >= upper {
            panic!("{}", ErrorMsg::INVALID_TICK_RANGE);
        }

        let liquidity = get_liquidity_for_amounts(
            &env,
            amount0_desired,
            amount1_desired,
            get_sqrt_ratio_at_tick(lower),
            get_sqrt_ratio_at_tick(upper),
            state.sqrt_price_x64,
        );

        if liquidity < MIN_LIQUIDITY {
            panic!("{}", ErrorMsg::LIQUIDITY_TOO_LOW);
        }

        let (amount0, amount1) = Self::apply_mint(&env, &owner, lower, upper, liquidity);

        if (amount0_min > 0 || amount1_min > 0) && (amount0 < amount0_min || amount1 < amount1_min)
        {
            panic!("{}", ErrorMsg::SLIPPAGE_EXCEEDED);
        }

        let pool_addr = env.current_contract_address();
        if amount0 > 0 {
            token::Client::new(&env, &state.token0).transfer(&owner, &pool_addr, &amount0);
        }
        if amount1 > 0 {
            token::Client::new(&env, &state.token1).transfer(&owner, &pool_addr, &amount1);
        }

        emit_add_liquidity(&env, &owner, liquidity, amount0, amount1);

        (liquidity, amount0, amount1)
    }

    /// Burn liquidity from the sender's position.
    ///
    /// The withdrawn amounts accrue to `tokens_owed_*` rather than being
    /// pushed; `collect` pays them out.
    pub fn burn(
        env: Env,
        sender: Address,
        lower_tick: i32,
        upper_tick: i32,
        liquidity_delta: i128,
    ) -> (i128, i128) {
        sender.require_auth();
        let _guard = ReentrancyGuard::lock(&env);

        if !is_initialized(&env) {
            panic!("{}", ErrorMsg::NOT_INITIALIZED);
        }

        let mut state = read_pool_state(&env);
        if let Err(msg) = validate_position_params(lower_tick, upper_tick, state.tick_spacing) {
            panic!("{}", msg);
        }
        if liquidity_delta <= 0 {
            panic!("{}", ErrorMsg::INVALID_LIQUIDITY_AMOUNT);
        }
        if !position_exists(&env, &sender, lower_tick, upper_tick) {
            panic!("{}", ErrorMsg::POSITION_NOT_FOUND);
        }

        let mut pos = read_position(&env, &sender, lower_tick, upper_tick);
        if pos.liquidity < liquidity_delta {
            panic!("{}", ErrorMsg::INSUFFICIENT_LIQUIDITY);
        }

        // Settle fees and burn before the ticks forget this position
        let (inside_0, inside_1) = get_fee_growth_inside(
            &env,
            |e, t| read_tick_info(e, t),
            lower_tick,
            upper_tick,
            state.current_tick,
            state.fee_growth_global_0,
            state.fee_growth_global_1,
        );
        modify_position(&mut pos, -liquidity_delta, inside_0, inside_1);

        let (amount0, amount1) = get_amounts_for_liquidity(
            &env,
            liquidity_delta,
            get_sqrt_ratio_at_tick(lower_tick),
            get_sqrt_ratio_at_tick(upper_tick),
            state.sqrt_price_x64,
        );

        pos.tokens_owed_0 = pos.tokens_owed_0.saturating_add(amount0 as u128);
        pos.tokens_owed_1 = pos.tokens_owed_1.saturating_add(amount1 as u128);
        write_position(&env, &sender, lower_tick, upper_tick, &pos);

        let now = env.ledger().timestamp();
        update_tick(
            &env,
            |e, t| read_tick_info(e, t),
            |e, t, info| write_tick_info(e, t, info),
            lower_tick,
            state.current_tick,
            -liquidity_delta,
            state.fee_growth_global_0,
            state.fee_growth_global_1,
            now,
            false,
        );
        update_tick(
            &env,
            |e, t| read_tick_info(e, t),
            |e, t, info| write_tick_info(e, t, info),
            upper_tick,
            state.current_tick,
            -liquidity_delta,
            state.fee_growth_global_0,
            state.fee_growth_global_1,
            now,
            true,
        );

        if state.current_tick >= lower_tick && state.current_tick < upper_tick {
            state.liquidity = state.liquidity.saturating_sub(liquidity_delta);
        }
        write_pool_state(&env, &state);

        emit_burn(
            &env,
            &sender,
            lower_tick,
            upper_tick,
            liquidity_delta,
            amount0,
            amount1,
        );

        (amount0, amount1)
    }

    // ========================================================
    // SWAP
    // ========================================================

    /// Exact-input swap.
    ///
    /// Takes the fee off the input, produces output at the spot price, then
    /// moves the pool price to `sqrt_price_limit_x64`, crossing any
    /// initialized ticks on the way so active liquidity stays consistent.
    /// The limit must sit strictly past the current price for the chosen
    /// direction, and the swap aborts when the output exceeds what the
    /// liquidity between here and the limit can pay.
    pub fn swap(
        env: Env,
        sender: Address,
        recipient: Address,
        zero_for_one: bool,
        amount_specified: i128,
        sqrt_price_limit_x64: u128,
        min_amount_out: i128,
    ) -> SwapResult {
        sender.require_auth();
        let _guard = ReentrancyGuard::lock(&env);

        if !is_initialized(&env) {
            panic!("{}", ErrorMsg::NOT_INITIALIZED);
        }

        if amount_specified < 0 {
            panic!("{}", ErrorMsg::EXACT_OUTPUT_UNSUPPORTED);
        }
        if amount_specified == 0 {
            panic!("{}", ErrorMsg::INVALID_AMOUNT);
        }

        let config = read_pool_config(&env);
        let mut state = read_pool_state(&env);

        if zero_for_one {
            if sqrt_price_limit_x64 < MIN_SQRT_PRICE
                || sqrt_price_limit_x64 >= state.sqrt_price_x64
            {
                panic!("{}", ErrorMsg::INVALID_PRICE_LIMIT);
            }
        } else if sqrt_price_limit_x64 > MAX_SQRT_PRICE
            || sqrt_price_limit_x64 <= state.sqrt_price_x64
        {
            panic!("{}", ErrorMsg::INVALID_PRICE_LIMIT);
        }

        // Fee off the input; the protocol share is carved out of the fee
        let fee_amount = amount_specified.saturating_mul(config.fee_ppm as i128) / FEE_DENOMINATOR;
        let protocol_fee =
            fee_amount.saturating_mul(config.protocol_fee_ppm as i128) / FEE_DENOMINATOR;
        let lp_fee = fee_amount - protocol_fee;
        let amount_after_fee = amount_specified - fee_amount;

        let amount_out =
            compute_swap_output(&env, state.sqrt_price_x64, amount_after_fee, zero_for_one);

        if amount_out < min_amount_out {
            panic!("{}", ErrorMsg::SLIPPAGE_EXCEEDED);
        }

        // LP fees accrue per unit of active liquidity, in the input token
        if state.liquidity > 0 && lp_fee > 0 {
            let growth = mul_div(&env, lp_fee as u128, Q64, state.liquidity as u128);
            if zero_for_one {
                state.fee_growth_global_0 = state.fee_growth_global_0.wrapping_add(growth);
            } else {
                state.fee_growth_global_1 = state.fee_growth_global_1.wrapping_add(growth);
            }
        }
        if protocol_fee > 0 {
            if zero_for_one {
                state.protocol_fees_0 = state.protocol_fees_0.saturating_add(protocol_fee as u128);
            } else {
                state.protocol_fees_1 = state.protocol_fees_1.saturating_add(protocol_fee as u128);
            }
        }

        // The price lands exactly on the caller's limit; cross every
        // initialized tick between here and there, totalling how much of the
        // output token the traversed liquidity can pay out
        let new_tick = get_tick_at_sqrt_ratio(sqrt_price_limit_x64);
        let now = env.ledger().timestamp();

        let mut capacity: u128 = 0;
        let mut segment_price = state.sqrt_price_x64;

        // Start one spacing above so a boundary the price sits on is still
        // crossed when moving down through it
        let mut cursor = if zero_for_one {
            state.current_tick.saturating_add(state.tick_spacing)
        } else {
            state.current_tick
        };

        for _ in 0..MAX_TICK_SEARCH_STEPS {
            let next = find_next_initialized_tick(
                &env,
                |e, t| read_tick_info(e, t),
                cursor,
                state.tick_spacing,
                zero_for_one,
            );
            if next == cursor {
                break;
            }
            let crosses = if zero_for_one {
                next > new_tick
            } else {
                next <= new_tick
            };
            if !crosses {
                break;
            }

            // Liquidity is constant between crossings; each segment pays out
            // at most its geometric amount of the output token
            let boundary_price = get_sqrt_ratio_at_tick(next);
            let segment_liquidity = i128_to_u128_safe(state.liquidity);
            capacity = capacity.saturating_add(if zero_for_one {
                get_amount_1_delta(boundary_price, segment_price, segment_liquidity, false)
            } else {
                get_amount_0_delta(segment_price, boundary_price, segment_liquidity, false)
            });
            segment_price = boundary_price;

            let net = cross_tick(
                &env,
                |e, t| read_tick_info(e, t),
                |e, t, info| write_tick_info(e, t, info),
                next,
                state.fee_growth_global_0,
                state.fee_growth_global_1,
                now,
            );
            state.liquidity = if zero_for_one {
                state.liquidity.saturating_sub(net)
            } else {
                state.liquidity.saturating_add(net)
            };
            cursor = next;
        }

        // Last segment runs from the final crossed boundary to the limit
        let segment_liquidity = i128_to_u128_safe(state.liquidity);
        capacity = capacity.saturating_add(if zero_for_one {
            get_amount_1_delta(sqrt_price_limit_x64, segment_price, segment_liquidity, false)
        } else {
            get_amount_0_delta(segment_price, sqrt_price_limit_x64, segment_liquidity, false)
        });

        if amount_out > u128_to_i128_saturating(capacity) {
            panic!("{}", ErrorMsg::INSUFFICIENT_POOL_LIQUIDITY);
        }

        state.sqrt_price_x64 = sqrt_price_limit_x64;
        state.current_tick = new_tick;
        write_pool_state(&env, &state);

        let pool_addr = env.current_contract_address();
        let (token_in, token_out) = if zero_for_one {
            (&state.token0, &state.token1)
        } else {
            (&state.token1, &state.token0)
        };

        token::Client::new(&env, token_in).transfer(&sender, &pool_addr, &amount_specified);
        if amount_out > 0 {
            token::Client::new(&env, token_out).transfer(&pool_addr, &recipient, &amount_out);
        }

        emit_swap(
            &env,
            &sender,
            &recipient,
            zero_for_one,
            amount_specified,
            amount_out,
            state.sqrt_price_x64,
            state.current_tick,
        );

        SwapResult {
            amount_in: amount_specified,
            amount_out,
            sqrt_price_x64: state.sqrt_price_x64,
            current_tick: state.current_tick,
        }
    }

    // ========================================================
    // FEE COLLECTION
    // ========================================================

    /// Pay out up to the requested amounts of what the sender's position is
    /// owed. Settles pending fee growth first.
    pub fn collect(
        env: Env,
        sender: Address,
        recipient: Address,
        lower_tick: i32,
        upper_tick: i32,
        amount0_requested: u128,
        amount1_requested: u128,
    ) -> (u128, u128) {
        sender.require_auth();
        let _guard = ReentrancyGuard::lock(&env);

        if !is_initialized(&env) {
            panic!("{}", ErrorMsg::NOT_INITIALIZED);
        }

        if !position_exists(&env, &sender, lower_tick, upper_tick) {
            panic!("{}", ErrorMsg::POSITION_NOT_FOUND);
        }

        let state = read_pool_state(&env);
        let mut pos = read_position(&env, &sender, lower_tick, upper_tick);

        let (inside_0, inside_1) = get_fee_growth_inside(
            &env,
            |e, t| read_tick_info(e, t),
            lower_tick,
            upper_tick,
            state.current_tick,
            state.fee_growth_global_0,
            state.fee_growth_global_1,
        );
        update_position(&mut pos, inside_0, inside_1);

        let amount0 = amount0_requested.min(pos.tokens_owed_0);
        let amount1 = amount1_requested.min(pos.tokens_owed_1);

        clear_fees(&mut pos, amount0, amount1);
        write_position(&env, &sender, lower_tick, upper_tick, &pos);

        let pool_addr = env.current_contract_address();
        let transfer0 = u128_to_i128_saturating(amount0);
        let transfer1 = u128_to_i128_saturating(amount1);
        if transfer0 > 0 {
            token::Client::new(&env, &state.token0).transfer(&pool_addr, &recipient, &transfer0);
        }
        if transfer1 > 0 {
            token::Client::new(&env, &state.token1).transfer(&pool_addr, &recipient, &transfer1);
        }

        emit_collect(
            &env,
            &sender,
            &recipient,
            lower_tick,
            upper_tick,
            amount0,
            amount1,
        );

        (amount0, amount1)
    }

    /// Pay the accumulated protocol fee share to `recipient`. Admin only.
    pub fn collect_protocol(env: Env, recipient: Address) -> (u128, u128) {
        let config = read_pool_config(&env);
        config.admin.require_auth();
        let _guard = ReentrancyGuard::lock(&env);

        let mut state = read_pool_state(&env);

        let amount0 = state.protocol_fees_0;
        let amount1 = state.protocol_fees_1;
        state.protocol_fees_0 = 0;
        state.protocol_fees_1 = 0;
        write_pool_state(&env, &state);

        let pool_addr = env.current_contract_address();
        let transfer0 = u128_to_i128_saturating(amount0);
        let transfer1 = u128_to_i128_saturating(amount1);
        if transfer0 > 0 {
            token::Client::new(&env, &state.token0).transfer(&pool_addr, &recipient, &transfer0);
        }
        if transfer1 > 0 {
            token::Client::new(&env, &state.token1).transfer(&pool_addr, &recipient, &transfer1);
        }

        emit_collect_protocol(&env, &recipient, amount0, amount1);

        (amount0, amount1)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    pub fn get_pool_state(env: Env) -> PoolState {
        read_pool_state(&env)
    }

    pub fn get_pool_config(env: Env) -> PoolConfig {
        read_pool_config(&env)
    }

    /// Compact view for the order schedulers
    pub fn get_snapshot(env: Env) -> PoolSnapshot {
        let state = read_pool_state(&env);
        let config = read_pool_config(&env);
        PoolSnapshot {
            sqrt_price_x64: state.sqrt_price_x64,
            current_tick: state.current_tick,
            liquidity: state.liquidity,
            tick_spacing: state.tick_spacing,
            token0: state.token0,
            token1: state.token1,
            fee_ppm: config.fee_ppm,
        }
    }

    pub fn get_sqrt_price(env: Env) -> u128 {
        read_pool_state(&env).sqrt_price_x64
    }

    pub fn get_tick(env: Env) -> i32 {
        read_pool_state(&env).current_tick
    }

    pub fn get_liquidity(env: Env) -> i128 {
        read_pool_state(&env).liquidity
    }

    pub fn get_tick_info(env: Env, tick: i32) -> TickInfo {
        read_tick_info(&env, tick)
    }

    /// Position summary including pending (not yet settled) fees
    pub fn get_position(
        env: Env,
        owner: Address,
        lower_tick: i32,
        upper_tick: i32,
    ) -> PositionInfo {
        let state = read_pool_state(&env);
        let pos = read_position(&env, &owner, lower_tick, upper_tick);

        let (amount0, amount1) = get_amounts_for_liquidity(
            &env,
            pos.liquidity,
            get_sqrt_ratio_at_tick(lower_tick),
            get_sqrt_ratio_at_tick(upper_tick),
            state.sqrt_price_x64,
        );

        let (inside_0, inside_1) = get_fee_growth_inside(
            &env,
            |e, t| read_tick_info(e, t),
            lower_tick,
            upper_tick,
            state.current_tick,
            state.fee_growth_global_0,
            state.fee_growth_global_1,
        );
        let (pending_0, pending_1) = calculate_pending_fees(&pos, inside_0, inside_1);

        PositionInfo {
            liquidity: pos.liquidity,
            amount0,
            amount1,
            fees_owed_0: pos.tokens_owed_0.saturating_add(pending_0),
            fees_owed_1: pos.tokens_owed_1.saturating_add(pending_1),
        }
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    /// Shared mint path: tick updates, pool liquidity, position update and
    /// owed-amount computation. No transfers.
    fn apply_mint(
        env: &Env,
        recipient: &Address,
        lower_tick: i32,
        upper_tick: i32,
        liquidity_delta: i128,
    ) -> (i128, i128) {
        let mut state = read_pool_state(env);
        let now = env.ledger().timestamp();

        update_tick(
            env,
            |e, t| read_tick_info(e, t),
            |e, t, info| write_tick_info(e, t, info),
            lower_tick,
            state.current_tick,
            liquidity_delta,
            state.fee_growth_global_0,
            state.fee_growth_global_1,
            now,
            false,
        );
        update_tick(
            env,
            |e, t| read_tick_info(e, t),
            |e, t, info| write_tick_info(e, t, info),
            upper_tick,
            state.current_tick,
            liquidity_delta,
            state.fee_growth_global_0,
            state.fee_growth_global_1,
            now,
            true,
        );

        if state.current_tick >= lower_tick && state.current_tick < upper_tick {
            state.liquidity = state.liquidity.saturating_add(liquidity_delta);
        }
        write_pool_state(env, &state);

        let (inside_0, inside_1) = get_fee_growth_inside(
            env,
            |e, t| read_tick_info(e, t),
            lower_tick,
            upper_tick,
            state.current_tick,
            state.fee_growth_global_0,
            state.fee_growth_global_1,
        );

        let mut pos = read_position(env, recipient, lower_tick, upper_tick);
        modify_position(&mut pos, liquidity_delta, inside_0, inside_1);
        write_position(env, recipient, lower_tick, upper_tick, &pos);

        get_amounts_for_liquidity(
            env,
            liquidity_delta,
            get_sqrt_ratio_at_tick(lower_tick),
            get_sqrt_ratio_at_tick(upper_tick),
            state.sqrt_price_x64,
        )
    }
}
