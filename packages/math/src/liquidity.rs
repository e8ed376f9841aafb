// SPDX-License-Identifier: MIT
// Liquidity <-> token amount conversions

use crate::q64::{div_q64, div_round_up, i128_to_u128_safe, mul_q64, u128_to_i128_saturating};
use soroban_sdk::Env;

/// Token0 amount for a liquidity over a sqrt price interval:
/// L * (sqrt_upper - sqrt_lower) / (sqrt_upper * sqrt_lower)
pub fn get_amount_0_delta(
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> u128 {
    let (sqrt_lower, sqrt_upper) = if sqrt_price_a < sqrt_price_b {
        (sqrt_price_a, sqrt_price_b)
    } else {
        (sqrt_price_b, sqrt_price_a)
    };

    let delta = sqrt_upper.saturating_sub(sqrt_lower);
    let product = mul_q64(sqrt_upper, sqrt_lower);

    if product == 0 {
        return 0;
    }

    let numerator = liquidity.saturating_mul(delta);

    if round_up {
        div_round_up(numerator, product)
    } else {
        numerator / product
    }
}

/// Token1 amount for a liquidity over a sqrt price interval:
/// L * (sqrt_upper - sqrt_lower) / 2^64
pub fn get_amount_1_delta(
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> u128 {
    let (sqrt_lower, sqrt_upper) = if sqrt_price_a < sqrt_price_b {
        (sqrt_price_a, sqrt_price_b)
    } else {
        (sqrt_price_b, sqrt_price_a)
    };

    let delta = sqrt_upper.saturating_sub(sqrt_lower);
    let product = liquidity.saturating_mul(delta);

    if round_up && product & 0xFFFFFFFFFFFFFFFF != 0 {
        (product >> 64) + 1
    } else {
        product >> 64
    }
}

/// Token amounts owed for a liquidity delta, split geometrically around
/// the current price: entirely token0 below the range, entirely token1
/// above it, and the standard geometric split inside it.
pub fn get_amounts_for_liquidity(
    _env: &Env,
    liquidity: i128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    current_sqrt_price: u128,
) -> (i128, i128) {
    if liquidity <= 0 {
        return (0, 0);
    }

    let liq_u = i128_to_u128_safe(liquidity);

    let sp = current_sqrt_price
        .max(sqrt_price_lower)
        .min(sqrt_price_upper);

    let amount0 = if sp < sqrt_price_upper {
        get_amount_0_delta(sp, sqrt_price_upper, liq_u, false)
    } else {
        0
    };

    let amount1 = if sp > sqrt_price_lower {
        get_amount_1_delta(sqrt_price_lower, sp, liq_u, false)
    } else {
        0
    };

    (
        u128_to_i128_saturating(amount0),
        u128_to_i128_saturating(amount1),
    )
}

/// Liquidity obtainable from a token0 amount over a price interval
pub fn get_liquidity_for_amount0(
    amount0: i128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
) -> i128 {
    if amount0 <= 0 || sqrt_price_lower >= sqrt_price_upper {
        return 0;
    }

    let amt_u = i128_to_u128_safe(amount0);
    let product = mul_q64(sqrt_price_upper, sqrt_price_lower);
    let denominator = sqrt_price_upper.saturating_sub(sqrt_price_lower);

    if denominator == 0 {
        return 0;
    }
    u128_to_i128_saturating(amt_u.saturating_mul(product) / denominator)
}

/// Liquidity obtainable from a token1 amount over a price interval
pub fn get_liquidity_for_amount1(
    env: &Env,
    amount1: i128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
) -> i128 {
    if amount1 <= 0 || sqrt_price_lower >= sqrt_price_upper {
        return 0;
    }

    let amt_u = i128_to_u128_safe(amount1);
    let diff = sqrt_price_upper.saturating_sub(sqrt_price_lower);

    if diff == 0 {
        return 0;
    }
    u128_to_i128_saturating(div_q64(env, amt_u, diff))
}

/// Maximum liquidity fundable by both desired amounts at the current price
pub fn get_liquidity_for_amounts(
    env: &Env,
    amount0_desired: i128,
    amount1_desired: i128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    current_sqrt_price: u128,
) -> i128 {
    if sqrt_price_lower >= sqrt_price_upper {
        return 0;
    }

    if current_sqrt_price <= sqrt_price_lower {
        get_liquidity_for_amount0(amount0_desired, sqrt_price_lower, sqrt_price_upper)
    } else if current_sqrt_price >= sqrt_price_upper {
        get_liquidity_for_amount1(env, amount1_desired, sqrt_price_lower, sqrt_price_upper)
    } else {
        let liq0 = get_liquidity_for_amount0(amount0_desired, current_sqrt_price, sqrt_price_upper);
        let liq1 =
            get_liquidity_for_amount1(env, amount1_desired, sqrt_price_lower, current_sqrt_price);
        liq0.min(liq1)
    }
}
