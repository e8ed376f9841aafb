// SPDX-License-Identifier: MIT
// Q64.64 fixed-point arithmetic

use crate::constants::Q64;
use soroban_sdk::{Env, U256};

pub const ONE_X64: u128 = Q64;

#[inline]
pub fn i128_to_u128_safe(x: i128) -> u128 {
    if x <= 0 {
        0
    } else {
        x as u128
    }
}

#[inline]
pub fn u128_to_i128_saturating(x: u128) -> i128 {
    if x > i128::MAX as u128 {
        i128::MAX
    } else {
        x as i128
    }
}

/// Multiply two Q64.64 numbers, returning a Q64.64 result.
/// Splits into 64-bit halves to avoid intermediate overflow.
#[inline]
pub fn mul_q64(a: u128, b: u128) -> u128 {
    let a_hi = a >> 64;
    let a_lo = a & 0xFFFFFFFFFFFFFFFF;
    let b_hi = b >> 64;
    let b_lo = b & 0xFFFFFFFFFFFFFFFF;

    (a_hi.wrapping_mul(b_hi) << 64)
        .wrapping_add(a_hi.wrapping_mul(b_lo))
        .wrapping_add(a_lo.wrapping_mul(b_hi))
        .wrapping_add(a_lo.wrapping_mul(b_lo) >> 64)
}

/// Divide in Q64.64 format: (a << 64) / b, saturating on division by zero.
/// Large numerators go through U256 so no precision is lost.
#[inline]
pub fn div_q64(env: &Env, a: u128, b: u128) -> u128 {
    if b == 0 {
        return u128::MAX;
    }

    if a <= (u128::MAX >> 64) {
        return (a << 64) / b;
    }

    mul_div(env, a, Q64, b)
}

/// (a * b) / denominator via U256 so the intermediate product cannot overflow
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        panic!("mul_div: divide by zero");
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let result = product.div(&U256::from_u128(env, denominator));

    result.to_u128().unwrap_or(u128::MAX)
}

/// Integer division rounding toward positive infinity
#[inline]
pub fn div_round_up(numerator: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        return 0;
    }
    let result = numerator / denominator;
    if numerator % denominator != 0 {
        result.saturating_add(1)
    } else {
        result
    }
}
