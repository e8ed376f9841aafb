// SPDX-License-Identifier: MIT
// Tick <-> sqrt price conversions and the single-step swap output

use crate::constants::{MAX_TICK, MIN_TICK, Q64};
use crate::q64::{i128_to_u128_safe, mul_div, mul_q64, u128_to_i128_saturating, ONE_X64};
use soroban_sdk::Env;

/// Convert a tick to its sqrt price in Q64.64 format.
///
/// Uses the geometric relationship sqrt(1.0001^tick) * 2^64, evaluated by
/// binary decomposition of |tick| over precomputed sqrt(1.0001^(2^n))
/// constants.
pub fn get_sqrt_ratio_at_tick(tick: i32) -> u128 {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        panic!("tick out of range");
    }

    if tick == 0 {
        return ONE_X64;
    }

    let abs_tick = tick.unsigned_abs();
    let mut ratio: u128 = ONE_X64;

    // floor(sqrt(1.0001^(2^n)) * 2^64) for n = 0..=18, covering the whole
    // |tick| <= 443636 range; exact values keep bit carries strictly increasing
    if abs_tick & 0x1 != 0 {
        ratio = mul_q64(ratio, 18447666387855959850);
    }
    if abs_tick & 0x2 != 0 {
        ratio = mul_q64(ratio, 18448588748116922571);
    }
    if abs_tick & 0x4 != 0 {
        ratio = mul_q64(ratio, 18450433606991734263);
    }
    if abs_tick & 0x8 != 0 {
        ratio = mul_q64(ratio, 18454123878217468680);
    }
    if abs_tick & 0x10 != 0 {
        ratio = mul_q64(ratio, 18461506635090006701);
    }
    if abs_tick & 0x20 != 0 {
        ratio = mul_q64(ratio, 18476281010653910144);
    }
    if abs_tick & 0x40 != 0 {
        ratio = mul_q64(ratio, 18505865242158250041);
    }
    if abs_tick & 0x80 != 0 {
        ratio = mul_q64(ratio, 18565175891880433522);
    }
    if abs_tick & 0x100 != 0 {
        ratio = mul_q64(ratio, 18684368066214940582);
    }
    if abs_tick & 0x200 != 0 {
        ratio = mul_q64(ratio, 18925053041275764671);
    }
    if abs_tick & 0x400 != 0 {
        ratio = mul_q64(ratio, 19415764168677886926);
    }
    if abs_tick & 0x800 != 0 {
        ratio = mul_q64(ratio, 20435687552633177494);
    }
    if abs_tick & 0x1000 != 0 {
        ratio = mul_q64(ratio, 22639080592224303007);
    }
    if abs_tick & 0x2000 != 0 {
        ratio = mul_q64(ratio, 27784196929998399742);
    }
    if abs_tick & 0x4000 != 0 {
        ratio = mul_q64(ratio, 41848122137994986128);
    }
    if abs_tick & 0x8000 != 0 {
        ratio = mul_q64(ratio, 94936283578220370716);
    }
    if abs_tick & 0x10000 != 0 {
        ratio = mul_q64(ratio, 488590176327622479860);
    }
    if abs_tick & 0x20000 != 0 {
        ratio = mul_q64(ratio, 12941056668319229769860);
    }
    if abs_tick & 0x40000 != 0 {
        ratio = mul_q64(ratio, 9078618265828848800676189);
    }

    if tick < 0 {
        if ratio == 0 {
            return u128::MAX;
        }
        // 2^128 / ratio, with the numerator saturated to u128::MAX
        ratio = u128::MAX / ratio;
    }

    ratio
}

/// Inverse of `get_sqrt_ratio_at_tick`: the greatest tick whose sqrt ratio
/// is <= the given price. Exact inverse over the supported tick range.
pub fn get_tick_at_sqrt_ratio(sqrt_price_x64: u128) -> i32 {
    if sqrt_price_x64 == 0 {
        panic!("sqrt price must be positive");
    }

    if get_sqrt_ratio_at_tick(MIN_TICK) > sqrt_price_x64 {
        return MIN_TICK;
    }

    // get_sqrt_ratio_at_tick is strictly increasing, so binary search for
    // the greatest tick not exceeding the target.
    let mut lo = MIN_TICK;
    let mut hi = MAX_TICK;
    while lo < hi {
        let mid = (lo + hi + 1) >> 1;
        if get_sqrt_ratio_at_tick(mid) <= sqrt_price_x64 {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

/// Single-step swap output at the current spot price.
///
/// The pool performs one constant-ratio step: for token0 -> token1 the
/// output is input * price, for token1 -> token0 it is input / price,
/// where price = (sqrt_price / 2^64)^2. No tick traversal happens here;
/// the caller moves the price to its limit separately.
pub fn compute_swap_output(
    env: &Env,
    sqrt_price_x64: u128,
    amount_in_after_fee: i128,
    zero_for_one: bool,
) -> i128 {
    if amount_in_after_fee <= 0 || sqrt_price_x64 == 0 {
        return 0;
    }

    let amount_u = i128_to_u128_safe(amount_in_after_fee);
    let price_q64 = mul_q64(sqrt_price_x64, sqrt_price_x64);

    let out = if zero_for_one {
        mul_div(env, amount_u, price_q64, Q64)
    } else {
        if price_q64 == 0 {
            return 0;
        }
        mul_div(env, amount_u, Q64, price_q64)
    };

    u128_to_i128_saturating(out)
}

/// Check that a tick lies on the pool's spacing grid
#[inline]
pub fn is_tick_aligned(tick: i32, spacing: i32) -> bool {
    spacing > 0 && tick % spacing == 0
}

/// Snap a tick down to the nearest spacing multiple
pub fn snap_tick_to_spacing(tick: i32, spacing: i32) -> i32 {
    if spacing <= 0 {
        panic!("tick spacing must be positive");
    }
    tick - tick.rem_euclid(spacing)
}
