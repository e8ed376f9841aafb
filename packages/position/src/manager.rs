// Position bookkeeping

use crate::types::Position;
use tideswap_math::constants::{MAX_TICK, MIN_TICK};

/// Credit accrued fees to a position and advance its checkpoints.
///
/// Fees owed since the last touch are liquidity * (inside - last_inside),
/// with the growth delta taken by wrapping subtraction. Checkpoints always
/// advance, even for an empty position.
pub fn update_position(pos: &mut Position, fee_growth_inside_0: u128, fee_growth_inside_1: u128) {
    if pos.liquidity > 0 {
        let liquidity_u = pos.liquidity as u128;

        let delta_0 = fee_growth_inside_0.wrapping_sub(pos.fee_growth_inside_last_0);
        let delta_1 = fee_growth_inside_1.wrapping_sub(pos.fee_growth_inside_last_1);

        let fee_0 = liquidity_u
            .checked_mul(delta_0)
            .map(|product| product >> 64)
            .unwrap_or(0);

        let fee_1 = liquidity_u
            .checked_mul(delta_1)
            .map(|product| product >> 64)
            .unwrap_or(0);

        pos.tokens_owed_0 = pos.tokens_owed_0.saturating_add(fee_0);
        pos.tokens_owed_1 = pos.tokens_owed_1.saturating_add(fee_1);
    }

    pos.fee_growth_inside_last_0 = fee_growth_inside_0;
    pos.fee_growth_inside_last_1 = fee_growth_inside_1;
}

/// Apply a liquidity delta to a position.
///
/// Fees are settled against the current inside growth first so the delta
/// never earns or loses growth it was not present for. Removing more
/// liquidity than the position holds is a caller bug and panics.
pub fn modify_position(
    pos: &mut Position,
    liquidity_delta: i128,
    fee_growth_inside_0: u128,
    fee_growth_inside_1: u128,
) {
    update_position(pos, fee_growth_inside_0, fee_growth_inside_1);

    let new_liquidity = match pos.liquidity.checked_add(liquidity_delta) {
        Some(liq) => liq,
        None => panic!("position liquidity overflow"),
    };
    if new_liquidity < 0 {
        panic!("insufficient position liquidity");
    }
    pos.liquidity = new_liquidity;
}

#[inline]
pub fn has_liquidity(pos: &Position) -> bool {
    pos.liquidity > 0
}

#[inline]
pub fn has_uncollected_fees(pos: &Position) -> bool {
    pos.tokens_owed_0 > 0 || pos.tokens_owed_1 > 0
}

/// An empty position can be deleted from storage
#[inline]
pub fn is_empty(pos: &Position) -> bool {
    pos.liquidity == 0 && pos.tokens_owed_0 == 0 && pos.tokens_owed_1 == 0
}

/// Deduct collected fees from what the position is owed
pub fn clear_fees(pos: &mut Position, amount0: u128, amount1: u128) {
    pos.tokens_owed_0 = pos.tokens_owed_0.saturating_sub(amount0);
    pos.tokens_owed_1 = pos.tokens_owed_1.saturating_sub(amount1);
}

/// Validate a position's tick range against the pool's spacing
pub fn validate_position_params(
    lower: i32,
    upper: i32,
    tick_spacing: i32,
) -> Result<(), &'static str> {
    if lower >= upper {
        return Err("lower tick must be less than upper tick");
    }

    if lower < MIN_TICK || upper > MAX_TICK {
        return Err("tick out of range");
    }

    if tick_spacing <= 0 {
        return Err("tick spacing must be positive");
    }

    if lower % tick_spacing != 0 {
        return Err("lower tick must be aligned to tick spacing");
    }

    if upper % tick_spacing != 0 {
        return Err("upper tick must be aligned to tick spacing");
    }

    Ok(())
}
