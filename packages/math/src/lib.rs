// Tideswap fixed-point price/tick math

#![no_std]

pub mod constants;
pub mod liquidity;
pub mod q64;
pub mod sqrt_price;

pub use constants::*;

pub use q64::{
    div_q64, div_round_up, i128_to_u128_safe, mul_div, mul_q64, u128_to_i128_saturating, ONE_X64,
};

pub use sqrt_price::{
    compute_swap_output, get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio, is_tick_aligned,
    snap_tick_to_spacing,
};

pub use liquidity::{
    get_amount_0_delta, get_amount_1_delta, get_amounts_for_liquidity, get_liquidity_for_amount0,
    get_liquidity_for_amount1, get_liquidity_for_amounts,
};
