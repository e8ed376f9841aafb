#![no_std]

pub mod fee_growth;
pub mod types;
pub mod update;

pub use fee_growth::get_fee_growth_inside;
pub use types::TickInfo;
pub use update::{cross_tick, find_next_initialized_tick, is_valid_tick, update_tick};

pub use tideswap_math::snap_tick_to_spacing;
