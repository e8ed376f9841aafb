#![no_std]

pub mod fees;
pub mod manager;
pub mod types;

pub use fees::calculate_pending_fees;
pub use manager::{
    clear_fees, has_liquidity, has_uncollected_fees, is_empty, modify_position, update_position,
    validate_position_params,
};
pub use types::{Position, PositionInfo};
