// Limit order errors

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LimitOrderError {
    // Initialization errors (3000-3099)
    AlreadyInitialized = 3000,
    NotInitialized = 3001,

    // Validation errors (3100-3199)
    InvalidTokenPair = 3100,
    InvalidAmount = 3101,
    InvalidPrice = 3102,
    InvalidExpiry = 3103,
    InvalidSide = 3104,

    // Lifecycle errors (3200-3299)
    OrderNotFound = 3200,
    OrderNotActive = 3201,
}
