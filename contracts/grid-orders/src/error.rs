// Grid order errors

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GridOrderError {
    // Initialization errors (5000-5099)
    AlreadyInitialized = 5000,
    NotInitialized = 5001,

    // Validation errors (5100-5199)
    InvalidTokenPair = 5100,
    InvalidAmount = 5101,
    InvalidPriceRange = 5102,
    InvalidLevelCount = 5103,

    // Lifecycle errors (5200-5299)
    OrderNotFound = 5200,
    OrderNotActive = 5201,
    LevelNotFound = 5202,
}
