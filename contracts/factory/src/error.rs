// Factory errors

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    // Initialization errors (1000-1099)
    AlreadyInitialized = 1000,
    NotInitialized = 1001,

    // Registry errors (1100-1199)
    PoolAlreadyRegistered = 1100,
    InvalidTokenPair = 1101,
    PoolNotFound = 1102,

    // Authorization errors (1300-1399)
    Unauthorized = 1300,
}
