// Recurring order errors

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RecurringOrderError {
    // Initialization errors (4000-4099)
    AlreadyInitialized = 4000,
    NotInitialized = 4001,

    // Validation errors (4100-4199)
    InvalidTokenPair = 4100,
    InvalidAmount = 4101,
    InvalidPrice = 4102,
    InvalidInterval = 4103,
    InvalidExecutionCount = 4104,
    InvalidSide = 4105,

    // Lifecycle errors (4200-4299)
    OrderNotFound = 4200,
    OrderNotActive = 4201,
}
