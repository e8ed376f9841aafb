//! Factory type definitions

use soroban_sdk::{contracttype, Address};

/// Factory configuration
#[contracttype]
#[derive(Clone, Debug)]
pub struct FactoryConfig {
    pub admin: Address,
}

/// Registry entry for a pool
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolInfo {
    pub pool: Address,
    pub token0: Address,
    pub token1: Address,
    pub fee_ppm: u32,
    pub registered_at: u32,
}
