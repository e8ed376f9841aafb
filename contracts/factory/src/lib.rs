#![no_std]

//! # Tideswap Factory
//!
//! Registry mapping token pairs to their pool contracts. Pools are deployed
//! separately and registered here by the admin; the order schedulers resolve
//! pools through this registry at trigger time.
//!
//! ## Functions:
//! - Write (3): initialize, register_pool, set_admin
//! - Read (5): get_pool, get_pool_info, get_pool_by_index, get_pool_count, get_config

use soroban_sdk::{contract, contractimpl, Address, Env};

mod error;
mod events;
mod storage;
mod types;

pub use error::FactoryError;
use events::*;
use storage::*;
pub use types::*;

#[contract]
pub struct TideswapFactory;

#[contractimpl]
impl TideswapFactory {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize the factory with its admin
    pub fn initialize(env: Env, admin: Address) -> Result<(), FactoryError> {
        admin.require_auth();

        if factory_is_initialized(&env) {
            return Err(FactoryError::AlreadyInitialized);
        }

        let config = FactoryConfig {
            admin: admin.clone(),
        };
        write_factory_config(&env, &config);
        factory_set_initialized(&env);

        emit_initialized(&env, &admin);

        Ok(())
    }

    // ========================================================
    // REGISTRY (Write)
    // ========================================================

    /// Register a deployed pool for a token pair and fee tier.
    ///
    /// The pair key is token-order independent, so a second registration for
    /// the same pair and tier is rejected regardless of argument order.
    pub fn register_pool(
        env: Env,
        token_a: Address,
        token_b: Address,
        fee_ppm: u32,
        pool: Address,
    ) -> Result<(), FactoryError> {
        if !factory_is_initialized(&env) {
            return Err(FactoryError::NotInitialized);
        }

        let config = read_factory_config(&env);
        config.admin.require_auth();

        if token_a == token_b {
            return Err(FactoryError::InvalidTokenPair);
        }

        if pool_exists(&env, &token_a, &token_b, fee_ppm) {
            return Err(FactoryError::PoolAlreadyRegistered);
        }

        let (token0, token1) = pair_key(&token_a, &token_b);
        let info = PoolInfo {
            pool: pool.clone(),
            token0: token0.clone(),
            token1: token1.clone(),
            fee_ppm,
            registered_at: env.ledger().sequence(),
        };
        write_pool(&env, &token_a, &token_b, &info);

        emit_pool_registered(&env, &pool, &token0, &token1, fee_ppm);

        Ok(())
    }

    /// Rotate the factory admin
    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), FactoryError> {
        if !factory_is_initialized(&env) {
            return Err(FactoryError::NotInitialized);
        }

        let mut config = read_factory_config(&env);
        config.admin.require_auth();

        let old_admin = config.admin.clone();
        config.admin = new_admin.clone();
        write_factory_config(&env, &config);

        emit_admin_updated(&env, &old_admin, &new_admin);

        Ok(())
    }

    // ========================================================
    // REGISTRY (Read)
    // ========================================================

    /// Pool for a token pair and fee tier, in either token order
    pub fn get_pool(
        env: Env,
        token_a: Address,
        token_b: Address,
        fee_ppm: u32,
    ) -> Option<Address> {
        read_pool_address(&env, &token_a, &token_b, fee_ppm)
    }

    /// Registry entry for a pool address
    pub fn get_pool_info(env: Env, pool: Address) -> Result<PoolInfo, FactoryError> {
        read_pool_info(&env, &pool).ok_or(FactoryError::PoolNotFound)
    }

    /// Pool by registration index, for enumeration
    pub fn get_pool_by_index(env: Env, index: u32) -> Option<Address> {
        read_pool_by_index(&env, index)
    }

    /// Number of registered pools
    pub fn get_pool_count(env: Env) -> u32 {
        read_pool_count(&env)
    }

    /// Factory configuration
    pub fn get_config(env: Env) -> Result<FactoryConfig, FactoryError> {
        if !factory_is_initialized(&env) {
            return Err(FactoryError::NotInitialized);
        }
        Ok(read_factory_config(&env))
    }

    /// Whether the factory has been initialized
    pub fn is_initialized(env: Env) -> bool {
        factory_is_initialized(&env)
    }
}
