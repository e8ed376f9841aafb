use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};
use tideswap_pool::{TideswapPool, TideswapPoolClient};

// Test constants
pub const DEFAULT_FEE_PPM: u32 = 3000; // 0.30%
pub const DEFAULT_PROTOCOL_FEE_PPM: u32 = 100_000; // 10% of the fee
pub const DEFAULT_TICK_SPACING: i32 = 60;
pub const DEFAULT_SQRT_PRICE_X64: u128 = 1u128 << 64; // price 1.0

pub struct PoolFixture<'a> {
    pub pool: TideswapPoolClient<'a>,
    pub admin: Address,
    pub token0: Address,
    pub token1: Address,
}

/// Setup pool with default parameters
pub fn setup_pool(env: &Env) -> PoolFixture<'_> {
    setup_custom_pool(
        env,
        DEFAULT_FEE_PPM,
        DEFAULT_PROTOCOL_FEE_PPM,
        DEFAULT_SQRT_PRICE_X64,
        DEFAULT_TICK_SPACING,
    )
}

/// Setup pool with custom parameters
pub fn setup_custom_pool(
    env: &Env,
    fee_ppm: u32,
    protocol_fee_ppm: u32,
    sqrt_price_x64: u128,
    tick_spacing: i32,
) -> PoolFixture<'_> {
    let admin = Address::generate(env);
    let token_a = create_token(env, &admin);
    let token_b = create_token(env, &admin);

    let pool_id = env.register_contract(None, TideswapPool);
    let pool = TideswapPoolClient::new(env, &pool_id);

    pool.initialize(
        &admin,
        &token_a,
        &token_b,
        &fee_ppm,
        &protocol_fee_ppm,
        &sqrt_price_x64,
        &tick_spacing,
    );

    let state = pool.get_pool_state();
    PoolFixture {
        pool,
        admin,
        token0: state.token0,
        token1: state.token1,
    }
}

/// Create a test token
pub fn create_token(env: &Env, admin: &Address) -> Address {
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, who: &Address) -> i128 {
    TokenClient::new(env, token).balance(who)
}

/// Fund an address with both pool tokens
pub fn fund(env: &Env, fixture: &PoolFixture, who: &Address, amount: i128) {
    mint_tokens(env, &fixture.token0, who, amount);
    mint_tokens(env, &fixture.token1, who, amount);
}

/// Fund a liquidity provider and mint a position in one step
pub fn mint_position(
    env: &Env,
    fixture: &PoolFixture,
    owner: &Address,
    lower_tick: i32,
    upper_tick: i32,
    liquidity: i128,
) -> (i128, i128) {
    fund(env, fixture, owner, 1_000_000_000_000);
    fixture
        .pool
        .mint(owner, owner, &lower_tick, &upper_tick, &liquidity)
}
