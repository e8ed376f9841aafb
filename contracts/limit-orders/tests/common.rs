use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};
use tideswap_factory::{TideswapFactory, TideswapFactoryClient};
use tideswap_limit_orders::{TideswapLimitOrders, TideswapLimitOrdersClient};
use tideswap_math::get_sqrt_ratio_at_tick;
use tideswap_pool::{TideswapPool, TideswapPoolClient};

pub const FEE_PPM: u32 = 3000;
pub const TICK_SPACING: i32 = 60;

pub struct Market<'a> {
    pub factory: TideswapFactoryClient<'a>,
    pub pool: TideswapPoolClient<'a>,
    pub orders: TideswapLimitOrdersClient<'a>,
    pub admin: Address,
    pub token0: Address,
    pub token1: Address,
}

/// Factory + pool at price 1.0 with deep liquidity + limit order scheduler
pub fn setup_market(env: &Env) -> Market<'_> {
    let admin = Address::generate(env);
    let token_a = create_token(env, &admin);
    let token_b = create_token(env, &admin);

    let pool_id = env.register_contract(None, TideswapPool);
    let pool = TideswapPoolClient::new(env, &pool_id);
    pool.initialize(
        &admin,
        &token_a,
        &token_b,
        &FEE_PPM,
        &0u32,
        &(1u128 << 64),
        &TICK_SPACING,
    );
    let state = pool.get_pool_state();

    let factory_id = env.register_contract(None, TideswapFactory);
    let factory = TideswapFactoryClient::new(env, &factory_id);
    factory.initialize(&admin);
    factory.register_pool(&state.token0, &state.token1, &FEE_PPM, &pool_id);

    let orders_id = env.register_contract(None, TideswapLimitOrders);
    let orders = TideswapLimitOrdersClient::new(env, &orders_id);
    orders.initialize(&factory_id);

    // Deep wide-range liquidity so order fills barely move the price
    let lp = Address::generate(env);
    mint_tokens(env, &state.token0, &lp, 1_000_000_000_000);
    mint_tokens(env, &state.token1, &lp, 1_000_000_000_000);
    pool.mint(&lp, &lp, &-6000, &6000, &100_000_000i128);

    Market {
        factory,
        pool,
        orders,
        admin,
        token0: state.token0,
        token1: state.token1,
    }
}

pub fn create_token(env: &Env, admin: &Address) -> Address {
    env.register_stellar_asset_contract_v2(admin.clone()).address()
}

pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, who: &Address) -> i128 {
    TokenClient::new(env, token).balance(who)
}

/// Move the pool price onto the given tick with a small nudge swap
pub fn move_price_to_tick(env: &Env, market: &Market, tick: i32) {
    let target = get_sqrt_ratio_at_tick(tick);
    let current = market.pool.get_sqrt_price();
    if target == current {
        return;
    }

    let trader = Address::generate(env);
    mint_tokens(env, &market.token0, &trader, 1_000_000_000);
    mint_tokens(env, &market.token1, &trader, 1_000_000_000);

    let zero_for_one = target < current;
    market
        .pool
        .swap(&trader, &trader, &zero_for_one, &1_000i128, &target, &0i128);
}

pub fn set_sequence(env: &Env, sequence: u32) {
    env.ledger().with_mut(|info| info.sequence_number = sequence);
}
