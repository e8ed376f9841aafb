// Cross-contract access to the factory and pools
//
// Trigger passes must not abort when one entry's pool is missing or its swap
// fails, so every call here goes through try_invoke_contract and collapses
// failures to None. The mirror types below must stay field-compatible with
// the pool contract's return types.

use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::{contracttype, vec, Address, Env, IntoVal, Symbol};

/// Mirror of the pool's snapshot view
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolSnapshot {
    pub sqrt_price_x64: u128,
    pub current_tick: i32,
    pub liquidity: i128,
    pub tick_spacing: i32,
    pub token0: Address,
    pub token1: Address,
    pub fee_ppm: u32,
}

/// Mirror of the pool's swap result
#[contracttype]
#[derive(Clone, Debug)]
pub struct SwapOutcome {
    pub amount_in: i128,
    pub amount_out: i128,
    pub sqrt_price_x64: u128,
    pub current_tick: i32,
}

/// Resolve a pool address from the factory registry
pub fn lookup_pool(
    env: &Env,
    factory: &Address,
    token_a: &Address,
    token_b: &Address,
    fee_ppm: u32,
) -> Option<Address> {
    let result = env.try_invoke_contract::<Option<Address>, soroban_sdk::Error>(
        factory,
        &Symbol::new(env, "get_pool"),
        vec![
            env,
            token_a.clone().into_val(env),
            token_b.clone().into_val(env),
            fee_ppm.into_val(env),
        ],
    );

    match result {
        Ok(Ok(pool)) => pool,
        _ => None,
    }
}

/// Read a pool's current price and token pairing
pub fn fetch_pool_snapshot(env: &Env, pool: &Address) -> Option<PoolSnapshot> {
    let result = env.try_invoke_contract::<PoolSnapshot, soroban_sdk::Error>(
        pool,
        &Symbol::new(env, "get_snapshot"),
        vec![env],
    );

    match result {
        Ok(Ok(snapshot)) => Some(snapshot),
        _ => None,
    }
}

/// Execute a swap with the calling contract as sender.
///
/// The pool pulls the input from the sender inside its own invocation, so
/// the escrow transfer is pre-authorized here as a sub-invocation; invoker
/// auth alone only covers the direct pool call.
///
/// Returns None when the pool rejects the swap, so the caller can leave the
/// entry live and retry on a later trigger.
#[allow(clippy::too_many_arguments)]
pub fn try_pool_swap(
    env: &Env,
    pool: &Address,
    token_in: &Address,
    recipient: &Address,
    zero_for_one: bool,
    amount_specified: i128,
    sqrt_price_limit_x64: u128,
    min_amount_out: i128,
) -> Option<SwapOutcome> {
    let sender = env.current_contract_address();

    env.authorize_as_current_contract(vec![
        env,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: token_in.clone(),
                fn_name: Symbol::new(env, "transfer"),
                args: (sender.clone(), pool.clone(), amount_specified).into_val(env),
            },
            sub_invocations: vec![env],
        }),
    ]);

    let result = env.try_invoke_contract::<SwapOutcome, soroban_sdk::Error>(
        pool,
        &Symbol::new(env, "swap"),
        vec![
            env,
            sender.into_val(env),
            recipient.clone().into_val(env),
            zero_for_one.into_val(env),
            amount_specified.into_val(env),
            sqrt_price_limit_x64.into_val(env),
            min_amount_out.into_val(env),
        ],
    );

    match result {
        Ok(Ok(outcome)) => Some(outcome),
        _ => None,
    }
}
