use soroban_sdk::contracttype;

/// Direction of an automated order, expressed against token0
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderSide {
    /// Acquire token0 with token1
    Buy,
    /// Dispose of token0 for token1
    Sell,
}

/// Swap direction through the pool for a given order side.
///
/// A sell pushes the price down (token0 in), a buy pushes it up (token1 in).
#[inline]
pub fn zero_for_one_for_side(side: OrderSide) -> bool {
    matches!(side, OrderSide::Sell)
}

/// Whether the pool price has reached an order's limit.
///
/// A buy triggers at or below its limit, a sell at or above it. Comparing
/// sqrt prices is equivalent to comparing prices since the square root is
/// monotonic.
pub fn price_condition_met(side: OrderSide, current_sqrt_price: u128, limit_sqrt_price: u128) -> bool {
    match side {
        OrderSide::Buy => current_sqrt_price <= limit_sqrt_price,
        OrderSide::Sell => current_sqrt_price >= limit_sqrt_price,
    }
}
