// Pool abort messages
//
// The pool panics with named messages; the host call rolls back atomically.

pub struct ErrorMsg;

impl ErrorMsg {
    // Initialization
    pub const ALREADY_INITIALIZED: &'static str = "pool already initialized";
    pub const NOT_INITIALIZED: &'static str = "pool not initialized";
    pub const INVALID_TOKEN_PAIR: &'static str = "token addresses must be different";
    pub const INVALID_FEE: &'static str = "invalid fee";
    pub const INVALID_PROTOCOL_FEE: &'static str = "protocol fee share exceeds maximum";
    pub const INVALID_TICK_SPACING: &'static str = "tick spacing must be positive";
    pub const INVALID_INITIAL_PRICE: &'static str = "initial sqrt price out of range";

    // Liquidity
    pub const INVALID_TICK_RANGE: &'static str = "lower tick must be less than upper tick";
    pub const INVALID_LIQUIDITY_AMOUNT: &'static str = "liquidity delta must be positive";
    pub const LIQUIDITY_TOO_LOW: &'static str = "liquidity below minimum";
    pub const INSUFFICIENT_LIQUIDITY: &'static str = "insufficient position liquidity";
    pub const POSITION_NOT_FOUND: &'static str = "position not found";

    // Swap
    pub const INVALID_AMOUNT: &'static str = "amount_in must be positive";
    pub const EXACT_OUTPUT_UNSUPPORTED: &'static str = "exact output swaps not supported";
    pub const INVALID_PRICE_LIMIT: &'static str = "price limit inconsistent with swap direction";
    pub const SLIPPAGE_EXCEEDED: &'static str = "slippage exceeded";
    pub const INSUFFICIENT_POOL_LIQUIDITY: &'static str = "insufficient pool liquidity";
}
