/// Sum that every contract's seller quotas must reach.
pub const QUOTA_TOTAL: u32 = 100;

/// Unit-count granularity. `units_total` must be a multiple of this so that
/// every quota split lands on an integer unit count.
pub const UNITS_GRANULARITY: u64 = 100;

/// Interest rate applied to designated buyers until the admin overrides it.
pub const DEFAULT_INTEREST_RATE: u32 = 10;

/// Upper bound for the marketplace interest rate (percent).
pub const MAX_INTEREST_RATE: u32 = 100;

/// Decimals of the reward token.
pub const REWARD_TOKEN_DECIMALS: u32 = 9;
