use soroban_sdk::{symbol_short, Symbol};

// Registry
pub const CONTRACT_CREATED: Symbol = symbol_short!("ctr_new");
pub const CONTRACT_CLOSED: Symbol = symbol_short!("ctr_close");
pub const UNIT_TRANSFERRED: Symbol = symbol_short!("unit_xfer");

// Reward pool
pub const REWARD_RESERVED: Symbol = symbol_short!("rw_reserv");
pub const REWARD_SENT: Symbol = symbol_short!("rw_sent");

// Marketplace
pub const UNIT_SOLD: Symbol = symbol_short!("unit_sold");
pub const INTEREST_RATE_SET: Symbol = symbol_short!("rate_set");
pub const LIQUIDITY_WITHDRAWN: Symbol = symbol_short!("withdraw");

// Presale
pub const PRESALE_CAP_SET: Symbol = symbol_short!("ps_cap");
pub const TOKENS_BOUGHT: Symbol = symbol_short!("ps_buy");
pub const PRESALE_CLOSED: Symbol = symbol_short!("ps_close");
pub const TOKENS_CLAIMED: Symbol = symbol_short!("ps_claim");
pub const INVESTMENT_REFUNDED: Symbol = symbol_short!("ps_refund");
