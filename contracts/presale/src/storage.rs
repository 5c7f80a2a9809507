use shared::errors::Error;
use shared::types::Amount;
use soroban_sdk::{contracttype, Address, Env};

/// Storage keys for the presale
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Admin address
    Admin,
    /// Token on sale
    Token,
    /// Stable currency the sale settles in
    Currency,
    /// Minimum raise, in token units, for the presale to succeed
    SoftCap,
    /// Step width of the doubling price curve, in token units
    StepSize,
    /// Price of one token before the first step
    BasePrice,
    /// Token units offered, snapshotted from the contract's token balance
    Cap,
    /// Token units sold so far
    Sold,
    /// Stable currency raised so far
    Raised,
    /// Whether the presale still accepts purchases
    Open,
    /// Stable currency invested per account
    Investment(Address),
    /// Token units bought per account, claimable on success
    PresaleBalance(Address),
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::Admin)
        .ok_or(Error::NotInit)
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn get_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::Token)
        .ok_or(Error::NotInit)
}

pub fn set_currency(env: &Env, currency: &Address) {
    env.storage().instance().set(&DataKey::Currency, currency);
}

pub fn get_currency(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::Currency)
        .ok_or(Error::NotInit)
}

pub fn set_soft_cap(env: &Env, soft_cap: Amount) {
    env.storage().instance().set(&DataKey::SoftCap, &soft_cap);
}

pub fn get_soft_cap(env: &Env) -> Amount {
    env.storage()
        .instance()
        .get::<DataKey, Amount>(&DataKey::SoftCap)
        .unwrap_or(0)
}

pub fn set_step_size(env: &Env, step_size: Amount) {
    env.storage().instance().set(&DataKey::StepSize, &step_size);
}

pub fn get_step_size(env: &Env) -> Result<Amount, Error> {
    env.storage()
        .instance()
        .get::<DataKey, Amount>(&DataKey::StepSize)
        .ok_or(Error::NotInit)
}

pub fn set_base_price(env: &Env, base_price: Amount) {
    env.storage().instance().set(&DataKey::BasePrice, &base_price);
}

pub fn get_base_price(env: &Env) -> Result<Amount, Error> {
    env.storage()
        .instance()
        .get::<DataKey, Amount>(&DataKey::BasePrice)
        .ok_or(Error::NotInit)
}

pub fn set_cap(env: &Env, cap: Amount) {
    env.storage().instance().set(&DataKey::Cap, &cap);
}

pub fn get_cap(env: &Env) -> Amount {
    env.storage()
        .instance()
        .get::<DataKey, Amount>(&DataKey::Cap)
        .unwrap_or(0)
}

pub fn set_sold(env: &Env, sold: Amount) {
    env.storage().persistent().set(&DataKey::Sold, &sold);
}

pub fn get_sold(env: &Env) -> Amount {
    env.storage()
        .persistent()
        .get::<DataKey, Amount>(&DataKey::Sold)
        .unwrap_or(0)
}

pub fn set_raised(env: &Env, raised: Amount) {
    env.storage().persistent().set(&DataKey::Raised, &raised);
}

pub fn get_raised(env: &Env) -> Amount {
    env.storage()
        .persistent()
        .get::<DataKey, Amount>(&DataKey::Raised)
        .unwrap_or(0)
}

pub fn set_open(env: &Env, open: bool) {
    env.storage().instance().set(&DataKey::Open, &open);
}

pub fn is_open(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<DataKey, bool>(&DataKey::Open)
        .unwrap_or(false)
}

pub fn set_investment(env: &Env, account: &Address, invested: Amount) {
    let key = DataKey::Investment(account.clone());
    env.storage().persistent().set(&key, &invested);
}

pub fn get_investment(env: &Env, account: &Address) -> Amount {
    let key = DataKey::Investment(account.clone());
    env.storage()
        .persistent()
        .get::<DataKey, Amount>(&key)
        .unwrap_or(0)
}

pub fn set_presale_balance(env: &Env, account: &Address, balance: Amount) {
    let key = DataKey::PresaleBalance(account.clone());
    env.storage().persistent().set(&key, &balance);
}

pub fn get_presale_balance(env: &Env, account: &Address) -> Amount {
    let key = DataKey::PresaleBalance(account.clone());
    env.storage()
        .persistent()
        .get::<DataKey, Amount>(&key)
        .unwrap_or(0)
}
