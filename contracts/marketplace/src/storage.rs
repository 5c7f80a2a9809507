use shared::constants::DEFAULT_INTEREST_RATE;
use shared::errors::Error;
use soroban_sdk::{contracttype, Address, Env};

/// Storage keys for the marketplace
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Admin address
    Admin,
    /// Stable currency token used for settlement
    Currency,
    /// Installment registry contract
    Registry,
    /// Reward pool contract
    RewardPool,
    /// Interest rate charged to designated buyers, percent
    InterestRate,
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

pub fn set_currency(env: &Env, currency: &Address) {
    env.storage().instance().set(&DataKey::Currency, currency);
}

pub fn get_currency(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::Currency)
        .ok_or(Error::NotInit)
}

pub fn set_registry(env: &Env, registry: &Address) {
    env.storage().instance().set(&DataKey::Registry, registry);
}

pub fn get_registry(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::Registry)
        .ok_or(Error::NotInit)
}

pub fn set_reward_pool(env: &Env, pool: &Address) {
    env.storage().instance().set(&DataKey::RewardPool, pool);
}

pub fn get_reward_pool(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::RewardPool)
}

pub fn set_interest_rate(env: &Env, rate: u32) {
    env.storage().instance().set(&DataKey::InterestRate, &rate);
}

pub fn get_interest_rate(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get::<DataKey, u32>(&DataKey::InterestRate)
        .unwrap_or(DEFAULT_INTEREST_RATE)
}
