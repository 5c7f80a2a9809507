use shared::errors::Error;
use shared::types::Amount;
use soroban_sdk::{contracttype, Address, Env};

/// Storage keys for the reward pool
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Admin address
    Admin,
    /// Reward token contract
    Token,
    /// Registry contract allowed to reserve
    Registry,
    /// Marketplace contract allowed to release rewards
    Marketplace,
    /// Reward amount promised to future purchasers
    Reserved,
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

pub fn set_registry(env: &Env, registry: &Address) {
    env.storage().instance().set(&DataKey::Registry, registry);
}

pub fn get_registry(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::Registry)
        .ok_or(Error::NotInit)
}

pub fn set_marketplace(env: &Env, marketplace: &Address) {
    env.storage().instance().set(&DataKey::Marketplace, marketplace);
}

pub fn get_marketplace(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::Marketplace)
        .ok_or(Error::NotInit)
}

pub fn set_reserved(env: &Env, reserved: Amount) {
    env.storage().persistent().set(&DataKey::Reserved, &reserved);
}

pub fn get_reserved(env: &Env) -> Amount {
    env.storage()
        .persistent()
        .get::<DataKey, Amount>(&DataKey::Reserved)
        .unwrap_or(0)
}
