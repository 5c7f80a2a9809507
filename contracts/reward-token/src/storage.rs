use shared::errors::Error;
use shared::types::Amount;
use soroban_sdk::{contracttype, Address, Env};

/// Storage keys for the reward token
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Admin address, allowed to mint from the owner allowance
    Admin,
    /// Reward pool address, allowed to mint from the reward-pool allowance
    RewardPool,
    /// Hard cap of the owner allowance
    OwnerCap,
    /// Amount minted through the owner allowance
    OwnerMinted,
    /// Hard cap of the reward-pool allowance
    PoolCap,
    /// Amount minted through the reward-pool allowance; decreases on burn
    PoolMinted,
    /// Token balance per holder
    Balance(Address),
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

pub fn set_reward_pool(env: &Env, pool: &Address) {
    env.storage().instance().set(&DataKey::RewardPool, pool);
}

pub fn get_reward_pool(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::RewardPool)
}

pub fn set_owner_cap(env: &Env, cap: Amount) {
    env.storage().instance().set(&DataKey::OwnerCap, &cap);
}

pub fn get_owner_cap(env: &Env) -> Amount {
    env.storage()
        .instance()
        .get::<DataKey, Amount>(&DataKey::OwnerCap)
        .unwrap_or(0)
}

pub fn set_pool_cap(env: &Env, cap: Amount) {
    env.storage().instance().set(&DataKey::PoolCap, &cap);
}

pub fn get_pool_cap(env: &Env) -> Amount {
    env.storage()
        .instance()
        .get::<DataKey, Amount>(&DataKey::PoolCap)
        .unwrap_or(0)
}

pub fn set_owner_minted(env: &Env, minted: Amount) {
    env.storage().instance().set(&DataKey::OwnerMinted, &minted);
}

pub fn get_owner_minted(env: &Env) -> Amount {
    env.storage()
        .instance()
        .get::<DataKey, Amount>(&DataKey::OwnerMinted)
        .unwrap_or(0)
}

pub fn set_pool_minted(env: &Env, minted: Amount) {
    env.storage().instance().set(&DataKey::PoolMinted, &minted);
}

pub fn get_pool_minted(env: &Env) -> Amount {
    env.storage()
        .instance()
        .get::<DataKey, Amount>(&DataKey::PoolMinted)
        .unwrap_or(0)
}

pub fn get_balance(env: &Env, id: &Address) -> Amount {
    let key = DataKey::Balance(id.clone());
    env.storage()
        .persistent()
        .get::<DataKey, Amount>(&key)
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, id: &Address, balance: Amount) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &balance);
}

/// Add `amount` to the balance of `to`.
pub fn credit(env: &Env, to: &Address, amount: Amount) -> Result<(), Error> {
    let balance = get_balance(env, to);
    let new_balance = balance.checked_add(amount).ok_or(Error::InvInput)?;
    set_balance(env, to, new_balance);
    Ok(())
}

/// Remove `amount` from the balance of `from`.
pub fn debit(env: &Env, from: &Address, amount: Amount) -> Result<(), Error> {
    let balance = get_balance(env, from);
    if balance < amount {
        return Err(Error::InsufBalance);
    }
    set_balance(env, from, balance - amount);
    Ok(())
}
