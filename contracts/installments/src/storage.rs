use shared::errors::Error;
use shared::types::{SaleContract, Unit};
use soroban_sdk::{contracttype, Address, Env, Vec};

/// Storage keys for the installment registry
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Admin address
    Admin,
    /// Minter address, allowed to create and close contracts
    Minter,
    /// Marketplace address, the only sanctioned transfer path
    Marketplace,
    /// Reward pool contract
    RewardPool,
    /// Next global unit id to hand out to a new contract
    NextUnitId,
    /// Every registered contract id, open or closed
    ContractIds,
    /// Sale contract keyed by id
    Contract(u64),
    /// Materialized unit keyed by global unit id
    Unit(u64),
    /// Unit count per holder, conceptual allocations included
    UnitBalance(Address),
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

pub fn set_minter(env: &Env, minter: &Address) {
    env.storage().instance().set(&DataKey::Minter, minter);
}

pub fn get_minter(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::Minter)
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

pub fn set_reward_pool(env: &Env, pool: &Address) {
    env.storage().instance().set(&DataKey::RewardPool, pool);
}

pub fn get_reward_pool(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::RewardPool)
}

pub fn set_next_unit_id(env: &Env, next: u64) {
    env.storage().instance().set(&DataKey::NextUnitId, &next);
}

pub fn get_next_unit_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get::<DataKey, u64>(&DataKey::NextUnitId)
        .unwrap_or(0)
}

pub fn set_contract(env: &Env, contract_id: u64, contract: &SaleContract) {
    env.storage()
        .persistent()
        .set(&DataKey::Contract(contract_id), contract);
}

pub fn get_contract(env: &Env, contract_id: u64) -> Result<SaleContract, Error> {
    env.storage()
        .persistent()
        .get::<DataKey, SaleContract>(&DataKey::Contract(contract_id))
        .ok_or(Error::NotFound)
}

pub fn contract_exists(env: &Env, contract_id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Contract(contract_id))
}

pub fn get_contract_ids(env: &Env) -> Vec<u64> {
    env.storage()
        .persistent()
        .get::<DataKey, Vec<u64>>(&DataKey::ContractIds)
        .unwrap_or(Vec::new(env))
}

pub fn push_contract_id(env: &Env, contract_id: u64) {
    let mut ids = get_contract_ids(env);
    ids.push_back(contract_id);
    env.storage().persistent().set(&DataKey::ContractIds, &ids);
}

pub fn set_unit(env: &Env, unit: &Unit) {
    env.storage().persistent().set(&DataKey::Unit(unit.id), unit);
}

pub fn get_unit(env: &Env, unit_id: u64) -> Option<Unit> {
    env.storage().persistent().get(&DataKey::Unit(unit_id))
}

pub fn get_unit_balance(env: &Env, holder: &Address) -> u64 {
    let key = DataKey::UnitBalance(holder.clone());
    env.storage()
        .persistent()
        .get::<DataKey, u64>(&key)
        .unwrap_or(0)
}

pub fn set_unit_balance(env: &Env, holder: &Address, balance: u64) {
    let key = DataKey::UnitBalance(holder.clone());
    env.storage().persistent().set(&key, &balance);
}

/// Add `amount` units to the balance of `holder`.
pub fn credit_units(env: &Env, holder: &Address, amount: u64) {
    let balance = get_unit_balance(env, holder);
    set_unit_balance(env, holder, balance + amount);
}

/// Remove `amount` units from the balance of `holder`.
pub fn debit_units(env: &Env, holder: &Address, amount: u64) -> Result<(), Error> {
    let balance = get_unit_balance(env, holder);
    let new_balance = balance.checked_sub(amount).ok_or(Error::InvInput)?;
    set_unit_balance(env, holder, new_balance);
    Ok(())
}
