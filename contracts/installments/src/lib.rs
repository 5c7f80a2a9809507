#![no_std]

use shared::{
    constants::QUOTA_TOTAL,
    errors::Error,
    events::{CONTRACT_CLOSED, CONTRACT_CREATED, UNIT_TRANSFERRED},
    roles::require_role,
    types::{Amount, ContractRegistration, SaleContract, Unit},
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, vec, Address, Env, IntoVal, String, Symbol, Val, Vec,
};

mod storage;
mod validation;


use storage::*;

contractmeta!(key = "name", val = "Installment sale registry");

#[contract]
pub struct InstallmentRegistry;

#[contractimpl]
impl InstallmentRegistry {
    /// Initialize the registry with an admin address.
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInit);
        }
        admin.require_auth();
        set_admin(&env, &admin);
        Ok(())
    }

    /// Register the minter allowed to create and close contracts.
    pub fn admin_set_minter(env: Env, caller: Address, minter: Address) -> Result<(), Error> {
        let admin = get_admin(&env)?;
        require_role(&admin, &caller)?;
        set_minter(&env, &minter);
        Ok(())
    }

    /// Register the marketplace, the only principal allowed to move units.
    pub fn admin_set_marketplace(
        env: Env,
        caller: Address,
        marketplace: Address,
    ) -> Result<(), Error> {
        let admin = get_admin(&env)?;
        require_role(&admin, &caller)?;
        set_marketplace(&env, &marketplace);
        Ok(())
    }

    /// Register the reward pool used to back contract rewards.
    pub fn admin_set_reward_pool(env: Env, caller: Address, pool: Address) -> Result<(), Error> {
        let admin = get_admin(&env)?;
        require_role(&admin, &caller)?;
        set_reward_pool(&env, &pool);
        Ok(())
    }

    /// Create an installment-sale contract.
    ///
    /// Sellers receive their conceptual unit allocation immediately; the
    /// units themselves are materialized lazily on first transfer. When the
    /// contract carries a reward, the full budget is reserved against the
    /// reward pool before any registry state is written, so a failed
    /// reservation rolls the creation back entirely.
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the minter
    /// * `DupContract` - The contract id is already used
    /// * `BadQuota` - Seller quotas do not sum to 100
    /// * `BadUnitsAmount` - `units_total` is zero or not a multiple of 100
    /// * `NotInit` - A reward is set but no reward pool is registered
    pub fn create_contract(
        env: Env,
        caller: Address,
        registration: ContractRegistration,
    ) -> Result<(), Error> {
        let minter = get_minter(&env)?;
        require_role(&minter, &caller)?;

        validation::validate_registration(&registration)?;
        if contract_exists(&env, registration.id) {
            return Err(Error::DupContract);
        }

        if registration.reward_per_unit > 0 {
            let pool = get_reward_pool(&env).ok_or(Error::NotInit)?;
            let args: Vec<Val> = vec![
                &env,
                env.current_contract_address().into_val(&env),
                registration.reward_per_unit.into_val(&env),
                registration.units_total.into_val(&env),
            ];
            let _: Amount = env.invoke_contract(&pool, &Symbol::new(&env, "reserve"), args);
        }

        let unit_from = get_next_unit_id(&env);
        let unit_to = unit_from
            .checked_add(registration.units_total)
            .ok_or(Error::InvInput)?;

        let contract = SaleContract {
            id: registration.id,
            sellers: registration.sellers,
            buyers: registration.buyers,
            metadata_uri: registration.metadata_uri,
            units_total: registration.units_total,
            unit_price_usd: registration.unit_price_usd,
            reward_per_unit: registration.reward_per_unit,
            unit_from,
            unit_to,
            cursor: unit_from,
            closed: false,
        };

        set_contract(&env, contract.id, &contract);
        push_contract_id(&env, contract.id);
        set_next_unit_id(&env, unit_to);

        // the divisibility check guarantees every allocation is integer-exact
        for entry in contract.sellers.iter() {
            let allocation = contract.units_total * entry.quota as u64 / QUOTA_TOTAL as u64;
            credit_units(&env, &entry.seller, allocation);
        }

        env.events().publish(
            (CONTRACT_CREATED,),
            (contract.id, contract.units_total, contract.reward_per_unit),
        );

        Ok(())
    }

    /// The unit id the next purchase on this contract will deliver.
    ///
    /// Designated buyers and third parties share the cursor; it advances
    /// only on `transfer_unit`, never on this query.
    pub fn next_unit_for(env: Env, contract_id: u64, _buyer: Address) -> Result<u64, Error> {
        let contract = get_open_contract(&env, contract_id)?;
        if contract.cursor >= contract.unit_to {
            return Err(Error::NotFound);
        }
        Ok(contract.cursor)
    }

    /// Move the contract's current unit from its holder to `to`,
    /// materializing it on first transfer.
    ///
    /// This is the only sanctioned mutation path for unit ownership and may
    /// only be invoked by the marketplace.
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the marketplace
    /// * `NotFound` - Unknown or closed contract, or every unit already sold
    /// * `NotTokenOwner` - `from` is not the current holder of the unit
    pub fn transfer_unit(
        env: Env,
        caller: Address,
        contract_id: u64,
        from: Address,
        to: Address,
    ) -> Result<u64, Error> {
        let marketplace = get_marketplace(&env)?;
        require_role(&marketplace, &caller)?;

        let mut contract = get_open_contract(&env, contract_id)?;
        if contract.cursor >= contract.unit_to {
            return Err(Error::NotFound);
        }
        let unit_id = contract.cursor;

        let holder = match get_unit(&env, unit_id) {
            Some(unit) => unit.owner,
            None => contract.seller_of_slot(unit_id).ok_or(Error::NotFound)?,
        };
        if holder != from {
            return Err(Error::NotTokenOwner);
        }

        set_unit(
            &env,
            &Unit {
                id: unit_id,
                contract_id,
                owner: to.clone(),
            },
        );
        contract.cursor += 1;
        set_contract(&env, contract_id, &contract);

        debit_units(&env, &from, 1)?;
        credit_units(&env, &to, 1);

        env.events()
            .publish((UNIT_TRANSFERRED,), (contract_id, unit_id, from, to));

        Ok(unit_id)
    }

    /// Units delivered to buyers so far.
    pub fn contract_progress(env: Env, contract_id: u64) -> Result<u64, Error> {
        Ok(get_open_contract(&env, contract_id)?.progress())
    }

    /// Whether every unit of the contract has been sold.
    pub fn contract_completed(env: Env, contract_id: u64) -> Result<bool, Error> {
        Ok(get_open_contract(&env, contract_id)?.completed())
    }

    /// Fetch an open contract. Closed contracts are excluded from lookups.
    pub fn get_contract(env: Env, contract_id: u64) -> Result<SaleContract, Error> {
        get_open_contract(&env, contract_id)
    }

    /// Mark a contract closed. Terminal: every later lookup fails.
    pub fn close_contract(env: Env, caller: Address, contract_id: u64) -> Result<(), Error> {
        let minter = get_minter(&env)?;
        require_role(&minter, &caller)?;

        let mut contract = get_open_contract(&env, contract_id)?;
        contract.closed = true;
        set_contract(&env, contract_id, &contract);

        env.events().publish((CONTRACT_CLOSED,), contract_id);

        Ok(())
    }

    /// Owner of a unit: its recorded owner once materialized, otherwise the
    /// seller whose quota slot covers it.
    pub fn owner_of(env: Env, unit_id: u64) -> Result<Address, Error> {
        Self::holder_of(env, unit_id).ok_or(Error::NotFound)
    }

    /// Non-failing owner lookup used by the settlement path.
    pub fn holder_of(env: Env, unit_id: u64) -> Option<Address> {
        if let Some(unit) = get_unit(&env, unit_id) {
            return Some(unit.owner);
        }
        for id in get_contract_ids(&env).iter() {
            if let Ok(contract) = get_contract_record(&env, id) {
                if contract.contains_unit(unit_id) {
                    return contract.seller_of_slot(unit_id);
                }
            }
        }
        None
    }

    /// Unit count held by `holder`, conceptual seller allocations included.
    pub fn balance_of(env: Env, holder: Address) -> u64 {
        get_unit_balance(&env, &holder)
    }

    /// Metadata URI of the contract a unit belongs to.
    pub fn token_uri(env: Env, unit_id: u64) -> Result<String, Error> {
        for id in get_contract_ids(&env).iter() {
            if let Ok(contract) = get_contract_record(&env, id) {
                if contract.contains_unit(unit_id) {
                    return Ok(contract.metadata_uri);
                }
            }
        }
        Err(Error::NotFound)
    }

    /// Total number of units allocated across every contract.
    pub fn total_units(env: Env) -> u64 {
        get_next_unit_id(&env)
    }

    /// Delegated approvals would bypass the pricing and reward coupling, so
    /// the whole approve/transfer-from surface is rejected.
    pub fn approve(_env: Env, _spender: Address, _unit_id: u64) -> Result<(), Error> {
        Err(Error::OpNotAllowed)
    }

    pub fn set_approval_for_all(
        _env: Env,
        _operator: Address,
        _approved: bool,
    ) -> Result<(), Error> {
        Err(Error::OpNotAllowed)
    }

    pub fn transfer_from(
        _env: Env,
        _from: Address,
        _to: Address,
        _unit_id: u64,
    ) -> Result<(), Error> {
        Err(Error::OpNotAllowed)
    }
}

/// Fetch a contract record and filter out closed ones.
fn get_open_contract(env: &Env, contract_id: u64) -> Result<SaleContract, Error> {
    let contract = get_contract_record(env, contract_id)?;
    if contract.closed {
        return Err(Error::NotFound);
    }
    Ok(contract)
}

/// Raw record fetch, closed contracts included.
fn get_contract_record(env: &Env, contract_id: u64) -> Result<SaleContract, Error> {
    storage::get_contract(env, contract_id)
}
