#![no_std]

use shared::{
    constants::{DEFAULT_INTEREST_RATE, MAX_INTEREST_RATE},
    errors::Error,
    events::{INTEREST_RATE_SET, LIQUIDITY_WITHDRAWN, UNIT_SOLD},
    roles::require_role,
    types::{Amount, SaleContract},
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, token::TokenClient, vec, Address, Env, IntoVal, Symbol,
    Val, Vec,
};

mod storage;


use storage::*;

contractmeta!(key = "name", val = "Installment unit marketplace");

#[contract]
pub struct Marketplace;

#[contractimpl]
impl Marketplace {
    /// Initialize the marketplace against the stable currency and the unit
    /// registry. The interest rate starts at the default of 10.
    pub fn initialize(
        env: Env,
        admin: Address,
        currency: Address,
        registry: Address,
    ) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInit);
        }
        admin.require_auth();

        set_admin(&env, &admin);
        set_currency(&env, &currency);
        set_registry(&env, &registry);
        set_interest_rate(&env, DEFAULT_INTEREST_RATE);

        Ok(())
    }

    /// Register the reward pool used to pay out purchase rewards.
    pub fn admin_set_reward_pool(env: Env, caller: Address, pool: Address) -> Result<(), Error> {
        let admin = get_admin(&env)?;
        require_role(&admin, &caller)?;
        set_reward_pool(&env, &pool);
        Ok(())
    }

    /// Set the interest rate charged to designated buyers.
    ///
    /// # Errors
    /// * `BadInterestRate` - Rate is zero or above 100
    pub fn admin_set_interest_rate(env: Env, caller: Address, rate: u32) -> Result<(), Error> {
        let admin = get_admin(&env)?;
        require_role(&admin, &caller)?;
        if rate == 0 || rate > MAX_INTEREST_RATE {
            return Err(Error::BadInterestRate);
        }

        set_interest_rate(&env, rate);

        env.events().publish((INTEREST_RATE_SET,), rate);

        Ok(())
    }

    pub fn interest_rate(env: Env) -> u32 {
        get_interest_rate(&env)
    }

    /// Price of the contract's next unit for `caller`, in stable-currency
    /// units. Designated buyers pay the interest-inclusive price, third
    /// parties the flat price.
    pub fn unit_price_for_caller(
        env: Env,
        caller: Address,
        contract_id: u64,
    ) -> Result<Amount, Error> {
        let contract = fetch_contract(&env, contract_id)?;
        let base = base_price(&env, &contract)?;
        if contract.is_buyer(&caller) {
            Ok(base + interest_on(&env, base)?)
        } else {
            Ok(base)
        }
    }

    /// Buy the contract's next unit for the caller.
    ///
    /// One atomic flow: the principal settles from the caller to the unit's
    /// current holder, the interest margin (designated buyers only) to the
    /// marketplace, the unit moves through the registry and the reward pool
    /// pays the contract's per-unit reward. A failure in any step leaves no
    /// partial payment, transfer or reward behind.
    ///
    /// # Errors
    /// * `TokenHasNoOwner` - The next unit resolves to no holder
    /// * `CallerOwnsToken` - The caller already holds the unit on sale
    /// * `InsufFunds` - The caller cannot cover the price
    pub fn buy_next_unit(env: Env, caller: Address, contract_id: u64) -> Result<u64, Error> {
        caller.require_auth();

        let registry = get_registry(&env)?;
        let contract = fetch_contract(&env, contract_id)?;

        let unit_id: u64 = env.invoke_contract(
            &registry,
            &Symbol::new(&env, "next_unit_for"),
            vec![&env, contract_id.into_val(&env), caller.into_val(&env)],
        );
        let holder: Option<Address> = env.invoke_contract(
            &registry,
            &Symbol::new(&env, "holder_of"),
            vec![&env, unit_id.into_val(&env)],
        );
        let holder = holder.ok_or(Error::TokenHasNoOwner)?;
        if holder == caller {
            return Err(Error::CallerOwnsToken);
        }

        let base = base_price(&env, &contract)?;
        let interest = if contract.is_buyer(&caller) {
            interest_on(&env, base)?
        } else {
            0
        };
        let total = base + interest;

        let currency = TokenClient::new(&env, &get_currency(&env)?);
        if currency.balance(&caller) < total {
            return Err(Error::InsufFunds);
        }

        // principal settles directly with the holder; only the margin rests
        // with the marketplace
        currency.transfer(&caller, &holder, &base);
        if interest > 0 {
            currency.transfer(&caller, &env.current_contract_address(), &interest);
        }

        let _: u64 = env.invoke_contract(
            &registry,
            &Symbol::new(&env, "transfer_unit"),
            vec![
                &env,
                env.current_contract_address().into_val(&env),
                contract_id.into_val(&env),
                holder.into_val(&env),
                caller.into_val(&env),
            ],
        );

        if contract.reward_per_unit > 0 {
            let pool = get_reward_pool(&env).ok_or(Error::NotInit)?;
            let args: Vec<Val> = vec![
                &env,
                env.current_contract_address().into_val(&env),
                caller.into_val(&env),
                contract.reward_per_unit.into_val(&env),
            ];
            let _: () = env.invoke_contract(&pool, &Symbol::new(&env, "send_reward"), args);
        }

        env.events()
            .publish((UNIT_SOLD,), (contract_id, unit_id, caller, total));

        Ok(unit_id)
    }

    /// Withdraw the accumulated interest margin. Principal never rests in
    /// the marketplace, so the contract balance is margin only.
    pub fn admin_withdraw(env: Env, caller: Address, to: Address) -> Result<Amount, Error> {
        let admin = get_admin(&env)?;
        require_role(&admin, &caller)?;

        let currency = TokenClient::new(&env, &get_currency(&env)?);
        let margin = currency.balance(&env.current_contract_address());
        if margin > 0 {
            currency.transfer(&env.current_contract_address(), &to, &margin);
        }

        env.events().publish((LIQUIDITY_WITHDRAWN,), (to, margin));

        Ok(margin)
    }
}

/// Fetch an open contract from the registry.
fn fetch_contract(env: &Env, contract_id: u64) -> Result<SaleContract, Error> {
    let registry = get_registry(env)?;
    Ok(env.invoke_contract(
        &registry,
        &Symbol::new(env, "get_contract"),
        vec![env, contract_id.into_val(env)],
    ))
}

/// USD price scaled into stable-currency units.
fn base_price(env: &Env, contract: &SaleContract) -> Result<Amount, Error> {
    let currency = TokenClient::new(env, &get_currency(env)?);
    let scale = 10i128
        .checked_pow(currency.decimals())
        .ok_or(Error::InvInput)?;
    contract
        .unit_price_usd
        .checked_mul(scale)
        .ok_or(Error::InvInput)
}

/// Interest margin on `base` at the configured rate, floored.
fn interest_on(env: &Env, base: Amount) -> Result<Amount, Error> {
    let rate = get_interest_rate(env) as Amount;
    Ok(base.checked_mul(rate).ok_or(Error::InvInput)? / 100)
}
