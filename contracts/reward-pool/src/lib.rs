#![no_std]

use shared::{
    errors::Error,
    events::{REWARD_RESERVED, REWARD_SENT},
    roles::require_role,
    types::Amount,
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, vec, Address, Env, IntoVal, Symbol, Val, Vec,
};

mod storage;

#[cfg(test)]
mod tests;

use storage::*;

contractmeta!(key = "name", val = "Reward reservation pool");

#[contract]
pub struct RewardPool;

#[contractimpl]
impl RewardPool {
    /// Initialize the pool against the reward token and the registry that is
    /// allowed to reserve from it.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        registry: Address,
    ) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInit);
        }
        admin.require_auth();

        set_admin(&env, &admin);
        set_token(&env, &token);
        set_registry(&env, &registry);
        set_reserved(&env, 0);

        Ok(())
    }

    /// Register the marketplace principal allowed to release rewards.
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

    /// Reserve `reward_per_unit * units` for a newly created contract.
    ///
    /// Only the registry may reserve. A zero reward reserves nothing and
    /// succeeds.
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the registry
    /// * `InsufLiquidity` - The pool cannot back the reservation
    pub fn reserve(
        env: Env,
        caller: Address,
        reward_per_unit: Amount,
        units: u64,
    ) -> Result<Amount, Error> {
        let registry = get_registry(&env)?;
        require_role(&registry, &caller)?;
        if reward_per_unit < 0 {
            return Err(Error::InvInput);
        }

        let total = reward_per_unit
            .checked_mul(units as Amount)
            .ok_or(Error::InvInput)?;
        if total == 0 {
            return Ok(0);
        }

        if total > Self::available_reward(env.clone())? {
            return Err(Error::InsufLiquidity);
        }

        let reserved = get_reserved(&env) + total;
        set_reserved(&env, reserved);

        env.events().publish((REWARD_RESERVED,), (total, reserved));

        Ok(total)
    }

    /// Release `amount` of previously reserved reward to `to`, minting it
    /// through the reward token's reward-pool allowance.
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the marketplace
    /// * `NotEnoughReserved` - `amount` exceeds the reserved total
    pub fn send_reward(env: Env, caller: Address, to: Address, amount: Amount) -> Result<(), Error> {
        let marketplace = get_marketplace(&env)?;
        require_role(&marketplace, &caller)?;
        if amount <= 0 {
            return Err(Error::InvInput);
        }

        let reserved = get_reserved(&env);
        if amount > reserved {
            return Err(Error::NotEnoughReserved);
        }
        set_reserved(&env, reserved - amount);

        let token = get_token(&env)?;
        let args: Vec<Val> = vec![
            &env,
            env.current_contract_address().into_val(&env),
            to.into_val(&env),
            amount.into_val(&env),
        ];
        let _: () = env.invoke_contract(&token, &Symbol::new(&env, "mint_reward"), args);

        env.events().publish((REWARD_SENT,), (to, amount));

        Ok(())
    }

    /// Reward capacity still open for reservations: the token's reward-pool
    /// cap, minus what that allowance already minted, minus what is reserved.
    pub fn available_reward(env: Env) -> Result<Amount, Error> {
        let token = get_token(&env)?;
        let cap: Amount =
            env.invoke_contract(&token, &Symbol::new(&env, "reward_pool_cap"), Vec::new(&env));
        let minted: Amount = env.invoke_contract(
            &token,
            &Symbol::new(&env, "reward_pool_minted_supply"),
            Vec::new(&env),
        );
        Ok(cap - minted - get_reserved(&env))
    }

    pub fn reserved_amount(env: Env) -> Amount {
        get_reserved(&env)
    }
}
