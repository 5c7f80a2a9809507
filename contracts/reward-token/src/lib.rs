#![no_std]

use shared::{constants::REWARD_TOKEN_DECIMALS, errors::Error, roles::require_role, types::Amount};
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, String};
use soroban_token_sdk::TokenUtils;

mod storage;

#[cfg(test)]
mod tests;

use storage::*;

contractmeta!(key = "name", val = "Capped dual-allowance reward token");

#[contract]
pub struct RewardToken;

#[contractimpl]
impl RewardToken {
    /// Initialize the token with its admin and the two minting caps.
    ///
    /// # Arguments
    /// * `admin` - Address allowed to mint from the owner allowance
    /// * `owner_cap` - Hard cap of the owner allowance
    /// * `reward_pool_cap` - Hard cap of the reward-pool allowance
    pub fn initialize(
        env: Env,
        admin: Address,
        owner_cap: Amount,
        reward_pool_cap: Amount,
    ) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInit);
        }
        if owner_cap < 0 || reward_pool_cap < 0 {
            return Err(Error::InvInput);
        }
        admin.require_auth();

        set_admin(&env, &admin);
        set_owner_cap(&env, owner_cap);
        set_pool_cap(&env, reward_pool_cap);
        set_owner_minted(&env, 0);
        set_pool_minted(&env, 0);

        Ok(())
    }

    /// Register the reward pool principal allowed to mint reward tokens.
    pub fn admin_set_reward_pool(env: Env, caller: Address, pool: Address) -> Result<(), Error> {
        let admin = get_admin(&env)?;
        require_role(&admin, &caller)?;

        set_reward_pool(&env, &pool);
        Ok(())
    }

    /// Mint `amount` tokens to `to` from the owner allowance.
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the admin
    /// * `OwnerCapExceeded` - The owner allowance cap would be exceeded
    pub fn mint(env: Env, caller: Address, to: Address, amount: Amount) -> Result<(), Error> {
        let admin = get_admin(&env)?;
        require_role(&admin, &caller)?;
        if amount <= 0 {
            return Err(Error::InvInput);
        }

        let minted = get_owner_minted(&env);
        let new_minted = minted.checked_add(amount).ok_or(Error::InvInput)?;
        if new_minted > get_owner_cap(&env) {
            return Err(Error::OwnerCapExceeded);
        }

        set_owner_minted(&env, new_minted);
        credit(&env, &to, amount)?;

        TokenUtils::new(&env).events().mint(caller, to, amount);

        Ok(())
    }

    /// Mint `amount` tokens to `to` from the reward-pool allowance.
    ///
    /// # Errors
    /// * `NotInit` - No reward pool has been registered
    /// * `Unauthorized` - Caller is not the registered reward pool
    /// * `PoolCapExceeded` - The reward-pool allowance cap would be exceeded
    pub fn mint_reward(env: Env, caller: Address, to: Address, amount: Amount) -> Result<(), Error> {
        let pool = get_reward_pool(&env).ok_or(Error::NotInit)?;
        require_role(&pool, &caller)?;
        if amount <= 0 {
            return Err(Error::InvInput);
        }

        let minted = get_pool_minted(&env);
        let new_minted = minted.checked_add(amount).ok_or(Error::InvInput)?;
        if new_minted > get_pool_cap(&env) {
            return Err(Error::PoolCapExceeded);
        }

        set_pool_minted(&env, new_minted);
        credit(&env, &to, amount)?;

        TokenUtils::new(&env).events().mint(caller, to, amount);

        Ok(())
    }

    /// Burn `amount` tokens from `from`, freeing reward-pool mint capacity.
    ///
    /// Burning only returns reward-pool-origin capacity: tokens are fungible
    /// once minted, but the freed allowance is always the reward pool's, so a
    /// burn may never exceed what the reward pool has minted so far.
    ///
    /// # Errors
    /// * `BurnExceedsPoolMinted` - `amount` exceeds the reward-pool minted supply
    /// * `InsufBalance` - `amount` exceeds the caller's balance
    pub fn burn(env: Env, from: Address, amount: Amount) -> Result<(), Error> {
        from.require_auth();
        if amount <= 0 {
            return Err(Error::InvInput);
        }

        let pool_minted = get_pool_minted(&env);
        if amount > pool_minted {
            return Err(Error::BurnExceedsPoolMinted);
        }

        debit(&env, &from, amount)?;
        set_pool_minted(&env, pool_minted - amount);

        TokenUtils::new(&env).events().burn(from, amount);

        Ok(())
    }

    /// Transfer `amount` tokens from `from` to `to`.
    pub fn transfer(env: Env, from: Address, to: Address, amount: Amount) -> Result<(), Error> {
        from.require_auth();
        if amount <= 0 {
            return Err(Error::InvInput);
        }

        debit(&env, &from, amount)?;
        credit(&env, &to, amount)?;

        TokenUtils::new(&env).events().transfer(from, to, amount);

        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> Amount {
        get_balance(&env, &id)
    }

    /// Circulating supply: everything minted through either allowance, net
    /// of burns (burns decrement the reward-pool counter).
    pub fn total_supply(env: Env) -> Amount {
        get_owner_minted(&env) + get_pool_minted(&env)
    }

    pub fn owner_minted_supply(env: Env) -> Amount {
        get_owner_minted(&env)
    }

    pub fn reward_pool_minted_supply(env: Env) -> Amount {
        get_pool_minted(&env)
    }

    pub fn owner_cap(env: Env) -> Amount {
        get_owner_cap(&env)
    }

    pub fn reward_pool_cap(env: Env) -> Amount {
        get_pool_cap(&env)
    }

    pub fn reward_pool(env: Env) -> Option<Address> {
        get_reward_pool(&env)
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, "Reward Token")
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, "RWRD")
    }

    pub fn decimals(_env: Env) -> u32 {
        REWARD_TOKEN_DECIMALS
    }
}
