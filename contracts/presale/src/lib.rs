#![no_std]

use shared::{
    errors::Error,
    events::{INVESTMENT_REFUNDED, PRESALE_CAP_SET, PRESALE_CLOSED, TOKENS_BOUGHT, TOKENS_CLAIMED},
    roles::require_role,
    types::{Amount, PresaleStatus},
};
use soroban_sdk::{contract, contractimpl, contractmeta, token::TokenClient, Address, Env};

mod storage;


use storage::*;

contractmeta!(key = "name", val = "Reward token presale");

#[contract]
pub struct Presale;

#[contractimpl]
impl Presale {
    /// Initialize the presale with its doubling price curve.
    ///
    /// # Arguments
    /// * `token` - Token on sale
    /// * `currency` - Stable currency the sale settles in
    /// * `soft_cap` - Minimum sold amount, in token units, for success
    /// * `step_size` - Token units sold between price doublings
    /// * `base_price` - Currency price of one token before the first step
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        currency: Address,
        soft_cap: Amount,
        step_size: Amount,
        base_price: Amount,
    ) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInit);
        }
        if soft_cap < 0 || step_size <= 0 || base_price <= 0 {
            return Err(Error::InvInput);
        }
        admin.require_auth();

        set_admin(&env, &admin);
        set_token(&env, &token);
        set_currency(&env, &currency);
        set_soft_cap(&env, soft_cap);
        set_step_size(&env, step_size);
        set_base_price(&env, base_price);
        set_open(&env, true);

        Ok(())
    }

    /// Snapshot the presale's own token balance as the amount on offer. The
    /// allocation must have been transferred to the presale beforehand.
    pub fn admin_set_presale_cap(env: Env, caller: Address) -> Result<Amount, Error> {
        let admin = get_admin(&env)?;
        require_role(&admin, &caller)?;

        let token = TokenClient::new(&env, &get_token(&env)?);
        let cap = token.balance(&env.current_contract_address());
        set_cap(&env, cap);

        env.events().publish((PRESALE_CAP_SET,), cap);

        Ok(cap)
    }

    /// Current token price: the base price doubled once per completed step.
    pub fn token_price(env: Env) -> Result<Amount, Error> {
        let steps = get_sold(&env) / get_step_size(&env)?;
        let factor = 2_i128
            .checked_pow(steps.try_into().map_err(|_| Error::InvInput)?)
            .ok_or(Error::InvInput)?;
        get_base_price(&env)?
            .checked_mul(factor)
            .ok_or(Error::InvInput)
    }

    /// Buy `amount` tokens at the current price, escrowing the payment.
    ///
    /// # Errors
    /// * `PresaleClosed` - The presale no longer accepts purchases
    /// * `CapReached` - Fewer than `amount` tokens remain on offer
    /// * `InsufFunds` - The caller cannot cover the cost
    pub fn buy_tokens(env: Env, caller: Address, amount: Amount) -> Result<(), Error> {
        caller.require_auth();
        if amount <= 0 {
            return Err(Error::InvInput);
        }
        if !is_open(&env) {
            return Err(Error::PresaleClosed);
        }

        let sold = get_sold(&env);
        if sold + amount > get_cap(&env) {
            return Err(Error::CapReached);
        }

        // the whole batch settles at the price in force when it starts
        let price = Self::token_price(env.clone())?;
        let cost = amount.checked_mul(price).ok_or(Error::InvInput)?;

        let currency = TokenClient::new(&env, &get_currency(&env)?);
        if currency.balance(&caller) < cost {
            return Err(Error::InsufFunds);
        }
        currency.transfer(&caller, &env.current_contract_address(), &cost);

        set_sold(&env, sold + amount);
        set_raised(&env, get_raised(&env) + cost);
        set_investment(&env, &caller, get_investment(&env, &caller) + cost);
        set_presale_balance(&env, &caller, get_presale_balance(&env, &caller) + amount);

        env.events().publish((TOKENS_BOUGHT,), (caller, amount, cost));

        Ok(())
    }

    /// Close the presale, settable only once. On success the raised funds
    /// and the unsold allocation go to the admin; on failure the funds stay
    /// escrowed for refunds.
    pub fn admin_close(env: Env, caller: Address) -> Result<PresaleStatus, Error> {
        let admin = get_admin(&env)?;
        require_role(&admin, &caller)?;
        if !is_open(&env) {
            return Err(Error::PresaleClosed);
        }

        set_open(&env, false);
        let status = Self::status(env.clone());

        if status == PresaleStatus::Succeeded {
            let raised = get_raised(&env);
            if raised > 0 {
                let currency = TokenClient::new(&env, &get_currency(&env)?);
                currency.transfer(&env.current_contract_address(), &admin, &raised);
            }

            let unsold = get_cap(&env) - get_sold(&env);
            if unsold > 0 {
                let token = TokenClient::new(&env, &get_token(&env)?);
                token.transfer(&env.current_contract_address(), &admin, &unsold);
            }
        }

        env.events().publish((PRESALE_CLOSED,), get_sold(&env));

        Ok(status)
    }

    /// Claim the purchased tokens once the presale has succeeded.
    ///
    /// # Errors
    /// * `PresaleOpen` / `PresaleFailed` - Wrong lifecycle state
    /// * `NothingToClaim` - Nothing bought, or already claimed
    pub fn claim(env: Env, caller: Address) -> Result<Amount, Error> {
        caller.require_auth();
        match Self::status(env.clone()) {
            PresaleStatus::Open => return Err(Error::PresaleOpen),
            PresaleStatus::Failed => return Err(Error::PresaleFailed),
            PresaleStatus::Succeeded => {}
        }

        let balance = get_presale_balance(&env, &caller);
        if balance == 0 {
            return Err(Error::NothingToClaim);
        }
        set_presale_balance(&env, &caller, 0);

        let token = TokenClient::new(&env, &get_token(&env)?);
        token.transfer(&env.current_contract_address(), &caller, &balance);

        env.events().publish((TOKENS_CLAIMED,), (caller, balance));

        Ok(balance)
    }

    /// Take back the invested currency once the presale has failed.
    ///
    /// # Errors
    /// * `PresaleOpen` / `PresaleNotFailed` - Wrong lifecycle state
    /// * `NothingToRefund` - Nothing invested, or already refunded
    pub fn refund(env: Env, caller: Address) -> Result<Amount, Error> {
        caller.require_auth();
        match Self::status(env.clone()) {
            PresaleStatus::Open => return Err(Error::PresaleOpen),
            PresaleStatus::Succeeded => return Err(Error::PresaleNotFailed),
            PresaleStatus::Failed => {}
        }

        let invested = get_investment(&env, &caller);
        if invested == 0 {
            return Err(Error::NothingToRefund);
        }
        set_investment(&env, &caller, 0);

        let currency = TokenClient::new(&env, &get_currency(&env)?);
        currency.transfer(&env.current_contract_address(), &caller, &invested);

        env.events().publish((INVESTMENT_REFUNDED,), (caller, invested));

        Ok(invested)
    }

    /// Lifecycle state, derived from `sold` against the soft cap.
    pub fn status(env: Env) -> PresaleStatus {
        if is_open(&env) {
            PresaleStatus::Open
        } else if get_sold(&env) >= get_soft_cap(&env) {
            PresaleStatus::Succeeded
        } else {
            PresaleStatus::Failed
        }
    }

    pub fn is_open(env: Env) -> bool {
        is_open(&env)
    }

    pub fn presale_cap(env: Env) -> Amount {
        get_cap(&env)
    }

    pub fn tokens_sold(env: Env) -> Amount {
        get_sold(&env)
    }

    pub fn total_raised(env: Env) -> Amount {
        get_raised(&env)
    }

    pub fn balance_of(env: Env, account: Address) -> Amount {
        get_presale_balance(&env, &account)
    }

    pub fn investment_of(env: Env, account: Address) -> Amount {
        get_investment(&env, &account)
    }
}
