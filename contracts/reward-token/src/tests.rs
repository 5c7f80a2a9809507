#![cfg(test)]

mod tests {
    use crate::{RewardToken, RewardTokenClient};
    use soroban_sdk::{testutils::Address as _, Address, Env};

    const OWNER_CAP: i128 = 1_000_000;
    const POOL_CAP: i128 = 5_000_000;

    fn create_client(env: &Env) -> RewardTokenClient {
        RewardTokenClient::new(env, &env.register_contract(None, RewardToken))
    }

    fn setup(env: &Env) -> (RewardTokenClient, Address, Address) {
        env.mock_all_auths();
        let admin = Address::generate(env);
        let pool = Address::generate(env);
        let client = create_client(env);
        client.initialize(&admin, &OWNER_CAP, &POOL_CAP);
        client.admin_set_reward_pool(&admin, &pool);
        (client, admin, pool)
    }

    #[test]
    fn test_metadata() {
        let env = Env::default();
        let (client, _, pool) = setup(&env);

        assert_eq!(client.decimals(), 9);
        assert_eq!(client.owner_cap(), OWNER_CAP);
        assert_eq!(client.reward_pool_cap(), POOL_CAP);
        assert_eq!(client.reward_pool(), Some(pool));
        assert_eq!(client.total_supply(), 0);
    }

    #[test]
    fn test_initialize_twice_fails() {
        let env = Env::default();
        let (client, admin, _) = setup(&env);

        let result = client.try_initialize(&admin, &OWNER_CAP, &POOL_CAP);
        assert!(result.is_err());
    }

    #[test]
    fn test_mint_owner_tokens() {
        let env = Env::default();
        let (client, admin, _) = setup(&env);
        let holder = Address::generate(&env);

        client.mint(&admin, &holder, &1_000);

        assert_eq!(client.balance(&holder), 1_000);
        assert_eq!(client.owner_minted_supply(), 1_000);
        assert_eq!(client.reward_pool_minted_supply(), 0);
        assert_eq!(client.total_supply(), 1_000);
    }

    #[test]
    fn test_mint_owner_cap_exceeded() {
        let env = Env::default();
        let (client, admin, _) = setup(&env);
        let holder = Address::generate(&env);

        client.mint(&admin, &holder, &OWNER_CAP);
        assert_eq!(client.owner_minted_supply(), OWNER_CAP);

        // one more token over the cap
        let result = client.try_mint(&admin, &holder, &1);
        assert!(result.is_err());
        assert_eq!(client.owner_minted_supply(), OWNER_CAP);
    }

    #[test]
    fn test_mint_requires_admin() {
        let env = Env::default();
        let (client, _, _) = setup(&env);
        let outsider = Address::generate(&env);

        let result = client.try_mint(&outsider, &outsider, &1_000);
        assert!(result.is_err());
    }

    #[test]
    fn test_mint_reward_tokens() {
        let env = Env::default();
        let (client, _, pool) = setup(&env);
        let holder = Address::generate(&env);

        client.mint_reward(&pool, &holder, &1_000);

        assert_eq!(client.balance(&holder), 1_000);
        assert_eq!(client.reward_pool_minted_supply(), 1_000);
        assert_eq!(client.total_supply(), 1_000);
    }

    #[test]
    fn test_mint_reward_cap_exceeded() {
        let env = Env::default();
        let (client, _, pool) = setup(&env);
        let holder = Address::generate(&env);

        client.mint_reward(&pool, &holder, &POOL_CAP);

        let result = client.try_mint_reward(&pool, &holder, &1);
        assert!(result.is_err());
        assert_eq!(client.reward_pool_minted_supply(), POOL_CAP);
    }

    #[test]
    fn test_mint_reward_requires_pool() {
        let env = Env::default();
        let (client, admin, _) = setup(&env);
        let holder = Address::generate(&env);

        // the admin is not the reward pool
        let result = client.try_mint_reward(&admin, &holder, &1_000);
        assert!(result.is_err());
    }

    #[test]
    fn test_mint_reward_without_pool_registered() {
        let env = Env::default();
        env.mock_all_auths();
        let admin = Address::generate(&env);
        let client = create_client(&env);
        client.initialize(&admin, &OWNER_CAP, &POOL_CAP);

        let result = client.try_mint_reward(&admin, &admin, &1_000);
        assert!(result.is_err());
    }

    #[test]
    fn test_burn_frees_pool_capacity() {
        let env = Env::default();
        let (client, _, pool) = setup(&env);
        let holder = Address::generate(&env);

        client.mint_reward(&pool, &holder, &POOL_CAP);

        // pool allowance is exhausted
        assert!(client.try_mint_reward(&pool, &holder, &1).is_err());

        client.burn(&holder, &100_000);
        assert_eq!(client.reward_pool_minted_supply(), POOL_CAP - 100_000);
        assert_eq!(client.balance(&holder), POOL_CAP - 100_000);

        // capacity is available again
        client.mint_reward(&pool, &holder, &100_000);
        assert_eq!(client.reward_pool_minted_supply(), POOL_CAP);
    }

    #[test]
    fn test_burn_cannot_exceed_pool_minted() {
        let env = Env::default();
        let (client, admin, _) = setup(&env);
        let holder = Address::generate(&env);

        // owner-minted supply never unlocks reward-pool capacity
        client.mint(&admin, &holder, &1_000);

        let result = client.try_burn(&holder, &1_000);
        assert!(result.is_err());
        assert_eq!(client.balance(&holder), 1_000);
        assert_eq!(client.owner_minted_supply(), 1_000);
    }

    #[test]
    fn test_transfer() {
        let env = Env::default();
        let (client, admin, _) = setup(&env);
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);

        client.mint(&admin, &alice, &1_000);
        client.transfer(&alice, &bob, &250);

        assert_eq!(client.balance(&alice), 750);
        assert_eq!(client.balance(&bob), 250);
        assert_eq!(client.total_supply(), 1_000);
    }

    #[test]
    fn test_transfer_insufficient_balance() {
        let env = Env::default();
        let (client, admin, _) = setup(&env);
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);

        client.mint(&admin, &alice, &100);

        let result = client.try_transfer(&alice, &bob, &200);
        assert!(result.is_err());
        assert_eq!(client.balance(&alice), 100);
        assert_eq!(client.balance(&bob), 0);
    }

    #[test]
    fn test_caps_hold_under_interleaving() {
        let env = Env::default();
        let (client, admin, pool) = setup(&env);
        let holder = Address::generate(&env);

        for _ in 0..10 {
            client.mint(&admin, &holder, &50_000);
            client.mint_reward(&pool, &holder, &400_000);
            client.burn(&holder, &100_000);

            assert!(client.owner_minted_supply() <= client.owner_cap());
            assert!(client.reward_pool_minted_supply() <= client.reward_pool_cap());
        }

        assert_eq!(client.owner_minted_supply(), 500_000);
        assert_eq!(client.reward_pool_minted_supply(), 3_000_000);
        assert_eq!(client.balance(&holder), 3_500_000);
    }
}
