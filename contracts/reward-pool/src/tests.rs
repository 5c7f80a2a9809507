#![cfg(test)]

mod tests {
    use crate::{RewardPool, RewardPoolClient};
    use reward_token::{RewardToken, RewardTokenClient};
    use soroban_sdk::{testutils::Address as _, Address, Env};

    const OWNER_CAP: i128 = 100_000_000;
    const POOL_CAP: i128 = 100_000_000;

    struct TestEnv<'a> {
        admin: Address,
        registry: Address,
        marketplace: Address,
        token: RewardTokenClient<'a>,
        pool: RewardPoolClient<'a>,
    }

    fn setup(env: &Env) -> TestEnv {
        env.mock_all_auths();

        let admin = Address::generate(env);
        let registry = Address::generate(env);
        let marketplace = Address::generate(env);

        let token =
            RewardTokenClient::new(env, &env.register_contract(None, RewardToken));
        token.initialize(&admin, &OWNER_CAP, &POOL_CAP);

        let pool = RewardPoolClient::new(env, &env.register_contract(None, RewardPool));
        pool.initialize(&admin, &token.address, &registry);
        pool.admin_set_marketplace(&admin, &marketplace);

        token.admin_set_reward_pool(&admin, &pool.address);

        TestEnv {
            admin,
            registry,
            marketplace,
            token,
            pool,
        }
    }

    #[test]
    fn test_reserve() {
        let env = Env::default();
        let t = setup(&env);

        let reserved = t.pool.reserve(&t.registry, &10_000, &1_000);

        assert_eq!(reserved, 10_000 * 1_000);
        assert_eq!(t.pool.reserved_amount(), 10_000 * 1_000);
    }

    #[test]
    fn test_reserve_zero_reward_is_noop() {
        let env = Env::default();
        let t = setup(&env);

        let reserved = t.pool.reserve(&t.registry, &0, &40_000);

        assert_eq!(reserved, 0);
        assert_eq!(t.pool.reserved_amount(), 0);
    }

    #[test]
    fn test_reserve_requires_registry() {
        let env = Env::default();
        let t = setup(&env);

        let result = t.pool.try_reserve(&t.admin, &10_000, &1_000);
        assert!(result.is_err());
        assert_eq!(t.pool.reserved_amount(), 0);
    }

    #[test]
    fn test_reserve_over_liquidity() {
        let env = Env::default();
        let t = setup(&env);

        let result = t.pool.try_reserve(&t.registry, &POOL_CAP, &2);
        assert!(result.is_err());
        assert_eq!(t.pool.reserved_amount(), 0);
    }

    #[test]
    fn test_available_decrements_by_reservation() {
        let env = Env::default();
        let t = setup(&env);

        let before = t.pool.available_reward();
        t.pool.reserve(&t.registry, &1_000, &40_000);

        assert_eq!(t.pool.available_reward(), before - 1_000 * 40_000);
    }

    #[test]
    fn test_send_reward() {
        let env = Env::default();
        let t = setup(&env);
        let buyer = Address::generate(&env);

        t.pool.reserve(&t.registry, &1_000, &40_000);
        assert_eq!(t.pool.reserved_amount(), 40_000_000);

        t.pool.send_reward(&t.marketplace, &buyer, &1_000);

        assert_eq!(t.pool.reserved_amount(), 39_999_000);
        assert_eq!(t.token.balance(&buyer), 1_000);
        assert_eq!(t.token.reward_pool_minted_supply(), 1_000);
        assert_eq!(t.token.total_supply(), 1_000);
    }

    #[test]
    fn test_send_reward_requires_marketplace() {
        let env = Env::default();
        let t = setup(&env);
        let buyer = Address::generate(&env);

        t.pool.reserve(&t.registry, &1_000, &40_000);

        let result = t.pool.try_send_reward(&t.registry, &buyer, &1_000);
        assert!(result.is_err());
        assert_eq!(t.token.balance(&buyer), 0);
    }

    #[test]
    fn test_send_reward_over_reserved() {
        let env = Env::default();
        let t = setup(&env);
        let buyer = Address::generate(&env);

        t.pool.reserve(&t.registry, &1_000, &10);

        let result = t.pool.try_send_reward(&t.marketplace, &buyer, &20_000);
        assert!(result.is_err());
        assert_eq!(t.pool.reserved_amount(), 10_000);
        assert_eq!(t.token.balance(&buyer), 0);
    }

    #[test]
    fn test_available_accounts_for_minted_supply() {
        let env = Env::default();
        let t = setup(&env);
        let buyer = Address::generate(&env);

        t.pool.reserve(&t.registry, &1_000, &1_000);
        t.pool.send_reward(&t.marketplace, &buyer, &500_000);

        // minted supply and the remaining reservation both reduce capacity
        let expected = POOL_CAP - 500_000 - t.pool.reserved_amount();
        assert_eq!(t.pool.available_reward(), expected);
    }
}
