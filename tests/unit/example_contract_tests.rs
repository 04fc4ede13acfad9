#![cfg(test)]

use soroban_sdk::testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation, Logs};
use soroban_sdk::{Address, Env, IntoVal, Symbol};
use time_lock_example_contract::{ExampleContract, ExampleContractClient, ExampleError};

extern crate std;

fn setup_example(env: &Env) -> (Address, ExampleContractClient<'static>, Address) {
    let contract_id = env.register_contract(None, ExampleContract);
    let client = ExampleContractClient::new(env, &contract_id);
    let owner = Address::generate(env);
    client.initialize(&owner);
    (contract_id, client, owner)
}

#[test]
fn test() {
    let env = Env::default();
    env.mock_all_auths();
    let (_, client, _) = setup_example(&env);

    assert_eq!(client.increment(&1), 1);
    assert_eq!(client.increment(&1), 2);
    assert_eq!(client.increment_five(), 7);

    std::println!("{}", env.logs().all().join("\n"));
}

#[test]
fn test_increment_only_owner() {
    let env = Env::default();
    env.mock_all_auths();
    let (contract_id, client, owner) = setup_example(&env);

    client.increment(&5);
    assert_eq!(
        env.auths(),
        std::vec![(
            owner.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    contract_id.clone(),
                    Symbol::new(&env, "increment"),
                    (5_u32,).into_val(&env)
                )),
                sub_invocations: std::vec![]
            }
        )]
    );

    assert_eq!(client.get_count(), 5);
}

#[test]
#[should_panic = "Error(Contract, #1001)"]
fn increment_without_owner_should_panic() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register_contract(None, ExampleContract);
    let client = ExampleContractClient::new(&env, &contract_id);

    client.increment(&1);
}

#[test]
#[should_panic = "Error(Contract, #1)"]
fn initialize_twice_should_panic() {
    let env = Env::default();
    env.mock_all_auths();
    let (_, client, owner) = setup_example(&env);

    client.initialize(&owner);
}

#[test]
fn limits_are_enforced() {
    let env = Env::default();
    env.mock_all_auths();
    let (_, client, _) = setup_example(&env);

    assert_eq!(
        client.try_increment_return_error(&101),
        Err(Ok(ExampleError::LimitReached))
    );
    assert_eq!(client.increment_return_error(&100), 100);
    assert!(client.try_increment_with_panic(&101).is_err());
    assert_eq!(client.get_count(), 100);
}

#[test]
fn mint_accumulates_balance() {
    let env = Env::default();
    env.mock_all_auths();
    let (_, client, _) = setup_example(&env);
    let account = Address::generate(&env);

    assert_eq!(client.balance(&account), 0);
    assert_eq!(client.mint(&account, &1_000), 1_000);
    assert_eq!(client.mint(&account, &500), 1_500);
    assert_eq!(client.balance(&account), 1_500);

    assert_eq!(
        client.try_mint(&account, &0),
        Err(Ok(ExampleError::InvalidAmount))
    );
}

#[test]
fn ownership_can_be_handed_over() {
    let env = Env::default();
    env.mock_all_auths();
    let (contract_id, client, owner) = setup_example(&env);
    let new_owner = Address::generate(&env);

    assert!(client.is_owner(&owner));
    client.transfer_ownership(&new_owner);
    assert_eq!(
        env.auths(),
        std::vec![(
            owner.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    contract_id.clone(),
                    Symbol::new(&env, "transfer_ownership"),
                    (new_owner.clone(),).into_val(&env)
                )),
                sub_invocations: std::vec![]
            }
        )]
    );

    assert!(client.is_owner(&new_owner));
    assert!(!client.is_owner(&owner));
}
