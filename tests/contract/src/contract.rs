use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, log, panic_with_error, Address, Env,
};

use owner::owner;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ExampleError {
    AlreadyInitialized = 1,
    LimitReached = 2,
    InvalidAmount = 3,
}

#[contracttype]
pub enum DataKey {
    Counter,
    Balance(Address),
}

/// A contract placed under a timelock: everything that mutates state is
/// `only_owner`, and the owner is the controller.
#[contract]
pub struct ExampleContract;

#[contractimpl]
impl ExampleContract {
    pub fn initialize(env: Env, owner: Address) {
        if owner::has_owner(&env) {
            panic_with_error!(&env, ExampleError::AlreadyInitialized);
        }
        owner::set_owner(&env, &owner);
    }

    /// Hands the contract to a new owner, e.g. away from a timelock.
    pub fn transfer_ownership(env: Env, new_owner: Address) {
        owner::transfer_ownership(&env, &new_owner);
    }

    pub fn is_owner(env: Env, account: Address) -> bool {
        owner::is_owner(&env, &account)
    }

    pub fn increment(env: Env, num: u32) -> u32 {
        owner::only_owner(&env);
        add(&env, num)
    }

    pub fn increment_five(env: Env) -> u32 {
        owner::only_owner(&env);
        add(&env, 5)
    }

    pub fn increment_return_error(env: Env, num: u32) -> Result<u32, ExampleError> {
        owner::only_owner(&env);
        if num > 100 {
            return Err(ExampleError::LimitReached);
        }
        Ok(add(&env, num))
    }

    pub fn increment_with_panic(env: Env, num: u32) -> u32 {
        owner::only_owner(&env);
        if num > 100 {
            panic!("limit reached");
        }
        add(&env, num)
    }

    pub fn mint(env: Env, to: Address, amount: i128) -> Result<i128, ExampleError> {
        owner::only_owner(&env);
        if amount <= 0 {
            return Err(ExampleError::InvalidAmount);
        }
        let balance = Self::balance(env.clone(), to.clone()) + amount;
        env.storage().persistent().set(&DataKey::Balance(to), &balance);
        Ok(balance)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn get_count(env: Env) -> u32 {
        env.storage().instance().get(&DataKey::Counter).unwrap_or(0)
    }
}

fn add(env: &Env, num: u32) -> u32 {
    let count: u32 = env.storage().instance().get(&DataKey::Counter).unwrap_or(0) + num;
    log!(env, "count: {}", count);
    env.storage().instance().set(&DataKey::Counter, &count);
    env.storage().instance().extend_ttl(50, 100);
    count
}
