/*
 * Contract module which acts as a timelocked controller. When set as the
 * owner of an `Ownable` smart contract, it enforces a timelock on all
 * `only_owner` maintenance operations. This gives time for users of the
 * controlled contract to exit before a potentially dangerous maintenance
 * operation is applied.
 *
 * The controller runs in one of two modes. Self-managed: an owner holds the
 * admin role and may change the minimum delay, the owner and role
 * memberships directly. Decentralized: there is no owner and administration
 * has to go through the timelock process, targeting the controller itself.
 */
use crate::admin;
use crate::config::{read_config, TimeLockError};
use crate::role_base::{self, RoleLabel};
use crate::storage::OperationState;
use crate::time_lock;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Symbol, Val, Vec};

#[contract]
pub struct TimeLockController;

#[contractimpl]
impl TimeLockController {
    /*
     *  Initializes the contract with the following parameters:
     *
     * - `min_delay`: initial minimum delay in seconds for operations
     * - `proposers`: accounts to be granted proposer and canceller roles
     * - `executors`: accounts to be granted executor role
     * - `owner`: the admin of a self-managed controller, `None` for a
     *   decentralized one
     */
    pub fn initialize(
        env: Env,
        min_delay: u64,
        proposers: Vec<Address>,
        executors: Vec<Address>,
        owner: Option<Address>,
    ) -> Result<(), TimeLockError> {
        time_lock::initialize(&env, min_delay, &proposers, &executors, &owner)
    }

    /*
     * Schedule an operation containing a single transaction.
     *
     * Emits a {CallScheduled} event.
     *
     * Requirements:
     *
     * - the caller must have the 'proposer' role.
     * - `delay` must not be below the minimum delay.
     * - `predecessor`, if any, must be a known operation.
     */
    pub fn schedule(
        env: Env,
        proposer: Address,
        target: Address,
        fn_name: Symbol,
        data: Vec<Val>,
        salt: BytesN<32>,
        predecessor: Option<BytesN<32>>,
        delay: u64,
    ) -> Result<BytesN<32>, TimeLockError> {
        time_lock::schedule(
            &env,
            &proposer,
            &target,
            &fn_name,
            &data,
            &salt,
            &predecessor,
            delay,
        )
    }

    /*
     * Execute a ready operation containing a single transaction and return
     * the target's result.
     *
     * Emits a {CallExecuted} event.
     *
     * Requirements:
     *
     * - the caller must have the 'executor' role.
     * - the predecessor, if any, must have been executed.
     */
    pub fn execute(
        env: Env,
        executor: Address,
        target: Address,
        fn_name: Symbol,
        data: Vec<Val>,
        salt: BytesN<32>,
        predecessor: Option<BytesN<32>>,
    ) -> Result<Val, TimeLockError> {
        time_lock::execute(
            &env,
            &executor,
            &target,
            &fn_name,
            &data,
            &salt,
            &predecessor,
        )
    }

    /*
     * Cancel a pending operation.
     *
     * Emits an {OperationCancelled} event.
     *
     * Requirements:
     *
     * - the caller must have the 'canceller' role.
     */
    pub fn cancel(
        env: Env,
        canceller: Address,
        operation_id: BytesN<32>,
    ) -> Result<(), TimeLockError> {
        time_lock::cancel(&env, &canceller, &operation_id)
    }

    /*
     * Changes the minimum timelock duration for future operations.
     *
     * Emits a {MinDelayUpdated} event.
     *
     * Requirements:
     *
     * - the controller must be self-managed and the caller must be the owner.
     *   A decentralized controller has to schedule and later execute an
     *   operation targeting itself instead.
     */
    pub fn update_min_delay(env: Env, caller: Address, delay: u64) -> Result<(), TimeLockError> {
        admin::update_min_delay(&env, &caller, delay)
    }

    /*
     * Hands the admin role to a new owner, effective immediately.
     *
     * Emits an {OwnerUpdated} event.
     *
     * Requirements:
     *
     * - the controller must be self-managed and the caller must be the owner.
     */
    pub fn update_owner(env: Env, caller: Address, owner: Address) -> Result<(), TimeLockError> {
        admin::update_owner(&env, &caller, &owner)
    }

    /*
     * Grants a role to an account. Returns `false` if it already had it.
     *
     * Requirements:
     *
     * - the controller must be self-managed and the caller must be the owner.
     */
    pub fn grant_role(
        env: Env,
        caller: Address,
        account: Address,
        role: RoleLabel,
    ) -> Result<bool, TimeLockError> {
        admin::grant_role(&env, &caller, &account, &role)
    }

    /*
     * Revokes a role from an account. Returns `false` if it did not have it.
     *
     * Requirements:
     *
     * - the controller must be self-managed and the caller must be the owner.
     */
    pub fn revoke_role(
        env: Env,
        caller: Address,
        account: Address,
        role: RoleLabel,
    ) -> Result<bool, TimeLockError> {
        admin::revoke_role(&env, &caller, &account, &role)
    }

    /*
     * Returns the timestamp at which an operation becomes ready, `None` for
     * unknown operations.
     */
    pub fn get_schedule_lock_time(env: Env, operation_id: BytesN<32>) -> Option<u64> {
        time_lock::get_schedule_lock_time(&env, &operation_id)
    }

    pub fn get_operation_state(env: Env, operation_id: BytesN<32>) -> OperationState {
        time_lock::get_operation_state(&env, &operation_id)
    }

    /*
     * Returns the id an operation on this call gets, whatever its predecessor
     * and delay.
     */
    pub fn hash_operation(
        env: Env,
        target: Address,
        fn_name: Symbol,
        data: Vec<Val>,
        salt: BytesN<32>,
    ) -> BytesN<32> {
        time_lock::hash_operation(&env, &target, &fn_name, &data, &salt)
    }

    /*
     * Returns `true` if `account` has been granted `role`.
     */
    pub fn has_role(env: Env, account: Address, role: RoleLabel) -> bool {
        role_base::has_role(&env, &account, &role)
    }

    pub fn get_min_delay(env: Env) -> Result<u64, TimeLockError> {
        Ok(read_config(&env)?.min_delay)
    }

    pub fn get_owner(env: Env) -> Result<Option<Address>, TimeLockError> {
        Ok(read_config(&env)?.owner)
    }
}
