use soroban_sdk::{
    log, xdr::ToXdr, Address, BytesN, Env, InvokeError, Symbol, Val, Vec,
};

use crate::admin;
use crate::config::{
    extend_instance_ttl, is_initialized, read_config, write_config, CallExecutedEvent,
    CallScheduledEvent, ControllerConfig, TimeLockError, MAX_ACCOUNTS_NUM,
};
use crate::identity::hash_call;
use crate::role_base::{self, RoleLabel};
use crate::storage::{self, Operation, OperationState};

pub(crate) fn initialize(
    env: &Env,
    min_delay: u64,
    proposers: &Vec<Address>,
    executors: &Vec<Address>,
    owner: &Option<Address>,
) -> Result<(), TimeLockError> {
    if is_initialized(env) {
        return Err(TimeLockError::AlreadyInitialized);
    }

    if proposers.is_empty() || executors.is_empty() {
        return Err(TimeLockError::InvalidParams);
    }

    if proposers.len() > MAX_ACCOUNTS_NUM || executors.len() > MAX_ACCOUNTS_NUM {
        return Err(TimeLockError::ExceedMaxCount);
    }

    write_config(
        env,
        &ControllerConfig {
            min_delay,
            owner: owner.clone(),
        },
    );
    extend_instance_ttl(env);

    env.events()
        .publish((Symbol::new(env, "MinDelayUpdated"),), min_delay);
    if let Some(owner) = owner {
        env.events()
            .publish((Symbol::new(env, "OwnerSet"),), owner.clone());
    }

    for proposer in proposers.iter() {
        role_base::grant_role(env, &proposer, &RoleLabel::Proposer)?;
        role_base::grant_role(env, &proposer, &RoleLabel::Canceller)?;
    }

    for executor in executors.iter() {
        role_base::grant_role(env, &executor, &RoleLabel::Executor)?;
    }

    Ok(())
}

pub(crate) fn schedule(
    env: &Env,
    proposer: &Address,
    target: &Address,
    fn_name: &Symbol,
    data: &Vec<Val>,
    salt: &BytesN<32>,
    predecessor: &Option<BytesN<32>>,
    delay: u64,
) -> Result<BytesN<32>, TimeLockError> {
    let config = read_config(env)?;
    role_base::require_role(env, proposer, &RoleLabel::Proposer)?;

    if is_self(env, target) {
        admin::check_self_call(env, &config, fn_name)?;
    } else if !is_contract(env, target) {
        return Err(TimeLockError::InvalidParams);
    }

    if delay < config.min_delay {
        return Err(TimeLockError::InvalidDelay);
    }

    let operation_id = hash_call(env, target, fn_name, data, salt);

    if let Some(predecessor) = predecessor {
        if *predecessor == operation_id {
            return Err(TimeLockError::InvalidParams);
        }
        if storage::read_operation(env, predecessor).is_none() {
            return Err(TimeLockError::NotFound);
        }
        storage::extend_operation_ttl(env, predecessor);
    }

    match storage::read_operation(env, &operation_id) {
        Some(existing) if existing.status != OperationState::Cancelled => {
            return Err(TimeLockError::AlreadyScheduled);
        }
        _ => {}
    }

    let ready_at = env
        .ledger()
        .timestamp()
        .checked_add(delay)
        .ok_or(TimeLockError::InvalidDelay)?;
    storage::write_operation(
        env,
        &operation_id,
        &Operation::pending(env, ready_at, predecessor),
    );
    extend_instance_ttl(env);

    let actual_predecessor = match predecessor {
        Some(predecessor) => predecessor.clone(),
        None => storage::no_predecessor(env),
    };

    env.events().publish(
        (Symbol::new(env, "CallScheduled"),),
        CallScheduledEvent {
            opt_id: operation_id.clone(),
            target: target.clone(),
            fn_name: fn_name.clone(),
            data: data.clone(),
            predecessor: actual_predecessor,
            delay,
        },
    );

    Ok(operation_id)
}

pub(crate) fn execute(
    env: &Env,
    executor: &Address,
    target: &Address,
    fn_name: &Symbol,
    data: &Vec<Val>,
    salt: &BytesN<32>,
    predecessor: &Option<BytesN<32>>,
) -> Result<Val, TimeLockError> {
    read_config(env)?;
    role_base::require_role(env, executor, &RoleLabel::Executor)?;

    let operation_id = hash_call(env, target, fn_name, data, salt);
    let operation = execute_check(env, &operation_id, predecessor)?;

    // The host rejects re-entry, so calls addressed to the controller itself
    // are applied in place.
    let result = if is_self(env, target) {
        admin::apply_self_call(env, fn_name, data)?
    } else {
        match env.try_invoke_contract::<Val, InvokeError>(target, fn_name, data.clone()) {
            Ok(Ok(value)) => value,
            Err(Ok(InvokeError::Contract(code))) => {
                log!(
                    env,
                    "call {} on {} failed with contract error {}",
                    fn_name.clone(),
                    target.clone(),
                    code
                );
                return Err(TimeLockError::InvocationFailed);
            }
            _ => {
                log!(env, "call {} on {} aborted", fn_name.clone(), target.clone());
                return Err(TimeLockError::InvocationFailed);
            }
        }
    };

    storage::set_status(env, &operation_id, operation, OperationState::Executed);
    extend_instance_ttl(env);

    env.events().publish(
        (Symbol::new(env, "CallExecuted"),),
        CallExecutedEvent {
            opt_id: operation_id,
            target: target.clone(),
            fn_name: fn_name.clone(),
            data: data.clone(),
        },
    );

    Ok(result)
}

pub(crate) fn cancel(
    env: &Env,
    canceller: &Address,
    operation_id: &BytesN<32>,
) -> Result<(), TimeLockError> {
    read_config(env)?;
    role_base::require_role(env, canceller, &RoleLabel::Canceller)?;

    let operation = storage::read_operation(env, operation_id).ok_or(TimeLockError::NotFound)?;
    if !operation.is_live() {
        return Err(TimeLockError::InvalidStatus);
    }

    storage::set_status(env, operation_id, operation, OperationState::Cancelled);
    extend_instance_ttl(env);

    env.events().publish(
        (Symbol::new(env, "OperationCancelled"),),
        operation_id.clone(),
    );

    Ok(())
}

pub(crate) fn get_schedule_lock_time(env: &Env, operation_id: &BytesN<32>) -> Option<u64> {
    storage::read_operation(env, operation_id).map(|operation| operation.ready_at)
}

pub(crate) fn get_operation_state(env: &Env, operation_id: &BytesN<32>) -> OperationState {
    storage::get_operation_state(env, operation_id)
}

pub(crate) fn hash_operation(
    env: &Env,
    target: &Address,
    fn_name: &Symbol,
    data: &Vec<Val>,
    salt: &BytesN<32>,
) -> BytesN<32> {
    hash_call(env, target, fn_name, data, salt)
}

fn execute_check(
    env: &Env,
    operation_id: &BytesN<32>,
    predecessor: &Option<BytesN<32>>,
) -> Result<Operation, TimeLockError> {
    let operation = storage::read_operation(env, operation_id)
        .filter(|operation| operation.is_live())
        .ok_or(TimeLockError::NotFound)?;

    let stored_predecessor = operation.predecessor();
    if stored_predecessor != *predecessor {
        return Err(TimeLockError::InvalidParams);
    }

    if !operation.is_due(env.ledger().timestamp()) {
        return Err(TimeLockError::NotReady);
    }

    if let Some(predecessor) = &stored_predecessor {
        if !storage::is_executed(env, predecessor) {
            return Err(TimeLockError::PredecessorNotExecuted);
        }
        storage::extend_operation_ttl(env, predecessor);
    }

    Ok(operation)
}

fn is_self(env: &Env, target: &Address) -> bool {
    *target == env.current_contract_address()
}

// Strkey of a contract address starts with 'C'; the XDR of the string puts the
// first character after the type and length words.
fn is_contract(env: &Env, address: &Address) -> bool {
    let address_ = address.to_string().to_xdr(env);
    address_.get(8).map_or(false, |first_char| first_char == b'C')
}
