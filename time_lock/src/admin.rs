use soroban_sdk::{Address, Env, IntoVal, Symbol, TryFromVal, Val, Vec};

use crate::config::{
    extend_instance_ttl, read_config, write_config, ControllerConfig, TimeLockError,
};
use crate::role_base::{self, RoleLabel};

const UPDATE_MIN_DELAY: &str = "update_min_delay";
const UPDATE_OWNER: &str = "update_owner";
const GRANT_ROLE: &str = "grant_role";
const REVOKE_ROLE: &str = "revoke_role";

/// Checks that `caller` holds the admin role. Nobody does on a decentralized
/// controller.
fn require_owner(e: &Env, caller: &Address) -> Result<ControllerConfig, TimeLockError> {
    let config = read_config(e)?;
    caller.require_auth();
    if config.owner.as_ref() != Some(caller) {
        return Err(TimeLockError::Unauthorized);
    }
    Ok(config)
}

pub(crate) fn update_min_delay(
    e: &Env,
    caller: &Address,
    delay: u64,
) -> Result<(), TimeLockError> {
    require_owner(e, caller)?;
    set_min_delay(e, delay)
}

pub(crate) fn update_owner(
    e: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<(), TimeLockError> {
    if !read_config(e)?.is_self_managed() {
        return Err(TimeLockError::NotSelfManaged);
    }
    require_owner(e, caller)?;
    set_owner(e, new_owner)
}

pub(crate) fn grant_role(
    e: &Env,
    caller: &Address,
    account: &Address,
    role: &RoleLabel,
) -> Result<bool, TimeLockError> {
    require_owner(e, caller)?;
    role_base::grant_role(e, account, role)
}

pub(crate) fn revoke_role(
    e: &Env,
    caller: &Address,
    account: &Address,
    role: &RoleLabel,
) -> Result<bool, TimeLockError> {
    require_owner(e, caller)?;
    role_base::revoke_role(e, account, role)
}

/// Schedule-time filter for calls addressed to the controller itself.
pub(crate) fn check_self_call(
    e: &Env,
    config: &ControllerConfig,
    fn_name: &Symbol,
) -> Result<(), TimeLockError> {
    if *fn_name == Symbol::new(e, UPDATE_OWNER) {
        if !config.is_self_managed() {
            return Err(TimeLockError::NotSelfManaged);
        }
        return Ok(());
    }

    let known = [UPDATE_MIN_DELAY, GRANT_ROLE, REVOKE_ROLE];
    if known.iter().any(|name| *fn_name == Symbol::new(e, name)) {
        Ok(())
    } else {
        Err(TimeLockError::InvalidFuncName)
    }
}

/// Applies an executed operation whose target is the controller. No owner
/// check here; the proposer, executor and delay gates have already passed.
pub(crate) fn apply_self_call(
    e: &Env,
    fn_name: &Symbol,
    data: &Vec<Val>,
) -> Result<Val, TimeLockError> {
    if *fn_name == Symbol::new(e, UPDATE_MIN_DELAY) {
        let delay: u64 = arg(e, data, 0, 1)?;
        set_min_delay(e, delay)?;
        Ok(().into_val(e))
    } else if *fn_name == Symbol::new(e, UPDATE_OWNER) {
        let new_owner: Address = arg(e, data, 0, 1)?;
        set_owner(e, &new_owner)?;
        Ok(().into_val(e))
    } else if *fn_name == Symbol::new(e, GRANT_ROLE) {
        let account: Address = arg(e, data, 0, 2)?;
        let role: RoleLabel = arg(e, data, 1, 2)?;
        Ok(role_base::grant_role(e, &account, &role)?.into_val(e))
    } else if *fn_name == Symbol::new(e, REVOKE_ROLE) {
        let account: Address = arg(e, data, 0, 2)?;
        let role: RoleLabel = arg(e, data, 1, 2)?;
        Ok(role_base::revoke_role(e, &account, &role)?.into_val(e))
    } else {
        Err(TimeLockError::InvalidFuncName)
    }
}

fn arg<T: TryFromVal<Env, Val>>(
    e: &Env,
    data: &Vec<Val>,
    index: u32,
    arity: u32,
) -> Result<T, TimeLockError> {
    if data.len() != arity {
        return Err(TimeLockError::InvalidParams);
    }
    let value = data.get(index).ok_or(TimeLockError::InvalidParams)?;
    T::try_from_val(e, &value).map_err(|_| TimeLockError::InvalidParams)
}

fn set_min_delay(e: &Env, delay: u64) -> Result<(), TimeLockError> {
    let mut config = read_config(e)?;
    config.min_delay = delay;
    write_config(e, &config);
    extend_instance_ttl(e);

    e.events()
        .publish((Symbol::new(e, "MinDelayUpdated"),), delay);
    Ok(())
}

// The old owner loses admin the moment this commits.
fn set_owner(e: &Env, new_owner: &Address) -> Result<(), TimeLockError> {
    let mut config = read_config(e)?;
    if !config.is_self_managed() {
        return Err(TimeLockError::NotSelfManaged);
    }
    config.owner = Some(new_owner.clone());
    write_config(e, &config);
    extend_instance_ttl(e);

    e.events()
        .publish((Symbol::new(e, "OwnerUpdated"),), new_owner.clone());
    Ok(())
}
