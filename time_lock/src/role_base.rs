use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::config::{
    read_config, TimeLockError, PERSISTENT_EXTEND_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

#[derive(Clone)]
#[contracttype]
pub enum RoleKey {
    Proposers(Address),
    Cancellers(Address),
    Executors(Address),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum RoleLabel {
    Proposer = 1,
    Executor = 2,
    Canceller = 3,
    Admin = 4,
}

/// Admin is held by the controller owner and never stored as a membership.
fn role_key(account: &Address, role: &RoleLabel) -> Option<RoleKey> {
    match role {
        RoleLabel::Proposer => Some(RoleKey::Proposers(account.clone())),
        RoleLabel::Executor => Some(RoleKey::Executors(account.clone())),
        RoleLabel::Canceller => Some(RoleKey::Cancellers(account.clone())),
        RoleLabel::Admin => None,
    }
}

pub(crate) fn has_role(e: &Env, account: &Address, role: &RoleLabel) -> bool {
    match role_key(account, role) {
        Some(key) => is_role(e, &key),
        None => read_config(e)
            .ok()
            .and_then(|config| config.owner)
            .map_or(false, |owner| owner == *account),
    }
}

pub(crate) fn require_role(
    e: &Env,
    account: &Address,
    role: &RoleLabel,
) -> Result<(), TimeLockError> {
    account.require_auth();
    check_role(e, account, role)
}

/// Like `has_role`, but keeps a membership that is in use from being archived.
fn check_role(e: &Env, account: &Address, role: &RoleLabel) -> Result<(), TimeLockError> {
    if !has_role(e, account, role) {
        return Err(TimeLockError::Unauthorized);
    }
    if let Some(key) = role_key(account, role) {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_EXTEND_AMOUNT);
    }
    Ok(())
}

pub(crate) fn grant_role(
    e: &Env,
    account: &Address,
    role: &RoleLabel,
) -> Result<bool, TimeLockError> {
    let key = role_key(account, role).ok_or(TimeLockError::InvalidParams)?;
    let res = set_role(e, &key);
    if res {
        e.events().publish(
            (Symbol::new(e, "RoleGranted"), *role),
            account.clone(),
        );
    }
    Ok(res)
}

pub(crate) fn revoke_role(
    e: &Env,
    account: &Address,
    role: &RoleLabel,
) -> Result<bool, TimeLockError> {
    let key = role_key(account, role).ok_or(TimeLockError::InvalidParams)?;
    let res = unset_role(e, &key);
    if res {
        e.events().publish(
            (Symbol::new(e, "RoleRevoked"), *role),
            account.clone(),
        );
    }
    Ok(res)
}

fn is_role(e: &Env, key: &RoleKey) -> bool {
    e.storage().persistent().has(key)
}

fn set_role(e: &Env, key: &RoleKey) -> bool {
    if !is_role(e, key) {
        e.storage().persistent().set(key, &true);
        e.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_EXTEND_AMOUNT);
        true
    } else {
        false
    }
}

fn unset_role(e: &Env, key: &RoleKey) -> bool {
    if is_role(e, key) {
        e.storage().persistent().remove(key);
        true
    } else {
        false
    }
}
