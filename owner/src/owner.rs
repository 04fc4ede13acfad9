//! Single-owner access control for contracts that hand their maintenance
//! entry points to a timelock controller.
//!
//! The owner is usually the controller's contract address: calls the
//! controller makes to the owned contract carry its authorization, so
//! `only_owner` entry points can only run through an executed operation.

use soroban_sdk::{contracterror, contracttype, panic_with_error, Address, Env, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum OwnerError {
    NotSet = 1001,
    AlreadySet = 1002,
}

#[derive(Clone)]
#[contracttype]
enum OwnerKey {
    Owner,
}

pub fn has_owner(e: &Env) -> bool {
    e.storage().instance().has(&OwnerKey::Owner)
}

pub fn read_owner(e: &Env) -> Option<Address> {
    e.storage().instance().get(&OwnerKey::Owner)
}

pub fn is_owner(e: &Env, account: &Address) -> bool {
    read_owner(e).map_or(false, |owner| owner == *account)
}

/// Records the first owner. Panics if one is already set; use
/// `transfer_ownership` afterwards.
pub fn set_owner(e: &Env, owner: &Address) {
    if has_owner(e) {
        panic_with_error!(e, OwnerError::AlreadySet);
    }
    write_owner(e, owner);
    e.events()
        .publish((Symbol::new(e, "OwnerSet"),), owner.clone());
}

pub fn transfer_ownership(e: &Env, new_owner: &Address) {
    only_owner(e);
    write_owner(e, new_owner);
    e.events()
        .publish((Symbol::new(e, "OwnerUpdated"),), new_owner.clone());
}

/// Requires the current owner's authorization for this invocation.
pub fn only_owner(e: &Env) {
    match read_owner(e) {
        Some(owner) => owner.require_auth(),
        None => panic_with_error!(e, OwnerError::NotSet),
    }
}

fn write_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&OwnerKey::Owner, owner);
}
