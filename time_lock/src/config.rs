use soroban_sdk::{contracterror, contracttype, Address, BytesN, Env, Symbol, Val, Vec};

pub(crate) const MAX_ACCOUNTS_NUM: u32 = 10;

pub(crate) const LEDGER_SECONDS: u64 = 5;
pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_EXTEND_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_EXTEND_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_EXTEND_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_EXTEND_AMOUNT - DAY_IN_LEDGERS;
// Upper bound for keeping a long-delayed operation alive until it is due.
pub(crate) const OPERATION_MAX_EXTEND_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Operation(BytesN<32>),
    MinDelay,
    Owner,
}

/// Controller-wide settings, written once by `initialize` and afterwards
/// only through the admin paths.
///
/// `owner` is `None` for a decentralized controller: every administrative
/// change then has to travel through `schedule`/`execute` like any other call.
/// Each field lives under its own instance key; the mode is decided by whether
/// `DataKey::Owner` is present.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ControllerConfig {
    pub min_delay: u64,
    pub owner: Option<Address>,
}

impl ControllerConfig {
    pub fn is_self_managed(&self) -> bool {
        self.owner.is_some()
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[contracterror]
#[repr(u32)]
pub enum TimeLockError {
    InvalidParams = 0,
    NotInitialized = 1,
    AlreadyInitialized = 2,
    AlreadyScheduled = 3,
    InvalidDelay = 4,
    NotReady = 5,
    PredecessorNotExecuted = 6,
    ExceedMaxCount = 7,
    InvalidStatus = 8,
    Unauthorized = 9,
    NotFound = 10,
    InvocationFailed = 11,
    InvalidFuncName = 12,
    NotSelfManaged = 13,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CallExecutedEvent {
    pub opt_id: BytesN<32>,
    pub target: Address,
    pub fn_name: Symbol,
    pub data: Vec<Val>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CallScheduledEvent {
    pub opt_id: BytesN<32>,
    pub target: Address,
    pub fn_name: Symbol,
    pub data: Vec<Val>,
    pub predecessor: BytesN<32>,
    pub delay: u64,
}

pub(crate) fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::MinDelay)
}

pub(crate) fn read_config(e: &Env) -> Result<ControllerConfig, TimeLockError> {
    let min_delay = e
        .storage()
        .instance()
        .get(&DataKey::MinDelay)
        .ok_or(TimeLockError::NotInitialized)?;
    let owner = e.storage().instance().get(&DataKey::Owner);
    Ok(ControllerConfig { min_delay, owner })
}

pub(crate) fn write_config(e: &Env, config: &ControllerConfig) {
    e.storage()
        .instance()
        .set(&DataKey::MinDelay, &config.min_delay);
    match &config.owner {
        Some(owner) => e.storage().instance().set(&DataKey::Owner, owner),
        None => e.storage().instance().remove(&DataKey::Owner),
    }
}

pub(crate) fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_EXTEND_AMOUNT);
}
