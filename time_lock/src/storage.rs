use soroban_sdk::{contracttype, BytesN, Env};

use crate::config::{
    DataKey, DAY_IN_LEDGERS, LEDGER_SECONDS, OPERATION_MAX_EXTEND_AMOUNT,
    PERSISTENT_EXTEND_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum OperationState {
    Unset = 0,
    Pending = 1,
    Ready = 2,
    Executed = 3,
    Cancelled = 4,
}

/// Bookkeeping for one scheduled call. `status` only ever holds `Pending`,
/// `Executed` or `Cancelled`; `Ready` is derived from the clock on read.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Operation {
    pub ready_at: u64,
    /// All zeros when the operation does not depend on another one.
    pub predecessor: BytesN<32>,
    pub status: OperationState,
}

impl Operation {
    pub fn pending(e: &Env, ready_at: u64, predecessor: &Option<BytesN<32>>) -> Self {
        Operation {
            ready_at,
            predecessor: predecessor.clone().unwrap_or_else(|| no_predecessor(e)),
            status: OperationState::Pending,
        }
    }

    pub fn predecessor(&self) -> Option<BytesN<32>> {
        if self.predecessor.to_array() == [0_u8; 32] {
            None
        } else {
            Some(self.predecessor.clone())
        }
    }

    pub fn is_live(&self) -> bool {
        self.status == OperationState::Pending
    }

    pub fn is_due(&self, ledger_time: u64) -> bool {
        ledger_time >= self.ready_at
    }
}

pub(crate) fn no_predecessor(e: &Env) -> BytesN<32> {
    BytesN::from_array(e, &[0_u8; 32])
}

pub(crate) fn read_operation(e: &Env, operation_id: &BytesN<32>) -> Option<Operation> {
    e.storage()
        .persistent()
        .get(&DataKey::Operation(operation_id.clone()))
}

/// Stores the record and keeps it alive at least a day past `ready_at`.
pub(crate) fn write_operation(e: &Env, operation_id: &BytesN<32>, operation: &Operation) {
    let key = DataKey::Operation(operation_id.clone());
    let extend_to = extend_amount(e, operation.ready_at);
    e.storage().persistent().set(&key, operation);
    e.storage()
        .persistent()
        .extend_ttl(&key, extend_to - DAY_IN_LEDGERS, extend_to);
}

pub(crate) fn extend_operation_ttl(e: &Env, operation_id: &BytesN<32>) {
    let key = DataKey::Operation(operation_id.clone());
    if e.storage().persistent().has(&key) {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_EXTEND_AMOUNT);
    }
}

fn extend_amount(e: &Env, ready_at: u64) -> u32 {
    let until_due = ready_at.saturating_sub(e.ledger().timestamp()) / LEDGER_SECONDS;
    until_due
        .saturating_add(DAY_IN_LEDGERS as u64)
        .clamp(
            PERSISTENT_EXTEND_AMOUNT as u64,
            OPERATION_MAX_EXTEND_AMOUNT as u64,
        ) as u32
}

pub(crate) fn set_status(
    e: &Env,
    operation_id: &BytesN<32>,
    mut operation: Operation,
    status: OperationState,
) {
    operation.status = status;
    write_operation(e, operation_id, &operation);
}

pub(crate) fn is_executed(e: &Env, operation_id: &BytesN<32>) -> bool {
    read_operation(e, operation_id).map_or(false, |op| op.status == OperationState::Executed)
}

pub(crate) fn get_operation_state(e: &Env, operation_id: &BytesN<32>) -> OperationState {
    let operation = match read_operation(e, operation_id) {
        Some(operation) => operation,
        None => return OperationState::Unset,
    };
    if !operation.is_live() {
        return operation.status;
    }

    let predecessor_done = match operation.predecessor() {
        Some(predecessor) => is_executed(e, &predecessor),
        None => true,
    };
    if operation.is_due(e.ledger().timestamp()) && predecessor_done {
        OperationState::Ready
    } else {
        OperationState::Pending
    }
}
