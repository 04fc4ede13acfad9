#![no_std]

mod admin;
mod config;
mod contract;
mod identity;
mod role_base;
mod storage;
mod time_lock;

pub use crate::config::TimeLockError;
pub use crate::contract::{TimeLockController, TimeLockControllerClient};
pub use crate::role_base::RoleLabel;
pub use crate::storage::OperationState;

#[cfg(any(test, feature = "testutils"))]
pub mod test {

    pub use crate::contract::{TimeLockController, TimeLockControllerClient};

    pub use crate::config::{
        CallExecutedEvent, CallScheduledEvent, ControllerConfig, DataKey, TimeLockError,
    };

    pub use crate::role_base::{RoleKey, RoleLabel};

    pub use crate::storage::{Operation, OperationState};
}
