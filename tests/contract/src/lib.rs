#![no_std]

mod contract;

pub use crate::contract::{ExampleContract, ExampleContractClient, ExampleError};

#[cfg(any(test, feature = "testutils"))]
pub mod test {
    pub use crate::contract::{ExampleContract, ExampleContractClient, ExampleError};
}
