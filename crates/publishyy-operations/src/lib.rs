mod error;
pub mod invocations;
pub mod operations;
pub mod providers;
pub mod traits;
mod types;

#[cfg(test)]
pub mod mocks;

pub use error::{OperationError, Result};
pub use types::{CommandOutput, Invocation};
