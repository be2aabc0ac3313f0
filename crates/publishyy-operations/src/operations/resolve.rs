use tracing::debug;

use crate::Result;
use crate::traits::Reply;

/// Uses the config value when one was supplied, otherwise asks.
///
/// # Errors
///
/// Returns [`crate::OperationError::Cancelled`] if the prompt was cancelled,
/// or whatever error the prompt itself produced.
pub fn resolve_or_prompt<T, F>(config_value: Option<T>, prompt: F) -> Result<T>
where
    T: std::fmt::Debug,
    F: FnOnce() -> Result<Reply<T>>,
{
    if let Some(value) = config_value {
        debug!(?value, "answered from config");
        return Ok(value);
    }
    prompt()?.into_result()
}
