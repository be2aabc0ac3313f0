use publishyy_core::Stage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Operation(#[from] publishyy_operations::OperationError),

    #[error("cannot determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("operation cancelled during {stage} stage")]
    Cancelled { stage: Stage },
}

pub type Result<T> = std::result::Result<T, CliError>;
