use publishyy_core::Stage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Project(#[from] publishyy_project::ProjectError),

    #[error(transparent)]
    Version(#[from] publishyy_version::VersionError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("failed to start '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot split arguments '{input}'")]
    InvalidArguments {
        input: String,
        #[source]
        source: shell_words::ParseError,
    },

    #[error("{stage} stage failed: {output}")]
    StageFailed { stage: Stage, output: String },

    #[error("operation cancelled")]
    Cancelled,

    #[error("interaction required but no terminal is available")]
    InteractionRequired,
}

pub type Result<T> = std::result::Result<T, OperationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_failed_names_stage_and_output() {
        let err = OperationError::StageFailed {
            stage: Stage::Build,
            output: "error TS2304: Cannot find name 'foo'".to_string(),
        };

        let msg = err.to_string();

        assert!(msg.starts_with("build stage failed"));
        assert!(msg.contains("TS2304"));
    }

    #[test]
    fn invalid_arguments_keeps_parse_error_as_source() {
        let source = shell_words::split("'unterminated").expect_err("unbalanced quote");
        let err = OperationError::InvalidArguments {
            input: "'unterminated".to_string(),
            source,
        };

        assert!(err.to_string().contains("'unterminated"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn cancelled_error_message() {
        let err = OperationError::Cancelled;

        assert!(err.to_string().contains("cancelled"));
    }
}
