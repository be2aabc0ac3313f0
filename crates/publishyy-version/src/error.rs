use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("invalid version '{input}'")]
    Invalid {
        input: String,
        #[source]
        source: semver::Error,
    },

    #[error("beta counter '{counter}' in '{version}' is not a number")]
    InvalidBetaCounter { version: String, counter: String },
}
