mod beta;
mod bump;
mod compare;
mod error;

pub use beta::{BETA_BASE, next_beta_version};
pub use bump::{bump_version, parse_version};
pub use compare::{classify, parse_triple, strip_requirement};
pub use error::VersionError;

pub type Result<T> = std::result::Result<T, VersionError>;
