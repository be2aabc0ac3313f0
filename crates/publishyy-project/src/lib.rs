mod config;
mod error;
mod project;

pub const PACKAGE_MANIFEST: &str = "package.json";

pub use config::{ConfigDiscovery, discover_config, load_config_file};
pub use error::ProjectError;
pub use project::{NpmProject, discover_project, read_package_metadata, top_level_entries};

pub type Result<T> = std::result::Result<T, ProjectError>;
