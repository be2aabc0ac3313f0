use std::path::Path;

use publishyy_project::{ConfigDiscovery, NpmProject};

use crate::Result;

pub trait ProjectProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if no `package.json` can be found or parsed.
    fn discover_project(&self, start_path: &Path) -> Result<NpmProject>;

    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    fn discover_config(&self, project: &NpmProject) -> Result<ConfigDiscovery>;

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    fn load_config_file(&self, path: &Path) -> Result<publishyy_core::ResolvedConfig>;

    /// # Errors
    ///
    /// Returns an error if the project root cannot be listed.
    fn top_level_entries(&self, root: &Path) -> Result<Vec<String>>;
}
