use std::path::Path;

use publishyy_core::ResolvedConfig;
use publishyy_project::{ConfigDiscovery, NpmProject};

use crate::Result;
use crate::traits::ProjectProvider;

pub struct FileSystemProjectProvider;

impl FileSystemProjectProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemProjectProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectProvider for FileSystemProjectProvider {
    fn discover_project(&self, start_path: &Path) -> Result<NpmProject> {
        Ok(publishyy_project::discover_project(start_path)?)
    }

    fn discover_config(&self, project: &NpmProject) -> Result<ConfigDiscovery> {
        Ok(publishyy_project::discover_config(&project.root)?)
    }

    fn load_config_file(&self, path: &Path) -> Result<ResolvedConfig> {
        Ok(publishyy_project::load_config_file(path)?)
    }

    fn top_level_entries(&self, root: &Path) -> Result<Vec<String>> {
        Ok(publishyy_project::top_level_entries(root)?)
    }
}
