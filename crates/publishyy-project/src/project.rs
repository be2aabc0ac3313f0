use std::path::{Path, PathBuf};

use publishyy_core::PackageMetadata;

use crate::error::ProjectError;
use crate::{PACKAGE_MANIFEST, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpmProject {
    pub root: PathBuf,
    pub package: PackageMetadata,
}

/// Finds the nearest `package.json` at or above `start_dir` and reads it.
///
/// # Errors
///
/// Returns `ProjectError` if no manifest can be found or if it cannot be parsed.
pub fn discover_project(start_dir: &Path) -> Result<NpmProject> {
    let start_dir = start_dir
        .canonicalize()
        .map_err(|source| ProjectError::ManifestRead {
            path: start_dir.to_path_buf(),
            source,
        })?;

    let root = find_project_root(&start_dir)?;
    let package = read_package_metadata(&root.join(PACKAGE_MANIFEST))?;

    Ok(NpmProject { root, package })
}

/// # Errors
///
/// Returns `ProjectError` if the file cannot be read or is not a valid manifest.
pub fn read_package_metadata(path: &Path) -> Result<PackageMetadata> {
    let content = std::fs::read_to_string(path).map_err(|source| ProjectError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ProjectError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Names of the entries directly inside `root`, sorted.
///
/// # Errors
///
/// Returns `ProjectError::DirectoryRead` if the directory cannot be listed.
pub fn top_level_entries(root: &Path) -> Result<Vec<String>> {
    let read_error = |source| ProjectError::DirectoryRead {
        path: root.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(root).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        entries.push(entry.file_name().to_string_lossy().into_owned());
    }
    entries.sort();

    Ok(entries)
}

fn find_project_root(start_dir: &Path) -> Result<PathBuf> {
    start_dir
        .ancestors()
        .find(|dir| dir.join(PACKAGE_MANIFEST).is_file())
        .map(Path::to_path_buf)
        .ok_or_else(|| ProjectError::NotFound {
            start_dir: start_dir.to_path_buf(),
        })
}
