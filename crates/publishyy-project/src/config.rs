use std::path::{Path, PathBuf};

use publishyy_core::ResolvedConfig;

use crate::Result;
use crate::error::ProjectError;

/// Config files that can be read, in lookup order.
const READABLE_CONFIG_FILES: &[&str] = &["pubconfig.json", "pub.config.toml"];

/// Script configs are recognized so they can be reported, but never executed.
const SCRIPT_CONFIG_FILES: &[&str] = &["pub.config.js", "pub.config.ts"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigDiscovery {
    Found {
        path: PathBuf,
        config: ResolvedConfig,
    },
    Unsupported {
        path: PathBuf,
    },
    Missing,
}

impl ConfigDiscovery {
    /// The config to run with; anything but a readable file means "ask for everything".
    #[must_use]
    pub fn into_config(self) -> ResolvedConfig {
        match self {
            Self::Found { config, .. } => config,
            Self::Unsupported { .. } | Self::Missing => ResolvedConfig::default(),
        }
    }
}

/// Looks for a config file in the project root.
///
/// # Errors
///
/// Returns `ProjectError` if a config file exists but cannot be read or parsed.
pub fn discover_config(root: &Path) -> Result<ConfigDiscovery> {
    for name in READABLE_CONFIG_FILES {
        let path = root.join(name);
        if path.is_file() {
            let config = load_config_file(&path)?;
            return Ok(ConfigDiscovery::Found { path, config });
        }
    }

    for name in SCRIPT_CONFIG_FILES {
        let path = root.join(name);
        if path.is_file() {
            return Ok(ConfigDiscovery::Unsupported { path });
        }
    }

    Ok(ConfigDiscovery::Missing)
}

/// Reads a config file, choosing the format by extension: `.json` is JSON,
/// everything else is TOML.
///
/// # Errors
///
/// Returns `ProjectError` if the file cannot be read or parsed.
pub fn load_config_file(path: &Path) -> Result<ResolvedConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| ProjectError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content).map_err(|source| ProjectError::ConfigParseJson {
            path: path.to_path_buf(),
            source,
        })
    } else {
        toml::from_str(&content).map_err(|source| ProjectError::ConfigParseToml {
            path: path.to_path_buf(),
            source,
        })
    }
}
