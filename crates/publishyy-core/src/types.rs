use std::fmt;

use clap::ValueEnum;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Size of the change between an installed dependency version and the latest
/// published one, decided by the most significant differing component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    None,
    Patch,
    Minor,
    Major,
}

impl Classification {
    #[must_use]
    pub fn is_update(self) -> bool {
        self != Self::None
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        };
        write!(f, "{s}")
    }
}


/// A step of the publishing pipeline. Stages run once each, in [`Stage::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    CheckUpdates,
    Build,
    CheckTypes,
    GenerateDocs,
    Format,
    Commit,
    Version,
    Push,
    Publish,
}

impl Stage {
    pub const ALL: [Self; 9] = [
        Self::CheckUpdates,
        Self::Build,
        Self::CheckTypes,
        Self::GenerateDocs,
        Self::Format,
        Self::Commit,
        Self::Version,
        Self::Push,
        Self::Publish,
    ];

    /// The config key that can answer this stage's question without a prompt.
    ///
    /// Commit, version, push and publish always ask.
    #[must_use]
    pub fn config_key(self) -> Option<&'static str> {
        match self {
            Self::CheckUpdates => Some("update"),
            Self::Build => Some("bundle"),
            Self::CheckTypes => Some("checkTypes"),
            Self::GenerateDocs => Some("typedoc"),
            Self::Format => Some("formatFolders"),
            Self::Commit | Self::Version | Self::Push | Self::Publish => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::CheckUpdates => "check updates",
            Self::Build => "build",
            Self::CheckTypes => "check types",
            Self::GenerateDocs => "generate docs",
            Self::Format => "format",
            Self::Commit => "commit",
            Self::Version => "version",
            Self::Push => "push",
            Self::Publish => "publish",
        };
        write!(f, "{s}")
    }
}

/// How the next release version is picked. Also accepted by `--bump`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VersionChoice {
    Patch,
    Minor,
    Major,
    Beta,
    Custom,
}

impl VersionChoice {
    pub const ALL: [Self; 5] = [
        Self::Patch,
        Self::Minor,
        Self::Major,
        Self::Beta,
        Self::Custom,
    ];

    /// Registry dist-tag used when publishing a version picked this way.
    #[must_use]
    pub fn dist_tag(self) -> Option<&'static str> {
        match self {
            Self::Beta => Some("beta"),
            _ => None,
        }
    }
}

impl fmt::Display for VersionChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
            Self::Beta => "beta",
            Self::Custom => "custom",
        };
        write!(f, "{s}")
    }
}

/// The subset of `package.json` the pipeline reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub version: String,
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
}

impl PackageMetadata {
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("package")
    }
}

/// Answers supplied by a config file. `None` means "ask the user".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    #[serde(default)]
    pub update: Option<bool>,
    #[serde(default)]
    pub bundle: Option<bool>,
    #[serde(default)]
    pub check_types: Option<bool>,
    #[serde(default)]
    pub typedoc: Option<bool>,
    #[serde(default)]
    pub format_folders: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyUpdateDecision {
    pub name: String,
    pub current_version: String,
    pub latest_version: String,
    pub classification: Classification,
    pub approved: bool,
}
