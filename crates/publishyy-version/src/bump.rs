use publishyy_core::Classification;
use semver::{Prerelease, Version};

use crate::{Result, VersionError};

/// Bumps `version` the way `npm version <kind>` does.
///
/// A prerelease graduates to its release when the bump would not move past
/// it: `1.0.0-rc.1` patch-bumps to `1.0.0`, `1.1.0-rc.1` minor-bumps to `1.1.0`.
#[must_use]
pub fn bump_version(version: &Version, bump: Classification) -> Version {
    let mut new_version = version.clone();
    let is_prerelease = !version.pre.is_empty();
    new_version.pre = Prerelease::EMPTY;

    match bump {
        Classification::Major => {
            if !(is_prerelease && version.minor == 0 && version.patch == 0) {
                new_version.major += 1;
            }
            new_version.minor = 0;
            new_version.patch = 0;
        }
        Classification::Minor => {
            if !(is_prerelease && version.patch == 0) {
                new_version.minor += 1;
            }
            new_version.patch = 0;
        }
        Classification::Patch => {
            if !is_prerelease {
                new_version.patch += 1;
            }
        }
        Classification::None => return version.clone(),
    }

    new_version
}

/// Parses a version as typed by a user or stored in `package.json`.
///
/// A leading `v` is accepted.
///
/// # Errors
///
/// Returns [`VersionError::Invalid`] if the input is not a semantic version.
pub fn parse_version(input: &str) -> Result<Version> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

    Version::parse(trimmed).map_err(|source| VersionError::Invalid {
        input: input.to_string(),
        source,
    })
}
