use crate::{Result, VersionError};

/// Release line that beta versions are cut from.
pub const BETA_BASE: &str = "0.1.120";

/// Computes the next beta version on top of `base`.
///
/// A version outside the `<base>-beta…` line restarts the line at `<base>-beta.0`.
/// Otherwise the last dot-separated token is treated as the beta counter and
/// replaced by its successor, so `…-beta.9` becomes `…-beta.10`.
///
/// # Errors
///
/// Returns [`VersionError::InvalidBetaCounter`] if the counter is not a number.
pub fn next_beta_version(current: &str, base: &str) -> Result<String> {
    let prefix = format!("{base}-beta");

    if current.len() <= prefix.len() || !current.starts_with(&prefix) {
        return Ok(format!("{prefix}.0"));
    }

    let (head, counter) = current
        .rsplit_once('.')
        .ok_or_else(|| invalid_counter(current, current))?;

    let next = counter
        .parse::<u64>()
        .map_err(|_| invalid_counter(current, counter))?
        + 1;

    Ok(format!("{head}.{next}"))
}

fn invalid_counter(version: &str, counter: &str) -> VersionError {
    VersionError::InvalidBetaCounter {
        version: version.to_string(),
        counter: counter.to_string(),
    }
}
