use publishyy_core::Classification;

/// Removes range operators such as `^`, `~` or `>=` from a dependency requirement.
#[must_use]
pub fn strip_requirement(requirement: &str) -> &str {
    requirement
        .trim()
        .trim_start_matches(['^', '~', '=', '>', '<', 'v', ' '])
}

/// Parses `MAJOR.MINOR.PATCH` where every component is a plain decimal number.
///
/// Anything else (prerelease suffixes, wildcards, two or four components) yields `None`.
#[must_use]
pub fn parse_triple(version: &str) -> Option<(u64, u64, u64)> {
    let mut parts = version.split('.');
    let major = parse_component(parts.next()?)?;
    let minor = parse_component(parts.next()?)?;
    let patch = parse_component(parts.next()?)?;

    if parts.next().is_some() {
        return None;
    }

    Some((major, minor, patch))
}

fn parse_component(component: &str) -> Option<u64> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    component.parse().ok()
}

/// Classifies the difference between two versions by their most significant
/// differing component.
///
/// Both inputs may carry requirement prefixes (`^1.2.3`). Returns `None` when
/// either side is not a plain three-component numeric version.
#[must_use]
pub fn classify(current: &str, latest: &str) -> Option<Classification> {
    let current = parse_triple(strip_requirement(current))?;
    let latest = parse_triple(strip_requirement(latest))?;

    let classification = if current.0 != latest.0 {
        Classification::Major
    } else if current.1 != latest.1 {
        Classification::Minor
    } else if current.2 != latest.2 {
        Classification::Patch
    } else {
        Classification::None
    };

    Some(classification)
}
