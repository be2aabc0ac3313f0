//! The external commands the pipeline runs, one constructor per intent.

use crate::error::OperationError;
use crate::{Invocation, Result};

#[must_use]
pub fn npm_view_version(package: &str) -> Invocation {
    Invocation::new("npm", ["view", package, "version"])
}

#[must_use]
pub fn npm_install_latest(packages: &[&str]) -> Invocation {
    let args = std::iter::once("install".to_string())
        .chain(packages.iter().map(|name| format!("{name}@latest")));
    Invocation::new("npm", args)
}

#[must_use]
pub fn npm_install_dev(packages: &[&str]) -> Invocation {
    let args = ["install", "-D"].into_iter().chain(packages.iter().copied());
    Invocation::new("npm", args)
}

#[must_use]
pub fn npx(tool: &str, args: &[&str]) -> Invocation {
    Invocation::new("npx", std::iter::once(tool).chain(args.iter().copied()))
}

/// Formats the selected entries, or the whole tree when `./` is among them.
#[must_use]
pub fn prettier_write(entries: &[String]) -> Invocation {
    let mut args = vec!["prettier".to_string(), "--write".to_string()];
    if entries.iter().any(|entry| entry == "./") {
        args.push(".".to_string());
    } else {
        args.extend(entries.iter().cloned());
    }
    Invocation::new("npx", args)
}

/// # Errors
///
/// Returns [`OperationError::InvalidArguments`] if `pathspec` has unbalanced quotes.
pub fn git_add(pathspec: &str) -> Result<Invocation> {
    let mut args = vec!["add".to_string()];
    args.extend(split_words(pathspec)?);
    Ok(Invocation::new("git", args))
}

#[must_use]
pub fn git_commit(message: &str) -> Invocation {
    Invocation::new("git", ["commit", "-m", message])
}

/// # Errors
///
/// Returns [`OperationError::InvalidArguments`] if `extra` has unbalanced quotes.
pub fn git_push(extra: &str) -> Result<Invocation> {
    let mut args = vec!["push".to_string()];
    args.extend(split_words(extra)?);
    Ok(Invocation::new("git", args))
}

#[must_use]
pub fn npm_version(version: &str) -> Invocation {
    Invocation::new("npm", ["version", version])
}

#[must_use]
pub fn npm_publish(dist_tag: Option<&str>) -> Invocation {
    let mut args = vec!["publish"];
    if let Some(tag) = dist_tag {
        args.extend(["--tag", tag]);
    }
    Invocation::new("npm", args)
}

fn split_words(input: &str) -> Result<Vec<String>> {
    shell_words::split(input).map_err(|source| OperationError::InvalidArguments {
        input: input.to_string(),
        source,
    })
}
