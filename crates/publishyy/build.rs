use std::process::Command;

use chrono::Utc;

fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/");

    let version = env!("CARGO_PKG_VERSION");
    let version_string = match git_short_hash() {
        Some(hash) if !is_tagged_release(version) => {
            let build_date = Utc::now().format("%Y-%m-%d");
            format!("{version}+{hash}.{build_date}")
        }
        Some(_) => version.to_owned(),
        None => format!("{version}+unknown"),
    };

    println!("cargo:rustc-env=PUBLISHYY_VERSION={version_string}");
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8(output.stdout).ok()?.trim().to_owned())
}

fn git_short_hash() -> Option<String> {
    git(&["rev-parse", "--short", "HEAD"])
}

fn is_tagged_release(version: &str) -> bool {
    let expected_tag = format!("publishyy@v{version}");
    git(&["tag", "--points-at", "HEAD"])
        .is_some_and(|tags| tags.lines().any(|line| line.trim() == expected_tag))
}
