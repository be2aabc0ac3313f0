use std::fs;

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

fn create_package(dependencies: &str) -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    fs::write(
        dir.path().join("package.json"),
        format!(r#"{{ "name": "demo", "version": "1.0.0", "dependencies": {{ {dependencies} }} }}"#),
    )
    .expect("failed to write package.json");
    dir
}

fn publishyy() -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("publishyy");
    cmd.env("PUBLISHYY_NO_TTY", "1").env_remove("PUBLISHYY_LOG");
    cmd
}

#[test]
fn version_flag_prints_name() {
    publishyy()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("publishyy"));
}

#[test]
fn help_lists_flags() {
    publishyy()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            contains("--path")
                .and(contains("--config"))
                .and(contains("--bump")),
        );
}

#[test]
fn unknown_bump_is_rejected() {
    publishyy()
        .args(["--bump", "huge"])
        .assert()
        .failure()
        .stderr(contains("possible values").and(contains("beta")));
}

#[test]
fn missing_package_json_fails() {
    let dir = TempDir::new().expect("failed to create temp dir");

    publishyy()
        .arg("-C")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("package.json")));
}

#[test]
fn invalid_config_fails_with_cause() {
    let dir = create_package("");
    fs::write(dir.path().join("pubconfig.json"), "{ \"bundle\": ").expect("write config");

    publishyy()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(contains("failed to parse JSON config file").and(contains("caused by:")));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = create_package("");

    publishyy()
        .arg("-C")
        .arg(dir.path())
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(contains("failed to read config file"));
}

#[test]
fn non_interactive_run_stops_at_first_prompt() {
    let dir = create_package("");

    publishyy()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(
            contains("PUBLISHYY")
                .and(contains("Prompts are unavailable"))
                .and(contains("No dependencies to check.")),
        )
        .stderr(contains("interaction required"));
}

#[test]
fn script_config_is_reported_and_ignored() {
    let dir = create_package("");
    fs::write(dir.path().join("pub.config.js"), "export default {}").expect("write config");

    publishyy()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(contains("pub.config.js").and(contains("No config file found").not()))
        .stderr(contains("interaction required"));
}

#[test]
fn toml_config_answers_update_question() {
    let dir = create_package(r#""left-pad": "^1.0.0""#);
    fs::write(dir.path().join("pub.config.toml"), "update = false\n").expect("write config");

    publishyy()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(contains("Config file found").and(contains("Skipping dependency check.")))
        .stderr(contains("interaction required"));
}
