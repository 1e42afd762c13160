use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn curator_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("curator"));
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env("CLICOLOR", "0")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn create_writes_default_config() {
    let home = TempDir::new().expect("home");
    let path = home.path().join("conf").join("config.toml");

    curator_cmd(home.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "--create"])
        .assert()
        .success()
        .stdout(contains("file created"));

    let contents = fs::read_to_string(&path).expect("read");
    assert!(contents.contains("rsa_file"));
    assert!(contents.contains("repos"));
}

#[test]
fn create_declined_keeps_existing_file() {
    let home = TempDir::new().expect("home");
    let path = home.path().join("config.toml");
    fs::write(&path, "# mine\n").expect("write");

    curator_cmd(home.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "--create"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(contains("already exists"));

    assert_eq!(fs::read_to_string(&path).expect("read"), "# mine\n");
}

#[test]
fn create_confirmed_overwrites() {
    let home = TempDir::new().expect("home");
    let path = home.path().join("config.toml");
    fs::write(&path, "# mine\n").expect("write");

    curator_cmd(home.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "--create"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("file overwritten"));

    assert!(fs::read_to_string(&path).expect("read").contains("[ssh]"));
}

#[test]
fn create_with_unexpected_answer_changes_nothing() {
    let home = TempDir::new().expect("home");
    let path = home.path().join("config.toml");
    fs::write(&path, "# mine\n").expect("write");

    curator_cmd(home.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "--create"])
        .write_stdin("maybe\n")
        .assert()
        .success()
        .stdout(contains("Unexpected answer: maybe"));

    assert_eq!(fs::read_to_string(&path).expect("read"), "# mine\n");
}

#[test]
fn print_shows_file_contents() {
    let home = TempDir::new().expect("home");
    let path = home.path().join("config.toml");
    fs::write(
        &path,
        "[ssh]\nrsa_file = \"/k\"\n[storage]\npath = \"/s\"\n[git]\nrepos = [\"one\"]\n",
    )
    .expect("write");

    curator_cmd(home.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("repos = [\"one\"]"));
}

#[test]
fn print_missing_file_explains_how_to_create() {
    let home = TempDir::new().expect("home");
    curator_cmd(home.path())
        .arg("--config")
        .arg(home.path().join("absent.toml"))
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("use --create to create a configuration file"));
}

#[test]
fn config_requires_an_action() {
    let home = TempDir::new().expect("home");
    curator_cmd(home.path())
        .arg("config")
        .assert()
        .failure();
}

#[cfg(unix)]
#[test]
fn open_runs_editor_from_environment() {
    let home = TempDir::new().expect("home");
    let path = home.path().join("config.toml");
    fs::write(&path, "").expect("write");

    curator_cmd(home.path())
        .env("EDITOR", "true")
        .arg("--config")
        .arg(&path)
        .args(["config", "--open"])
        .assert()
        .success();
}

#[test]
fn version_only_prints_bare_tag() {
    let home = TempDir::new().expect("home");
    curator_cmd(home.path())
        .args(["version", "--only"])
        .assert()
        .success()
        .stdout(predicate::eq(format!("v{}\n", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn version_prints_build_info() {
    let home = TempDir::new().expect("home");
    curator_cmd(home.path())
        .arg("version")
        .assert()
        .success()
        .stdout(contains("curator version: v").and(contains("Git commit hash:")));
}
