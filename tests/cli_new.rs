//! CLI contract tests for the `new` command. Every invocation here pins
//! its dependencies explicitly so no network access is needed.

use std::io::{Cursor, Read};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use zip::ZipArchive;

fn cli() -> Command {
    Command::cargo_bin("fastapi-init").expect("binary should build")
}

#[test]
fn new_with_pinned_packages_writes_the_archive() {
    let dir = TempDir::new().expect("temp dir");

    cli()
        .args([
            "new",
            "--name",
            "demo",
            "--description",
            "A demo service",
            "--python",
            "3.12",
            "--package",
            "fastapi==0.100.0",
            "--package",
            "uvicorn==0.23.0",
            "--no-defaults",
            "--output",
        ])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created project archive"));

    let bytes = std::fs::read(dir.path().join("demo.zip")).expect("archive should exist");
    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("zip should open");

    let mut requirements = String::new();
    archive
        .by_name("requirements.txt")
        .expect("requirements entry")
        .read_to_string(&mut requirements)
        .expect("requirements should read");
    assert_eq!(requirements, "fastapi==0.100.0\nuvicorn==0.23.0");

    let mut setup = String::new();
    archive
        .by_name("setup_env.sh")
        .expect("setup entry")
        .read_to_string(&mut setup)
        .expect("setup should read");
    assert!(setup.contains("python3.12"));
}

#[test]
fn new_rejects_a_blank_project_name() {
    let dir = TempDir::new().expect("temp dir");

    cli()
        .args(["new", "--name", "   ", "--no-defaults", "--output"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project name must not be empty"));

    assert_eq!(std::fs::read_dir(dir.path()).expect("dir listing").count(), 0);
}

#[test]
fn new_rejects_a_malformed_specifier() {
    cli()
        .args(["new", "--name", "demo", "--no-defaults", "--package", "flask=="])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid specifier"));
}

#[test]
fn new_rejects_an_unknown_python_version() {
    cli()
        .args(["new", "--name", "demo", "--no-defaults", "--python", "2.7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid Python version"));
}

#[test]
fn same_inputs_produce_identical_archive_content() {
    let dir_a = TempDir::new().expect("temp dir");
    let dir_b = TempDir::new().expect("temp dir");

    for dir in [&dir_a, &dir_b] {
        cli()
            .args([
                "new",
                "--name",
                "demo",
                "--python",
                "3.11",
                "--package",
                "fastapi==0.100.0",
                "--no-defaults",
                "--output",
            ])
            .arg(dir.path())
            .assert()
            .success();
    }

    let read_entries = |dir: &TempDir| {
        let bytes = std::fs::read(dir.path().join("demo.zip")).expect("archive should exist");
        let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("zip should open");
        let mut entries = Vec::new();
        for i in 0..archive.len() {
            let mut entry = archive.by_index(i).expect("entry");
            let mut content = Vec::new();
            entry.read_to_end(&mut content).expect("entry should read");
            entries.push((entry.name().to_string(), content));
        }
        entries
    };

    assert_eq!(read_entries(&dir_a), read_entries(&dir_b));
}
