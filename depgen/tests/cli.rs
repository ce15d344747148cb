//! CLI integration tests running the real binary.

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CONFIG: &str = r#"
files:
  all:
    output: [conda, requirements]
    includes: [build]
    matrix:
      cuda: ["11.8", "12.0"]
  docs:
    output: none
    includes: [build]
dependencies:
  build:
    common:
      - output_types: [conda, requirements]
        packages: [cmake>=3.26]
    specific:
      - output_types: [conda, requirements]
        matrices:
          - matrix: {cuda: "11.8"}
            packages: [cuda-version=11.8]
          - matrix: {cuda: "12.0"}
            packages: [cuda-version=12.0]
"#;

#[allow(deprecated)]
fn generator_cmd() -> Command {
    Command::cargo_bin("rapids-dependency-file-generator").unwrap()
}

fn project(config: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("dependencies.yaml"), config).unwrap();
    dir
}

fn exists(root: &Path, relative: &str) -> bool {
    root.join(relative).exists()
}

#[test]
fn test_help_output() {
    generator_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_generate_writes_files() {
    let dir = project(CONFIG);

    generator_cmd()
        .current_dir(dir.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated: 4 file(s), 0 unchanged"));

    assert!(exists(dir.path(), "conda/environments/all_cuda-118.yaml"));
    assert!(exists(dir.path(), "conda/environments/all_cuda-120.yaml"));
    assert!(exists(dir.path(), "python/requirements_all_cuda-118.txt"));
    assert!(exists(dir.path(), "python/requirements_all_cuda-120.txt"));

    let requirements =
        fs::read_to_string(dir.path().join("python/requirements_all_cuda-120.txt")).unwrap();
    assert!(requirements.ends_with("cmake>=3.26\ncuda-version=12.0\n"));
}

#[test]
fn test_generate_with_config_path() {
    let dir = project(CONFIG);
    let config = dir.path().join("dependencies.yaml");

    generator_cmd()
        .args(["generate", "--config"])
        .arg(&config)
        .args(["--file-key", "all", "--output", "conda"])
        .assert()
        .success();

    assert!(exists(dir.path(), "conda/environments/all_cuda-118.yaml"));
    assert!(!exists(dir.path(), "python"));
}

#[test]
fn test_generate_stdout() {
    let dir = project(CONFIG);

    generator_cmd()
        .current_dir(dir.path())
        .args([
            "generate",
            "--stdout",
            "--file-key",
            "all",
            "--output",
            "requirements",
            "--matrix",
            "cuda=11.8",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "# This file is generated by `rapids-dependency-file-generator`.\n\
             # To make changes, edit dependencies.yaml and run `rapids-dependency-file-generator`.\n\
             cmake>=3.26\n\
             cuda-version=11.8\n\n",
        ));

    assert!(!exists(dir.path(), "python"));
}

#[test]
fn test_generate_dry_run() {
    let dir = project(CONFIG);

    generator_cmd()
        .current_dir(dir.path())
        .args(["generate", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would generate: 4 file(s)"));

    assert!(!exists(dir.path(), "conda"));
}

#[test]
fn test_matrix_requires_file_key() {
    let dir = project(CONFIG);

    generator_cmd()
        .current_dir(dir.path())
        .args(["generate", "--matrix", "cuda=11.8"])
        .assert()
        .failure();
}

#[test]
fn test_uncovered_matrix_fails() {
    let dir = project(CONFIG);

    generator_cmd()
        .current_dir(dir.path())
        .args([
            "generate",
            "--file-key",
            "all",
            "--output",
            "conda",
            "--matrix",
            "cuda=12.4",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No matching matrix found"));
}

#[test]
fn test_invalid_output_fails_at_load() {
    let dir = project(
        r#"
files:
  all:
    output: [none, conda]
    includes: []
dependencies: {}
"#,
    );

    generator_cmd()
        .current_dir(dir.path())
        .arg("generate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid output for file 'all'"));
}

#[test]
fn test_missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();

    generator_cmd()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .code(1);
}

#[test]
fn test_check_valid() {
    let dir = project(CONFIG);

    generator_cmd()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"))
        .stdout(predicate::str::contains(
            "info: file 'docs' requests no output formats",
        ));

    assert!(!exists(dir.path(), "conda"));
}

#[test]
fn test_check_reports_coverage_gap() {
    let dir = project(
        r#"
files:
  all:
    output: conda
    includes: [build]
    matrix:
      cuda: ["11.8", "12.0"]
dependencies:
  build:
    specific:
      - output_types: conda
        matrices:
          - matrix: {cuda: "11.8"}
            packages: [cuda-version=11.8]
"#,
    );

    generator_cmd()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "error: No matching matrix found in 'build' for: {cuda: 12.0}",
        ));
}

#[test]
fn test_completions() {
    generator_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rapids-dependency-file-generator"));
}
