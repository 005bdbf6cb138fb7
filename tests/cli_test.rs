mod fixtures;

use std::fs;
use std::process::{Command, Output};

fn bumpfile(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bumpfile"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_help() {
    let output = bumpfile(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("bumpfile"));
    assert!(stdout.contains("resolve"));
    assert!(stdout.contains("read"));
    assert!(stdout.contains("write"));
    assert!(stdout.contains("--config"));
}

#[test]
fn test_cli_missing_subcommand() {
    let output = bumpfile(&[]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_invalid_dir() {
    let output = bumpfile(&["-C", "/nonexistent/path/that/does/not/exist", "resolve"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("does not exist") || stderr.contains("Invalid arguments"));
}

#[test]
fn test_cli_resolve_configured_files() {
    let project = fixtures::copy_fixture_project("project");
    let dir = project.path().to_str().unwrap();

    let output = bumpfile(&["-C", dir, "resolve"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "package.json -> json\nVERSION.txt -> plain-text\napp/build.gradle -> gradle\nbuild.yaml -> yaml\nCargo.toml -> custom\n"
    );
}

#[test]
fn test_cli_resolve_unsupported_file_warns() {
    let project = fixtures::copy_fixture_project("project");
    let dir = project.path().to_str().unwrap();

    let output = bumpfile(&["-C", dir, "resolve", "random.ext"]);

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unsupported file (random.ext)"));
}

#[test]
fn test_cli_resolve_explicit_type() {
    let project = fixtures::copy_fixture_project("project");
    let dir = project.path().to_str().unwrap();

    let output = bumpfile(&["-C", dir, "resolve", "--type", "yaml", "x.json"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "x.json -> yaml\n");
}

#[test]
fn test_cli_read() {
    let project = fixtures::copy_fixture_project("project");
    let dir = project.path().to_str().unwrap();

    let output = bumpfile(&["-C", dir, "read", "app/build.gradle"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1.4.2\n");
}

#[test]
fn test_cli_read_unresolved_fails() {
    let project = fixtures::copy_fixture_project("project");
    let dir = project.path().to_str().unwrap();

    let output = bumpfile(&["-C", dir, "read", "random.ext"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No updater could be resolved for random.ext"));
}

#[test]
fn test_cli_write_dry_run() {
    let project = fixtures::copy_fixture_project("project");
    let dir = project.path().to_str().unwrap();

    let output = bumpfile(&["-C", dir, "write", "--release-as", "2.0.0", "--dry-run", "VERSION.txt"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "VERSION.txt: 1.4.2 -> 2.0.0 (dry run)\n"
    );
    assert_eq!(
        fs::read_to_string(project.path().join("VERSION.txt")).unwrap(),
        "1.4.2\n"
    );
}

#[test]
fn test_cli_write_skips_missing_files() {
    let project = fixtures::copy_fixture_project("project");
    let dir = project.path().to_str().unwrap();

    let output = bumpfile(&["-C", dir, "write", "--release-as", "2.0.0", "bower.json", "package.json"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "package.json: 1.4.2 -> 2.0.0\n"
    );
    let package_json = fs::read_to_string(project.path().join("package.json")).unwrap();
    assert!(package_json.contains("\"version\": \"2.0.0\""));
}

#[test]
fn test_cli_read_defaults_to_package_files() {
    let project = fixtures::copy_fixture_project("project");
    let dir = project.path().to_str().unwrap();

    let output = bumpfile(&["-C", dir, "read"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1.4.2\n");
}

#[test]
fn test_cli_read_without_package_files_fails() {
    let project = fixtures::copy_fixture_project("project");
    fs::remove_file(project.path().join("package.json")).unwrap();
    let dir = project.path().to_str().unwrap();

    let output = bumpfile(&["-C", dir, "read"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No readable package file found"));
}
