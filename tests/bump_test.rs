//! Reading and writing versions through resolved targets on a copy of a
//! small project that uses every built-in format plus a custom updater.

mod fixtures;

use bumpfile::{Config, FormatRegistry, RecordingDiagnostics, Resolver, UpdaterKind};
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn test_configured_targets_resolve_in_order() {
    let project = fixtures::copy_fixture_project("project");
    let config = Config::discover(project.path()).unwrap();
    let registry = FormatRegistry::new().unwrap();
    let diagnostics = RecordingDiagnostics::new();
    let resolver = Resolver::new(&registry)
        .with_working_dir(project.path())
        .with_diagnostics(&diagnostics);

    let targets = resolver.resolve_all(&config.bump_files);
    let resolved: Vec<(String, String)> = targets
        .iter()
        .map(|t| (t.filename().to_string(), t.kind().to_string()))
        .collect();

    assert_eq!(
        resolved,
        vec![
            ("package.json".to_string(), "json".to_string()),
            ("VERSION.txt".to_string(), "plain-text".to_string()),
            ("app/build.gradle".to_string(), "gradle".to_string()),
            ("build.yaml".to_string(), "yaml".to_string()),
            ("Cargo.toml".to_string(), "custom".to_string()),
        ]
    );
    // Chart.yaml points at a missing updater definition and is skipped quietly.
    assert_eq!(diagnostics.count(), 0);
}

#[test]
fn test_every_target_reads_the_same_version() {
    let project = fixtures::copy_fixture_project("project");
    let config = Config::discover(project.path()).unwrap();
    let registry = FormatRegistry::new().unwrap();
    let resolver = Resolver::new(&registry).with_working_dir(project.path());

    for target in resolver.resolve_all(&config.bump_files) {
        assert_eq!(
            target.read_version(project.path()).unwrap(),
            "1.4.2",
            "{}",
            target.filename()
        );
    }
}

#[test]
fn test_bump_writes_every_target() {
    let project = fixtures::copy_fixture_project("project");
    let config = Config::discover(project.path()).unwrap();
    let registry = FormatRegistry::new().unwrap();
    let resolver = Resolver::new(&registry).with_working_dir(project.path());

    for target in resolver.resolve_all(&config.bump_files) {
        let outcome = target.bump(project.path(), "1.5.0", false).unwrap();
        assert_eq!(outcome.previous, "1.4.2");
        assert_eq!(target.read_version(project.path()).unwrap(), "1.5.0");
    }

    let package_json = fs::read_to_string(project.path().join("package.json")).unwrap();
    assert_eq!(
        package_json,
        "{\n  \"name\": \"demo\",\n  \"version\": \"1.5.0\",\n  \"private\": true,\n  \"scripts\": {\n    \"release\": \"bumpfile write\"\n  }\n}\n"
    );

    let gradle = fs::read_to_string(project.path().join("app/build.gradle")).unwrap();
    assert!(gradle.contains("version = '1.5.0'"));

    let yaml = fs::read_to_string(project.path().join("build.yaml")).unwrap();
    assert_eq!(yaml, "# demo build manifest\nname: demo\nversion: 1.5.0\n");
}

#[test]
fn test_dry_run_writes_nothing() {
    let project = fixtures::copy_fixture_project("project");
    let registry = FormatRegistry::new().unwrap();
    let resolver = Resolver::new(&registry).with_working_dir(project.path());

    let target = resolver.resolve("VERSION.txt").unwrap();
    assert_eq!(target.kind(), UpdaterKind::Builtin(bumpfile::Format::PlainText));

    let outcome = target.bump(project.path(), "9.9.9", true).unwrap();
    assert!(!outcome.written);
    assert_eq!(
        fs::read_to_string(project.path().join("VERSION.txt")).unwrap(),
        "1.4.2\n"
    );
}

#[test]
fn test_current_version_from_configured_package_files() {
    let project = fixtures::copy_fixture_project("project");
    fs::write(
        project.path().join(".versionrc.json"),
        r#"{ "packageFiles": ["bower.json", { "filename": "build.yaml", "type": "yaml" }] }"#,
    )
    .unwrap();
    let config = Config::discover(project.path()).unwrap();
    let registry = FormatRegistry::new().unwrap();
    let resolver = Resolver::new(&registry).with_working_dir(project.path());

    let (target, version) = resolver
        .read_current_version(&config.package_files, project.path())
        .unwrap();

    assert_eq!(target.filename(), "build.yaml");
    assert_eq!(version, "1.4.2");
}
