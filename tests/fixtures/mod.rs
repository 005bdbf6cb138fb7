use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn get_test_fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Copies a fixture project into a temp dir so tests can write to it.
pub fn copy_fixture_project(name: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    copy_dir(&get_test_fixture_path(name), temp_dir.path());
    temp_dir
}

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}
