//! Shared helpers for the ducks-gen integration tests

#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// `ducks-gen` binary built for this test run, rooted at `root`
pub fn gen_cmd(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ducks-gen").expect("ducks-gen binary should be built");
    cmd.current_dir(root).env("NO_COLOR", "1");
    cmd
}

/// Temporary project with a package.json named `package_name`
pub fn project(package_name: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp project");
    fs::write(
        dir.path().join("package.json"),
        format!(r#"{{ "name": "{}" }}"#, package_name),
    )
    .expect("Failed to write package.json");
    dir
}

/// Sorted file names directly inside `dir`
pub fn file_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .flatten()
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
