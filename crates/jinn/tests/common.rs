//! Shared helpers for the jinn integration tests

#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// `jinn` binary built for this test run, rooted at `root`
pub fn jinn_cmd(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jinn").expect("jinn binary should be built");
    cmd.current_dir(root).env("NO_COLOR", "1");
    cmd
}

/// Temporary project with a package.json named `package_name`
pub fn project(package_name: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp project");
    fs::write(
        dir.path().join("package.json"),
        format!(r#"{{ "name": "{}", "version": "1.0.0" }}"#, package_name),
    )
    .expect("Failed to write package.json");
    dir
}

/// Sorted file paths under `dir`, relative to it
pub fn files_under(dir: &Path) -> Vec<String> {
    let mut found = Vec::new();
    collect(dir, dir, &mut found);
    found.sort();
    found
}

fn collect(base: &Path, dir: &Path, found: &mut Vec<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(base, &path, found);
        } else if let Ok(rel) = path.strip_prefix(base) {
            found.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
}
