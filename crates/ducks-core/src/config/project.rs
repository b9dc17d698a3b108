//! Project root discovery and package metadata

use std::path::{Path, PathBuf};
use std::process::Command;
use tokio::fs;

/// Fallback used when neither package.json nor the root directory yields a name
const FALLBACK_APP_NAME: &str = "app";

/// Find the nearest ancestor of `start` (inclusive) that holds a package.json.
/// Falls back to `start` itself.
pub fn find_project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join("package.json").is_file())
        .unwrap_or(start)
        .to_path_buf()
}

/// Last `/` segment of the package.json `name`, so `@scope/shop` becomes `shop`.
/// Falls back to the root directory name.
pub async fn package_name(root: &Path) -> String {
    let from_manifest = match fs::read_to_string(root.join("package.json")).await {
        Ok(content) => name_from_manifest(&content),
        Err(_) => None,
    };

    from_manifest
        .or_else(|| {
            root.file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| FALLBACK_APP_NAME.to_string())
}

fn name_from_manifest(content: &str) -> Option<String> {
    let manifest: serde_json::Value = serde_json::from_str(content).ok()?;
    let name = manifest.get("name")?.as_str()?;
    name.rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

fn git_config(key: &str) -> Option<String> {
    Command::new("git")
        .args(["config", "--get", key])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
            } else {
                None
            }
        })
}

/// `Name <email>` from git config, if a user name is configured
pub fn git_author() -> Option<String> {
    let name = git_config("user.name")?;
    match git_config("user.email") {
        Some(email) => Some(format!("{} <{}>", name, email)),
        None => Some(name),
    }
}

/// Contributor placed in generated files
pub fn contributor() -> String {
    git_author().unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_name_from_scoped_manifest() {
        let name = name_from_manifest(r#"{ "name": "@acme/storefront" }"#);
        assert_eq!(name.as_deref(), Some("storefront"));
    }

    #[test]
    fn test_name_from_plain_manifest() {
        let name = name_from_manifest(r#"{ "name": "shop", "version": "1.0.0" }"#);
        assert_eq!(name.as_deref(), Some("shop"));
    }

    #[test]
    fn test_manifest_without_name() {
        assert!(name_from_manifest(r#"{ "version": "1.0.0" }"#).is_none());
        assert!(name_from_manifest("not json").is_none());
        assert!(name_from_manifest(r#"{ "name": "@acme/" }"#).is_none());
    }

    #[test]
    fn test_find_project_root_walks_up() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        let nested = dir.path().join("src").join("deep");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), dir.path());
    }

    #[test]
    fn test_find_project_root_falls_back_to_start() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("lonely");
        std::fs::create_dir_all(&nested).unwrap();

        // No package.json anywhere under the temp dir; whatever the temp dir's
        // ancestors hold, the result is either `nested` or one of its ancestors.
        let root = find_project_root(&nested);
        assert!(nested.starts_with(&root));
    }

    #[tokio::test]
    async fn test_package_name_falls_back_to_dir_name() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("my-shop");
        std::fs::create_dir_all(&root).unwrap();

        assert_eq!(package_name(&root).await, "my-shop");
    }

    #[tokio::test]
    async fn test_package_name_reads_manifest() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{ "name": "@vega/checkout" }"#,
        )
        .unwrap();

        assert_eq!(package_name(dir.path()).await, "checkout");
    }
}
