//! Configuration resolution
//!
//! Resolves where views and ducks are written:
//! - the rc file at the project root when present
//! - otherwise `src/<package-name>/view` and `src/<package-name>/state`

pub mod project;
pub mod rc;

use crate::error::GenerateError;
use std::path::{Path, PathBuf};

pub use project::{contributor, find_project_root, git_author, package_name};
pub use rc::RcFile;

/// Optional subfolders of a package's `src/` directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderNames {
    pub stories: Option<String>,
    pub tests: Option<String>,
}

/// Fully resolved configuration for one run
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub root: PathBuf,
    pub app_name: String,
    pub rc_path: PathBuf,
    /// Whether the rc file existed (defaults were used otherwise)
    pub rc_found: bool,
    pub view_dir: PathBuf,
    pub state_dir: PathBuf,
    pub folders: FolderNames,
}

impl ProjectConfig {
    /// Load the rc file named `rc_file_name` under `root`, falling back to defaults
    pub async fn load(root: &Path, rc_file_name: &str) -> Result<Self, GenerateError> {
        let app_name = package_name(root).await;
        let rc_path = root.join(rc_file_name);
        let found = RcFile::read(&rc_path).await?;
        let rc_found = found.is_some();

        Ok(Self::from_rc(
            root,
            app_name,
            rc_path,
            rc_found,
            found.unwrap_or_default(),
        ))
    }

    fn from_rc(
        root: &Path,
        app_name: String,
        rc_path: PathBuf,
        rc_found: bool,
        rc: RcFile,
    ) -> Self {
        let rc = rc.or(RcFile::defaults(&app_name));
        let view = rc.view_folder.unwrap_or_default();
        let state = rc.state_folder.unwrap_or_default();

        Self {
            root: root.to_path_buf(),
            view_dir: root.join(view),
            state_dir: root.join(state),
            folders: FolderNames {
                stories: non_empty(rc.stories_folder_name),
                tests: non_empty(rc.tests_folder_name),
            },
            app_name,
            rc_path,
            rc_found,
        }
    }

    /// `path` relative to the project root when possible, for prompts and messages
    pub fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
