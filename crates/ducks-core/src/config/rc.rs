//! The flat JSON rc file (`.jinnrc`, `.genrc`)

use crate::error::GenerateError;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Contents of the rc file. Every key is optional; missing keys fall back to
/// the defaults derived from the package name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RcFile {
    /// Directory receiving generated views
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_folder: Option<String>,

    /// Directory receiving generated ducks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_folder: Option<String>,

    /// Subfolder of a package's `src/` holding stories (empty = none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stories_folder_name: Option<String>,

    /// Subfolder of a package's `src/` holding tests (empty = none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests_folder_name: Option<String>,
}

impl RcFile {
    /// Defaults for a project whose package is named `app_name`
    pub fn defaults(app_name: &str) -> Self {
        Self {
            view_folder: Some(format!("src/{}/view", app_name)),
            state_folder: Some(format!("src/{}/state", app_name)),
            stories_folder_name: Some(String::new()),
            tests_folder_name: Some(String::new()),
        }
    }

    /// Fill keys missing from `self` with the values from `defaults`
    pub fn or(self, defaults: RcFile) -> Self {
        Self {
            view_folder: self.view_folder.or(defaults.view_folder),
            state_folder: self.state_folder.or(defaults.state_folder),
            stories_folder_name: self.stories_folder_name.or(defaults.stories_folder_name),
            tests_folder_name: self.tests_folder_name.or(defaults.tests_folder_name),
        }
    }

    pub fn parse(path: &Path, content: &str) -> Result<Self, GenerateError> {
        serde_json::from_str(content).map_err(|source| GenerateError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read the rc file; `Ok(None)` when it does not exist
    pub async fn read(path: &Path) -> Result<Option<Self>, GenerateError> {
        match fs::read_to_string(path).await {
            Ok(content) => Self::parse(path, &content).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(GenerateError::io(path, e)),
        }
    }

    /// Write `self` as pretty JSON unless the file exists already.
    /// Returns whether the file was written.
    pub async fn write_new(&self, path: &Path) -> Result<bool, GenerateError> {
        if fs::try_exists(path)
            .await
            .map_err(|e| GenerateError::io(path, e))?
        {
            return Ok(false);
        }

        let mut json = serde_json::to_string_pretty(self).map_err(|source| {
            GenerateError::Config {
                path: path.to_path_buf(),
                source,
            }
        })?;
        json.push('\n');

        fs::write(path, json)
            .await
            .map_err(|e| GenerateError::io(path, e))?;
        Ok(true)
    }
}
