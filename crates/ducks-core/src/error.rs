//! Typed errors raised while resolving, planning and writing a generation run

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("{name} exists already at {}", dir.display())]
    AlreadyExists { name: String, dir: PathBuf },

    #[error("{} would be generated twice in one run", .0.display())]
    DuplicateTarget(PathBuf),

    #[error("Invalid name '{0}': expected a single directory name")]
    InvalidName(String),

    #[error("Failed to parse {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Template '{name}' failed: {message}")]
    Template { name: String, message: String },

    #[error("{} could not be accessed: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
