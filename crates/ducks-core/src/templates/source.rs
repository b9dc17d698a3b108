//! Where template content comes from
//!
//! - Embedded: the template set compiled into the binary
//! - Local: a directory laid out like `templates/` (`view/`, `state/`, `package/`);
//!   files it does not provide fall back to the embedded ones

use super::embedded::TemplateId;
use crate::error::GenerateError;
use std::borrow::Cow;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// Template source - either built in or a local override directory
#[derive(Debug, Clone, Default)]
pub enum TemplateSource {
    #[default]
    Embedded,
    Local(PathBuf),
}

impl TemplateSource {
    pub fn from_dir(dir: Option<PathBuf>) -> Self {
        match dir {
            Some(path) => Self::Local(path),
            None => Self::Embedded,
        }
    }

    /// Load the content of a single template
    pub async fn load(&self, id: TemplateId) -> Result<Cow<'static, str>, GenerateError> {
        match self {
            TemplateSource::Embedded => Ok(Cow::Borrowed(id.embedded())),
            TemplateSource::Local(dir) => {
                let path = dir.join(id.path());
                match fs::read_to_string(&path).await {
                    Ok(content) => Ok(Cow::Owned(content)),
                    Err(e) if e.kind() == ErrorKind::NotFound => Ok(Cow::Borrowed(id.embedded())),
                    Err(e) => Err(GenerateError::io(path, e)),
                }
            }
        }
    }
}
