//! Plan execution
//!
//! A run is all-or-nothing: every plan's target is checked and every
//! template rendered before the first file is written.

use crate::error::GenerateError;
use crate::logger::Logger;
use crate::plan::Plan;
use crate::templates::TemplateRenderer;
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Whether `dir` already holds an entry called `name`.
/// A missing `dir` holds nothing; it is created when writing.
pub async fn entry_exists(dir: &Path, name: &str) -> Result<bool, GenerateError> {
    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(GenerateError::io(dir, e)),
    };

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| GenerateError::io(dir, e))?
    {
        if entry.file_name() == name {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Renders and writes plans
pub struct Generator<'a> {
    renderer: &'a TemplateRenderer,
    logger: &'a Logger,
}

impl<'a> Generator<'a> {
    pub fn new(renderer: &'a TemplateRenderer, logger: &'a Logger) -> Self {
        Self { renderer, logger }
    }

    /// Fail if any plan's target name is taken, or two plans overlap
    pub async fn check_targets(&self, plans: &[Plan]) -> Result<(), GenerateError> {
        check_overlaps(plans)?;

        for plan in plans {
            if entry_exists(&plan.output_dir, plan.name()).await? {
                return Err(GenerateError::AlreadyExists {
                    name: plan.name().to_string(),
                    dir: plan.output_dir.clone(),
                });
            }
            if !plan.output_dir.exists() {
                self.logger.warn(format!(
                    "{} did not exist, creating...",
                    plan.output_dir.display()
                ));
            }
        }
        Ok(())
    }

    /// Check, render, then write every plan. Returns the written paths.
    pub async fn run(&self, plans: &[Plan]) -> Result<Vec<PathBuf>, GenerateError> {
        self.check_targets(plans).await?;

        let mut rendered = Vec::new();
        for plan in plans {
            for task in &plan.tasks {
                let content = self.renderer.render(task.template, &plan.data)?;
                rendered.push((plan.target, task.dest.clone(), content));
            }
        }

        let mut written = Vec::with_capacity(rendered.len());
        for (target, dest, content) in rendered {
            write_new_file(&dest, &content).await?;
            self.logger.success(format!(
                "Successfully wrote {} template to {}",
                target,
                dest.display()
            ));
            written.push(dest);
        }
        Ok(written)
    }
}

/// Plans of one run must not share a target directory or a destination file
fn check_overlaps(plans: &[Plan]) -> Result<(), GenerateError> {
    let mut targets = HashSet::new();
    let mut dests = HashSet::new();
    for plan in plans {
        let target = plan.target_dir();
        if !targets.insert(target.clone()) {
            return Err(GenerateError::DuplicateTarget(target));
        }
        for task in &plan.tasks {
            if !dests.insert(task.dest.as_path()) {
                return Err(GenerateError::DuplicateTarget(task.dest.clone()));
            }
        }
    }
    Ok(())
}

/// Create parent directories and write `content`, never replacing a file
async fn write_new_file(dest: &Path, content: &str) -> Result<(), GenerateError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| GenerateError::io(parent, e))?;
    }

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)
        .await
        .map_err(|e| GenerateError::io(dest, e))?;
    file.write_all(content.as_bytes())
        .await
        .map_err(|e| GenerateError::io(dest, e))?;
    file.flush().await.map_err(|e| GenerateError::io(dest, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FolderNames;
    use crate::plan::{DuckOptions, TemplateData, ViewOptions};
    use tempfile::tempdir;

    fn data(name: &str) -> TemplateData {
        TemplateData {
            name: name.to_string(),
            app_name: "shop".to_string(),
            contributor: "Ada".to_string(),
            description: "desc".to_string(),
        }
    }

    #[tokio::test]
    async fn test_entry_exists() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("Button")).unwrap();

        assert!(entry_exists(dir.path(), "Button").await.unwrap());
        assert!(!entry_exists(dir.path(), "Card").await.unwrap());
        assert!(!entry_exists(&dir.path().join("missing"), "Button").await.unwrap());
    }

    #[tokio::test]
    async fn test_run_writes_every_task() {
        let dir = tempdir().unwrap();
        let renderer = TemplateRenderer::embedded().unwrap();
        let logger = Logger::new("Test");
        let view_dir = dir.path().join("view");

        let plan = Plan::view(
            &view_dir,
            &ViewOptions {
                connected: true,
                ..Default::default()
            },
            &FolderNames::default(),
            data("Button"),
        )
        .unwrap();

        let written = Generator::new(&renderer, &logger).run(&[plan]).await.unwrap();
        assert_eq!(written.len(), 4);
        for path in &written {
            assert!(path.is_file(), "{} missing", path.display());
        }

        let index = std::fs::read_to_string(view_dir.join("Button/index.js")).unwrap();
        assert!(index.contains("connect("));
    }

    #[tokio::test]
    async fn test_existing_target_aborts_whole_run() {
        let dir = tempdir().unwrap();
        let renderer = TemplateRenderer::embedded().unwrap();
        let logger = Logger::new("Test");
        let view_dir = dir.path().join("view");
        let state_dir = dir.path().join("state");
        std::fs::create_dir_all(state_dir.join("Cart")).unwrap();

        let view = Plan::view(
            &view_dir,
            &ViewOptions::default(),
            &FolderNames::default(),
            data("Cart"),
        )
        .unwrap();
        let duck = Plan::duck(&state_dir, &DuckOptions::default(), data("Cart")).unwrap();

        let err = Generator::new(&renderer, &logger)
            .run(&[view, duck])
            .await
            .unwrap_err();
        assert!(matches!(err, GenerateError::AlreadyExists { ref name, .. } if name == "Cart"));

        // The view plan came first but nothing was written
        assert!(!view_dir.exists());
        assert_eq!(std::fs::read_dir(state_dir.join("Cart")).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_shared_folder_same_name_writes_nothing() {
        let dir = tempdir().unwrap();
        let renderer = TemplateRenderer::embedded().unwrap();
        let logger = Logger::new("Test");
        let shared = dir.path().join("app");

        let view = Plan::view(
            &shared,
            &ViewOptions::default(),
            &FolderNames::default(),
            data("Cart"),
        )
        .unwrap();
        let duck = Plan::duck(&shared, &DuckOptions::default(), data("Cart")).unwrap();

        let err = Generator::new(&renderer, &logger)
            .run(&[view, duck])
            .await
            .unwrap_err();
        assert!(matches!(err, GenerateError::DuplicateTarget(ref path) if path == &shared.join("Cart")));
        assert!(!shared.exists());
    }

    #[test]
    fn test_overlapping_destinations_rejected() {
        let view = Plan::view(
            Path::new("/p/view"),
            &ViewOptions::default(),
            &FolderNames::default(),
            data("Cart"),
        )
        .unwrap();
        let mut other = Plan::duck(Path::new("/p/state"), &DuckOptions::default(), data("Cart")).unwrap();
        other.tasks[0].dest = PathBuf::from("/p/view/Cart/index.js");

        let err = check_overlaps(&[view, other]).unwrap_err();
        assert!(matches!(err, GenerateError::DuplicateTarget(ref path) if path == Path::new("/p/view/Cart/index.js")));
    }

    #[tokio::test]
    async fn test_write_new_file_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("nested/file.js");

        write_new_file(&dest, "first").await.unwrap();
        let err = write_new_file(&dest, "second").await.unwrap_err();
        assert!(matches!(err, GenerateError::Io { .. }));
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "first");
    }
}
