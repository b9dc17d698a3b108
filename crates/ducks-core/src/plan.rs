//! Generation planning
//!
//! Turns a name plus options into an ordered list of [`FileTask`]s. Planning
//! touches no filesystem; the executor checks targets and writes.

use crate::config::FolderNames;
use crate::error::GenerateError;
use crate::templates::TemplateId;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Component flavour of a generated view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ComponentKind {
    /// Stateless functional component
    #[default]
    Func,
    /// Class component
    Class,
    /// React.PureComponent
    Pure,
}

impl ComponentKind {
    pub fn template(&self) -> TemplateId {
        match self {
            ComponentKind::Func => TemplateId::Functional,
            ComponentKind::Class => TemplateId::Class,
            ComponentKind::Pure => TemplateId::Pure,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ComponentKind::Func => "Stateless/Functional",
            ComponentKind::Class => "Class",
            ComponentKind::Pure => "React.PureComponent",
        }
    }
}

/// What a plan generates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    View,
    State,
}

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::View => "view",
            TargetKind::State => "state",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub kind: ComponentKind,
    /// `index.js` connects the component; adds `props.js`
    pub connected: bool,
    pub css: bool,
    pub story: bool,
    /// Standalone package: sources under `src/` plus `package.json`
    pub package: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DuckOptions {
    pub reselect: bool,
}

/// Data context handed to every template of a plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateData {
    pub name: String,
    pub app_name: String,
    pub contributor: String,
    pub description: String,
}

/// One file to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    pub template: TemplateId,
    pub dest: PathBuf,
}

impl FileTask {
    fn new(template: TemplateId, dest: PathBuf) -> Self {
        Self { template, dest }
    }
}

/// Ordered tasks generating `<output_dir>/<name>`
#[derive(Debug, Clone)]
pub struct Plan {
    pub target: TargetKind,
    pub output_dir: PathBuf,
    pub data: TemplateData,
    pub tasks: Vec<FileTask>,
}

impl Plan {
    /// Plan a view. `folders` only applies to packages, and packages are
    /// never connected.
    pub fn view(
        output_dir: &Path,
        options: &ViewOptions,
        folders: &FolderNames,
        data: TemplateData,
    ) -> Result<Self, GenerateError> {
        validate_name(&data.name)?;
        if options.package {
            for folder in [&folders.stories, &folders.tests].into_iter().flatten() {
                validate_name(folder)?;
            }
        }
        let name = data.name.as_str();
        let root = output_dir.join(name);
        let src = if options.package {
            root.join("src")
        } else {
            root.clone()
        };

        // Packages may move tests/stories into named subfolders of src/
        let placed = |folder: &Option<String>, file_name: String, default: &str| {
            match (options.package, folder) {
                (true, Some(folder)) => src.join(folder).join(file_name),
                _ => src.join(default),
            }
        };

        let mut tasks = Vec::new();
        if options.package {
            tasks.push(FileTask::new(TemplateId::PackageJson, root.join("package.json")));
        }
        tasks.push(FileTask::new(options.kind.template(), src.join("component.js")));
        tasks.push(FileTask::new(
            TemplateId::ViewTest,
            placed(&folders.tests, format!("{}.test.js", name), "test.js"),
        ));

        if options.connected && !options.package {
            tasks.push(FileTask::new(TemplateId::ConnectedIndex, src.join("index.js")));
            tasks.push(FileTask::new(TemplateId::Props, src.join("props.js")));
        } else {
            tasks.push(FileTask::new(TemplateId::StatelessIndex, src.join("index.js")));
        }

        if options.css {
            tasks.push(FileTask::new(TemplateId::Styles, src.join("styles.css")));
        }

        if options.story {
            tasks.push(FileTask::new(
                TemplateId::Story,
                placed(&folders.stories, format!("{}.story.js", name), "story.js"),
            ));
        }

        Ok(Self {
            target: TargetKind::View,
            output_dir: output_dir.to_path_buf(),
            data,
            tasks,
        })
    }

    /// Plan a duck
    pub fn duck(
        output_dir: &Path,
        options: &DuckOptions,
        data: TemplateData,
    ) -> Result<Self, GenerateError> {
        validate_name(&data.name)?;
        let root = output_dir.join(&data.name);
        let selectors = if options.reselect {
            TemplateId::Reselectors
        } else {
            TemplateId::Selectors
        };

        let tasks = [
            (TemplateId::Actions, "actions.js"),
            (TemplateId::Constants, "constants.js"),
            (TemplateId::DuckIndex, "index.js"),
            (TemplateId::Reducer, "reducer.js"),
            (TemplateId::DuckTest, "test.js"),
            (selectors, "selectors.js"),
        ]
        .into_iter()
        .map(|(template, file)| FileTask::new(template, root.join(file)))
        .collect();

        Ok(Self {
            target: TargetKind::State,
            output_dir: output_dir.to_path_buf(),
            data,
            tasks,
        })
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    /// Directory the plan creates
    pub fn target_dir(&self) -> PathBuf {
        self.output_dir.join(&self.data.name)
    }
}

/// A name must be a single, plain path component
pub fn validate_name(name: &str) -> Result<(), GenerateError> {
    let trimmed = name.trim();
    let invalid = trimmed.is_empty()
        || trimmed != name
        || name == "."
        || name == ".."
        || name.contains(['/', '\\']);
    if invalid {
        return Err(GenerateError::InvalidName(name.to_string()));
    }
    Ok(())
}
