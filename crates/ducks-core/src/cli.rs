//! Shared command-line surface and the flag-driven generation flow

use crate::config::{contributor, find_project_root, ProjectConfig, RcFile};
use crate::error::GenerateError;
use crate::executor::Generator;
use crate::logger::Logger;
use crate::plan::{ComponentKind, DuckOptions, Plan, TemplateData, ViewOptions};
use crate::product::ProductConfig;
use crate::templates::{TemplateRenderer, TemplateSource};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Generation flags shared by every product binary
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Generate a view with the given name
    #[arg(short = 'v', long = "view", value_name = "NAME")]
    pub view: Option<String>,

    /// Component type of the view
    #[arg(value_enum, value_name = "TYPE", requires = "view")]
    pub kind: Option<ComponentKind>,

    /// Generate a duck with the given name
    #[arg(short = 'd', long = "duck", value_name = "NAME")]
    pub duck: Option<String>,

    /// Generate with story, css and connected version (reselect for ducks)
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Add a connected index.js and props.js to the view
    #[arg(short = 'x', long)]
    pub connected: bool,

    /// Add a css modules file to the view
    #[arg(short = 'c', long)]
    pub css: bool,

    /// Add a story file to the view
    #[arg(short = 's', long)]
    pub story: bool,

    /// Generate the duck with reselect selectors
    #[arg(short = 'r', long)]
    pub reselect: bool,

    /// Generate the view as its own package
    #[arg(short = 'p', long)]
    pub package: bool,

    /// Package description
    #[arg(long = "desc", value_name = "TEXT")]
    pub description: Option<String>,

    /// Generate with interactive prompts
    #[arg(long)]
    pub prompt: bool,

    /// Project root (defaults to the nearest directory holding package.json)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Local directory to load templates from instead of the built-in set
    #[arg(long = "template-dir", value_name = "DIR")]
    pub template_dir: Option<PathBuf>,
}

impl GenerateArgs {
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            kind: self.kind.unwrap_or_default(),
            connected: self.connected || self.all,
            css: self.css || self.all,
            story: self.story || self.all,
            package: self.package,
        }
    }

    pub fn duck_options(&self) -> DuckOptions {
        DuckOptions {
            reselect: self.reselect || self.all,
        }
    }

    /// Explicit `--root`, else the nearest package.json ancestor of the cwd
    pub fn project_root(&self) -> Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => {
                let cwd = std::env::current_dir().context("Failed to read current directory")?;
                Ok(find_project_root(&cwd))
            }
        }
    }

    /// Plans requested by the flags, views before ducks
    pub fn plans(&self, project: &ProjectConfig, contributor: &str) -> Result<Vec<Plan>> {
        let mut plans = Vec::new();

        if let Some(name) = &self.view {
            let description = self
                .description
                .clone()
                .unwrap_or_else(|| format!("{} component", name));
            let data = TemplateData {
                name: name.clone(),
                app_name: project.app_name.clone(),
                contributor: contributor.to_string(),
                description,
            };
            plans.push(Plan::view(
                &project.view_dir,
                &self.view_options(),
                &project.folders,
                data,
            )?);
        }

        if let Some(name) = &self.duck {
            let data = TemplateData {
                name: name.clone(),
                app_name: project.app_name.clone(),
                contributor: contributor.to_string(),
                description: self.description.clone().unwrap_or_default(),
            };
            plans.push(Plan::duck(&project.state_dir, &self.duck_options(), data)?);
        }

        Ok(plans)
    }
}

/// Write the default rc file at the project root
pub async fn write_rc<C: ProductConfig>(config: &C, args: &GenerateArgs) -> Result<()> {
    let logger = Logger::for_product(config);
    let root = args.project_root()?;
    let app_name = crate::config::package_name(&root).await;
    let path = root.join(config.rc_file_name());

    if RcFile::defaults(&app_name).write_new(&path).await? {
        logger.success(format!(
            "Writing {} with defaults at {}",
            config.rc_file_name(),
            path.display()
        ));
    } else {
        logger.warn(format!(
            "{} already exists, leaving it untouched",
            path.display()
        ));
    }
    Ok(())
}

/// Run one generation from flags (or prompts when `--prompt` is set)
pub async fn run<C: ProductConfig>(config: &C, args: GenerateArgs) -> Result<()> {
    let logger = Logger::for_product(config);
    let root = args.project_root()?;
    let project = ProjectConfig::load(&root, config.rc_file_name()).await?;
    let source = TemplateSource::from_dir(args.template_dir.clone());

    if args.prompt {
        return run_prompts(config, &project, &source).await;
    }

    if !project.rc_found {
        logger.warn(format!(
            "No {} file exists. Create one with {} flag. Modify as needed.",
            config.rc_file_name(),
            config.rc_flag()
        ));
    }

    let plans = args.plans(&project, &contributor())?;
    if plans.is_empty() {
        logger.info(format!(
            "Nothing to generate. Pass -v <NAME> or -d <NAME>, or see {} --help",
            config.name()
        ));
        return Ok(());
    }

    let renderer = TemplateRenderer::load(&source).await?;
    Generator::new(&renderer, &logger).run(&plans).await?;
    Ok(())
}

#[cfg(feature = "tui")]
async fn run_prompts<C: ProductConfig>(
    config: &C,
    project: &ProjectConfig,
    source: &TemplateSource,
) -> Result<()> {
    crate::tui::run(config, project, source).await
}

#[cfg(not(feature = "tui"))]
async fn run_prompts<C: ProductConfig>(
    _config: &C,
    _project: &ProjectConfig,
    _source: &TemplateSource,
) -> Result<()> {
    anyhow::bail!("Interactive prompts are not available in this build (enable the `tui` feature)")
}

/// Print a failed run the way the generator reports everything else
pub fn report_error<C: ProductConfig>(config: &C, err: &anyhow::Error) {
    let logger = Logger::for_product(config);
    match err.downcast_ref::<GenerateError>() {
        Some(GenerateError::AlreadyExists { .. } | GenerateError::DuplicateTarget(_)) => {
            logger.warn(format!("{}. Aborting...", err))
        }
        _ => logger.warn(format!("{:#}", err)),
    }
}
