//! Charm-style generator prompts using cliclack

use crate::config::{contributor, git_author, ProjectConfig};
use crate::executor::Generator;
use crate::logger::Logger;
use crate::plan::{validate_name, ComponentKind, DuckOptions, Plan, TemplateData, ViewOptions};
use crate::product::ProductConfig;
use crate::templates::{TemplateRenderer, TemplateSource};
use anyhow::Result;
use heck::ToPascalCase;
use std::path::{Path, PathBuf};

const DEFAULT_COMPONENT_NAME: &str = "SizePicker";
const DEFAULT_DUCK_NAME: &str = "Form";

/// Which generator to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GeneratorKind {
    Component,
    Package,
    Duck,
}

/// Run the interactive generators
pub async fn run<C: ProductConfig>(
    config: &C,
    project: &ProjectConfig,
    source: &TemplateSource,
) -> Result<()> {
    cliclack::intro(config.display_name())?;
    cliclack::log::remark(config.cli_description())?;
    if !project.rc_found {
        cliclack::log::warning(format!(
            "No {} found, using default folders",
            config.rc_file_name()
        ))?;
    }

    let generator: GeneratorKind = cliclack::select("What would you like to generate?")
        .item(
            GeneratorKind::Component,
            "Component",
            format!("in {}", project.relative(&project.view_dir)),
        )
        .item(
            GeneratorKind::Package,
            "Component package",
            "standalone package with its own package.json",
        )
        .item(
            GeneratorKind::Duck,
            "Duck",
            format!("in {}", project.relative(&project.state_dir)),
        )
        .interact()?;

    let plan = match generator {
        GeneratorKind::Component => prompt_component(project)?,
        GeneratorKind::Package => prompt_package(project)?,
        GeneratorKind::Duck => prompt_duck(project)?,
    };

    let Some(plan) = plan else {
        cliclack::outro("Nothing written.")?;
        return Ok(());
    };

    let spinner = cliclack::spinner();
    spinner.start("Loading templates...");
    let renderer = match TemplateRenderer::load(source).await {
        Ok(renderer) => {
            spinner.stop("Templates loaded");
            renderer
        }
        Err(e) => {
            spinner.stop("Failed to load templates");
            return Err(e.into());
        }
    };

    let logger = Logger::for_product(config);
    let written = Generator::new(&renderer, &logger).run(&[plan]).await?;

    cliclack::outro(format!("Wrote {} files", written.len()))?;
    Ok(())
}

fn select_kind(initial: ComponentKind) -> Result<ComponentKind> {
    let mut select = cliclack::select("Select the type of component");
    for kind in [ComponentKind::Func, ComponentKind::Class, ComponentKind::Pure] {
        select = select.item(kind, kind.display_name(), "");
    }
    Ok(select.initial_value(initial).interact()?)
}

/// Ask for a name that is not yet taken in `dir`; returns it PascalCased
fn input_name(prompt: &str, default: &str, dir: &Path) -> Result<String> {
    let dir = dir.to_path_buf();
    let input: String = cliclack::input(prompt)
        .placeholder(default)
        .default_input(default)
        .validate(move |value: &String| {
            let name = value.trim().to_pascal_case();
            if name.is_empty() {
                return Err("Name is required".to_string());
            }
            if validate_name(&name).is_err() {
                return Err(format!("'{}' is not a valid directory name", value));
            }
            if dir.join(&name).exists() {
                return Err(format!("A directory named {} already exists", name));
            }
            Ok(())
        })
        .interact()?;

    Ok(input.trim().to_pascal_case())
}

fn confirm(prompt: &str, initial: bool) -> Result<bool> {
    Ok(cliclack::confirm(prompt).initial_value(initial).interact()?)
}

fn final_confirm() -> Result<bool> {
    confirm("Does everything look ok? Files will be written if so.", true)
}

fn prompt_component(project: &ProjectConfig) -> Result<Option<Plan>> {
    let kind = select_kind(ComponentKind::Func)?;
    let name = input_name("Name the component", DEFAULT_COMPONENT_NAME, &project.view_dir)?;
    let connected = confirm(
        "Add a connected version (index.js binds the component with connect)?",
        true,
    )?;
    let story = confirm("Add a story file (will this component use storybook)?", true)?;
    let css = confirm("Add a CSS file (will this component use CSS modules)?", true)?;

    if !final_confirm()? {
        return Ok(None);
    }

    let data = TemplateData {
        description: format!("{} component", name),
        name,
        app_name: project.app_name.clone(),
        contributor: contributor(),
    };
    let options = ViewOptions {
        kind,
        connected,
        css,
        story,
        package: false,
    };

    Ok(Some(Plan::view(
        &project.view_dir,
        &options,
        &project.folders,
        data,
    )?))
}

fn prompt_package(project: &ProjectConfig) -> Result<Option<Plan>> {
    let kind = select_kind(ComponentKind::Func)?;

    let default_dir = project.relative(&project.view_dir);
    let location: String = cliclack::input("Where should the package go?")
        .placeholder(&default_dir)
        .default_input(&default_dir)
        .interact()?;
    let output_dir = resolve_dir(&project.root, location.trim());

    let name = input_name("Name the component", DEFAULT_COMPONENT_NAME, &output_dir)?;

    let description: String = cliclack::input("How about a description?")
        .default_input(&format!("{} component", name))
        .interact()?;

    let author = git_author().unwrap_or_default();
    let answer: String = cliclack::input("And your name/email?")
        .placeholder(&author)
        .default_input(&author)
        .required(false)
        .interact()?;

    let css = confirm("Add a CSS file (will this component use CSS modules)?", true)?;

    if !final_confirm()? {
        return Ok(None);
    }

    let data = TemplateData {
        name,
        app_name: project.app_name.clone(),
        contributor: if answer.trim().is_empty() {
            contributor()
        } else {
            answer
        },
        description,
    };
    let options = ViewOptions {
        kind,
        connected: false,
        css,
        story: true,
        package: true,
    };

    Ok(Some(Plan::view(&output_dir, &options, &project.folders, data)?))
}

fn prompt_duck(project: &ProjectConfig) -> Result<Option<Plan>> {
    let name = input_name("Set the name", DEFAULT_DUCK_NAME, &project.state_dir)?;
    let reselect = confirm("Do you use reselect for selectors?", false)?;

    let data = TemplateData {
        description: String::new(),
        name,
        app_name: project.app_name.clone(),
        contributor: contributor(),
    };

    Ok(Some(Plan::duck(
        &project.state_dir,
        &DuckOptions { reselect },
        data,
    )?))
}

/// Relative answers are taken from the project root
fn resolve_dir(root: &Path, input: &str) -> PathBuf {
    if input.is_empty() || input == "." {
        return root.to_path_buf();
    }
    let path = PathBuf::from(input);
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}
