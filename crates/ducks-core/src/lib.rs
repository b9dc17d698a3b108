//! Ducks Core - Shared library for React view and Redux duck generator CLIs
//!
//! This library computes which boilerplate files to write for a view or a
//! duck, renders them from handlebars templates and writes them. It is used by
//! multiple CLI binaries (`jinn`, `ducks-gen`) that share the generation logic
//! but read different rc files.
//!
//! # Architecture
//!
//! - **Configuration** - rc file resolution with package-name derived defaults
//! - **Planning** - pure flag-to-file mapping (`Plan::view`, `Plan::duck`)
//! - **Execution** - all-or-nothing check, render and write (`Generator`)
//! - **CLI/TUI** - shared clap flags and optional cliclack prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based interactive generators
//!
//! # Example Usage (without the CLI)
//!
//! ```ignore
//! use ducks_core::{config::ProjectConfig, Generator, Logger, Plan, TemplateRenderer};
//!
//! let project = ProjectConfig::load(&root, ".jinnrc").await?;
//! let plan = Plan::duck(&project.state_dir, &DuckOptions::default(), data)?;
//! let renderer = TemplateRenderer::embedded()?;
//! Generator::new(&renderer, &Logger::new("Jinn")).run(&[plan]).await?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod logger;
pub mod plan;
pub mod product;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use cli::{report_error, run, write_rc, GenerateArgs};
pub use config::ProjectConfig;
pub use error::GenerateError;
pub use executor::Generator;
pub use logger::Logger;
pub use plan::{ComponentKind, DuckOptions, FileTask, Plan, TargetKind, TemplateData, ViewOptions};
pub use product::ProductConfig;
pub use templates::{TemplateId, TemplateRenderer, TemplateSource};
