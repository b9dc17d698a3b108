//! Template identifiers, loading and rendering
//!
//! This module provides:
//! - `TemplateId`: every view/state/package template, with its embedded content
//! - `TemplateSource`: embedded templates or a local override directory
//! - `TemplateRenderer`: handlebars registry with the case helpers

pub mod embedded;
pub mod renderer;
pub mod source;

pub use embedded::TemplateId;
pub use renderer::TemplateRenderer;
pub use source::TemplateSource;
