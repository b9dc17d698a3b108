//! Handlebars rendering with the case helpers used by the templates
//!
//! Helpers:
//! - `upperCase`, `properCase`, `camelCase`, `paramCase`, `constantCase`
//! - `curly`: `{{curly true}}` renders `{`, `{{curly}}` renders `}`

use super::embedded::TemplateId;
use super::source::TemplateSource;
use crate::error::GenerateError;
use handlebars::{
    handlebars_helper, Context, Handlebars, Helper, HelperResult, Output, RenderContext,
};
use heck::{ToKebabCase, ToLowerCamelCase, ToPascalCase, ToShoutySnakeCase};
use serde::Serialize;

handlebars_helper!(upper_case: |s: str| s.to_uppercase());
handlebars_helper!(proper_case: |s: str| s.to_pascal_case());
handlebars_helper!(camel_case: |s: str| s.to_lower_camel_case());
handlebars_helper!(param_case: |s: str| s.to_kebab_case());
handlebars_helper!(constant_case: |s: str| s.to_shouty_snake_case());

fn curly(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let open = h
        .param(0)
        .map(|p| {
            let value = p.value();
            value.as_bool().unwrap_or(!value.is_null())
        })
        .unwrap_or(false);
    out.write(if open { "{" } else { "}" })?;
    Ok(())
}

/// Renders registered templates by [`TemplateId`]
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Registry with helpers but no templates
    fn empty() -> Self {
        let mut registry = Handlebars::new();
        // Output is source code, not HTML
        registry.register_escape_fn(handlebars::no_escape);
        registry.register_helper("upperCase", Box::new(upper_case));
        registry.register_helper("properCase", Box::new(proper_case));
        registry.register_helper("camelCase", Box::new(camel_case));
        registry.register_helper("paramCase", Box::new(param_case));
        registry.register_helper("constantCase", Box::new(constant_case));
        registry.register_helper("curly", Box::new(curly));
        Self { registry }
    }

    /// Load and compile every template from `source`
    pub async fn load(source: &TemplateSource) -> Result<Self, GenerateError> {
        let mut renderer = Self::empty();
        for id in TemplateId::ALL {
            let content = source.load(id).await?;
            renderer.register(id, &content)?;
        }
        Ok(renderer)
    }

    /// Renderer over the embedded templates only
    pub fn embedded() -> Result<Self, GenerateError> {
        let mut renderer = Self::empty();
        for id in TemplateId::ALL {
            renderer.register(id, id.embedded())?;
        }
        Ok(renderer)
    }

    fn register(&mut self, id: TemplateId, content: &str) -> Result<(), GenerateError> {
        self.registry
            .register_template_string(id.path(), content)
            .map_err(|e| GenerateError::Template {
                name: id.path().to_string(),
                message: e.to_string(),
            })
    }

    pub fn render<T: Serialize>(&self, id: TemplateId, data: &T) -> Result<String, GenerateError> {
        self.registry
            .render(id.path(), data)
            .map_err(|e| GenerateError::Template {
                name: id.path().to_string(),
                message: e.to_string(),
            })
    }
}
