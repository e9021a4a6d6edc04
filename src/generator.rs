use log::debug;
use representation::Representation;

use crate::{
    CodegenConfig, Result,
    router::{self, Encoded},
    template::{TemplateGroup, TemplateRenderer},
};

/// Returned instead of code when generation is disabled.
pub const DISABLED_SENTINEL: &str = "/* codegen disabled */";

/// Returned instead of code for representations the generator does not support.
pub const UNKNOWN_SENTINEL: &str = "/* unknown representation type */";

/// Exports representations as C++ source code.
///
/// Only fully meshed nets are supported; anything else yields `UNKNOWN_SENTINEL`.
#[derive(Debug)]
pub struct CodeGenerator<R = TemplateGroup> {
    enabled: bool,
    renderer: R,
}

impl CodeGenerator {
    /// Creates a new `CodeGenerator` rendering the embedded templates.
    ///
    /// # Arguments
    /// * `enabled` - Whether code is generated at all.
    ///
    /// # Returns
    /// A new `CodeGenerator` instance.
    pub fn new(enabled: bool) -> Self {
        Self::with_renderer(enabled, TemplateGroup::embedded())
    }

    /// Creates a new `CodeGenerator` following a configuration.
    ///
    /// # Arguments
    /// * `config` - The exporter configuration.
    ///
    /// # Returns
    /// A generator reading templates from `config.template_dir` if set, the embedded ones
    /// otherwise.
    pub fn from_config(config: &CodegenConfig) -> Self {
        let renderer = match &config.template_dir {
            Some(dir) => TemplateGroup::dir(dir),
            None => TemplateGroup::embedded(),
        };

        Self::with_renderer(config.enabled, renderer)
    }
}

impl<R: TemplateRenderer> CodeGenerator<R> {
    /// Creates a new `CodeGenerator` rendering through `renderer`.
    pub fn with_renderer(enabled: bool, renderer: R) -> Self {
        Self { enabled, renderer }
    }

    /// Converts a representation to code.
    ///
    /// When disabled, the representation is not even looked at.
    ///
    /// # Arguments
    /// * `representation` - The representation to export, if any.
    ///
    /// # Returns
    /// The generated code, `DISABLED_SENTINEL` or `UNKNOWN_SENTINEL`. Fails only if the
    /// template cannot be loaded or rendered.
    pub fn generate(&self, representation: Option<&Representation>) -> Result<String> {
        if !self.enabled {
            debug!("codegen disabled, skipping representation");
            return Ok(DISABLED_SENTINEL.to_string());
        }

        let Some(Encoded {
            template,
            placeholders,
        }) = router::route(representation).encode()
        else {
            debug!("unsupported representation, nothing to generate");
            return Ok(UNKNOWN_SENTINEL.to_string());
        };

        debug!(template = template; "rendering representation");
        self.renderer.render(template, &placeholders)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
