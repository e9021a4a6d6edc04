//! Text assembly: named templates with `$placeholder$` expressions.
//!
//! A template is plain text where `$name$` inserts the value bound to `name`,
//! `$name; separator=", "$` inserts a sequence joined by the separator, `$! ... !$` is a
//! comment (eating the line break that follows it) and `$$` is a literal dollar sign.

mod compile;
mod group;
mod value;

pub use group::TemplateGroup;
pub use value::{Placeholders, Value};

use crate::Result;

/// Turns a named template and its placeholder values into text.
///
/// Implementations must be deterministic. Failing to find or load a template is an error
/// of the deployment, never of the data.
pub trait TemplateRenderer {
    /// Renders the template called `name`.
    ///
    /// # Arguments
    /// * `name` - The template to render.
    /// * `placeholders` - The values to substitute.
    ///
    /// # Returns
    /// The rendered text or an error if the template cannot be loaded or rendered.
    fn render(&self, name: &str, placeholders: &Placeholders) -> Result<String>;
}

impl<R: TemplateRenderer + ?Sized> TemplateRenderer for &R {
    fn render(&self, name: &str, placeholders: &Placeholders) -> Result<String> {
        (**self).render(name, placeholders)
    }
}
