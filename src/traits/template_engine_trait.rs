use crate::common::*;

use crate::errors::template_error::*;

/// Text-template collaborator used to build query bodies.
pub trait TemplateEngine: Send + Sync {
    /// Renders the root template.
    fn execute(&self, data: &Value) -> Result<String, TemplateError>;

    /// Renders the template registered under `name`.
    fn execute_template(&self, name: &str, data: &Value) -> Result<String, TemplateError>;
}
