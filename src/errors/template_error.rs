use crate::common::*;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("no root template has been defined")]
    NoRootTemplate,

    #[error("template '{0}' is not defined")]
    UnknownTemplate(String),

    #[error("template '{template}' has no value for '{key}'")]
    MissingValue { template: String, key: String },
}
