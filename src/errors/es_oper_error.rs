use crate::common::*;

use crate::errors::template_error::*;

/// Failures surfaced by [`EsOper`](crate::traits::repository::es_oper_trait::EsOper).
///
/// Client and (de)serialization errors are passed through untouched; only a
/// non-2xx response is turned into a new error.
#[derive(Debug, Error)]
pub enum EsOperError {
    #[error(transparent)]
    Transport(#[from] elasticsearch::Error),

    #[error("elasticsearch response status indicates failure: [{status}] {body}")]
    ResponseStatus { status: StatusCode, body: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("field '{0}' is missing or not numeric in the response")]
    MissingField(&'static str),
}

impl EsOperError {
    #[doc = "Status code of a failed response, if this error came from one."]
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            EsOperError::ResponseStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_status_message_embeds_status_and_body() {
        let err = EsOperError::ResponseStatus {
            status: StatusCode::NOT_FOUND,
            body: r#"{"found":false}"#.to_string(),
        };

        assert_eq!(
            err.to_string(),
            r#"elasticsearch response status indicates failure: [404 Not Found] {"found":false}"#
        );
        assert_eq!(err.status_code(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn template_errors_pass_through_unchanged() {
        let err: EsOperError = TemplateError::UnknownTemplate("by_author".to_string()).into();

        assert_eq!(err.to_string(), "template 'by_author' is not defined");
        assert!(err.status_code().is_none());
    }
}
