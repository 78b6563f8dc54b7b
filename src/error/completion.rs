//! Errors from the chat-completion call.

use crate::traits::HttpError;

/// Everything that can go wrong between sending the prompt and holding a
/// usable completion text.
///
/// Shape problems in the response body (`MissingContent`, `EmptyContent`)
/// are reported here too, so callers handle them exactly like HTTP errors.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// Transport failure before a status was received.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Non-2xx status from the API.
    #[error("API request failed ({status}): {message}")]
    Status { status: u16, message: String },

    /// Body was not valid JSON for the expected schema.
    #[error("invalid completion JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// `choices[0].message.content` is absent.
    #[error("completion response has no choices[0].message.content")]
    MissingContent,

    /// The content is present but blank.
    #[error("completion content is empty")]
    EmptyContent,
}

impl CompletionError {
    pub fn error_code(&self) -> &'static str {
        match self {
            CompletionError::Http(HttpError::Timeout(_)) => "COMPLETION_TIMEOUT",
            CompletionError::Http(_) => "COMPLETION_TRANSPORT",
            CompletionError::Status { .. } => "COMPLETION_STATUS",
            CompletionError::InvalidJson(_) => "COMPLETION_INVALID_JSON",
            CompletionError::MissingContent => "COMPLETION_MISSING_CONTENT",
            CompletionError::EmptyContent => "COMPLETION_EMPTY_CONTENT",
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, CompletionError::Http(_))
    }
}
