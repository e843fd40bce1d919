use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormattingError {
    #[error("Gemini API key not configured")]
    MissingCredential,
    #[error("Could not reach the inference service: {0}")]
    TransportFailure(String),
    #[error("Request timed out after {} seconds", .0.as_secs_f32())]
    Timeout(Duration),
    #[error("{message}")]
    RemoteError { status: u16, message: String },
    #[error("No text extracted from image")]
    EmptyResult,
}

impl FormattingError {
    pub fn kind(&self) -> &'static str {
        match self {
            FormattingError::MissingCredential => "missing_credential",
            FormattingError::TransportFailure(_) => "transport_failure",
            FormattingError::Timeout(_) => "timeout",
            FormattingError::RemoteError { .. } => "remote_error",
            FormattingError::EmptyResult => "empty_result",
        }
    }
}
