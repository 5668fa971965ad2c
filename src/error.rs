//! Error taxonomy for the notes workflow.
//!
//! Every failure ends up as a user-visible message: validation problems are
//! warnings, configuration and backend problems are errors.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    /// No usable credential for the generation service. Blocks every attempt.
    #[error("Generation service is not configured: {0}")]
    Configuration(String),

    /// Input rejected before any call is made.
    #[error("{0}")]
    Validation(String),

    #[error("Note generation failed: {0}")]
    Backend(#[from] BackendError),
}

/// Failures of the outbound generation call.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("refusing to send an empty prompt")]
    EmptyPrompt,

    #[error("could not reach the generation service ({0})")]
    Transport(String),

    #[error("the generation service did not answer within {0}s")]
    Timeout(u64),

    #[error("the generation service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("the generation service response could not be read ({0})")]
    Malformed(String),

    #[error("the generation service returned no note text")]
    EmptyResponse,
}

impl NoteError {
    pub fn kind(&self) -> &'static str {
        match self {
            NoteError::Configuration(_) => "configuration",
            NoteError::Validation(_) => "validation",
            NoteError::Backend(_) => "backend",
        }
    }

    /// Validation failures are shown as warnings, everything else as errors.
    pub fn level(&self) -> &'static str {
        match self {
            NoteError::Validation(_) => "warning",
            _ => "error",
        }
    }
}

impl From<ValidationErrors> for NoteError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Invalid value for {}", field),
                })
            })
            .collect();
        // field_errors() is a HashMap; keep the message stable
        messages.sort();
        NoteError::Validation(messages.join(" "))
    }
}

/// JSON error body returned by the API.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub level: &'static str,
    pub kind: &'static str,
    pub message: String,
}

impl ResponseError for NoteError {
    fn status_code(&self) -> StatusCode {
        match self {
            NoteError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
            NoteError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            NoteError::Backend(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            level: self.level(),
            kind: self.kind(),
            message: self.to_string(),
        })
    }
}
