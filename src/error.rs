use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RevisionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("response contained no choices")]
    EmptyChoices,

    #[error("response choice is missing the '{0}' field")]
    MissingField(&'static str),

    #[error("Unsupported model name: {0}")]
    UnsupportedModel(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("docx container error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Revision(#[from] RevisionError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("background task failed: {0}")]
    Blocking(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Revision(RevisionError::UnsupportedModel(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            AppError::Revision(RevisionError::UnsupportedModel(_)) => {
                log::warn!("Rejected request: {self}");
                HttpResponse::build(status).json(serde_json::json!({
                    "status": "Error",
                    "revised": self.to_string(),
                }))
            }
            AppError::Revision(err) => {
                log::error!("Revision failed: {err}");
                HttpResponse::build(status).json(serde_json::json!({
                    "status": "Error",
                    "error": "The language model service request failed",
                }))
            }
            AppError::Export(err) => {
                log::error!("Export failed: {err}");
                HttpResponse::build(status).json(serde_json::json!({
                    "status": "Error",
                    "error": "Could not produce the revised document",
                }))
            }
            AppError::Blocking(msg) => {
                log::error!("Blocking task failed: {msg}");
                HttpResponse::build(status).json(serde_json::json!({
                    "status": "Error",
                    "error": "An internal server error occurred",
                }))
            }
        }
    }
}
