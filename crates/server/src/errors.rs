use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::multipart::MultipartError;
use serde_json::json;
use socialyze::{ExtractError, PipelineError};
use tracing::{error, warn};

/// A custom error type for the server application.
///
/// Only client input problems and extraction failures end a request
/// unsuccessfully; everything else inside the pipeline degrades instead.
#[derive(Debug)]
pub enum AppError {
    /// A missing, unsupported or oversize upload, rejected before the pipeline runs.
    ClientInput(String),
    /// Text could not be extracted from the upload.
    Extraction(ExtractError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Extraction(e) => AppError::Extraction(e),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::ClientInput(err.body_text())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, category, message) = match self {
            AppError::ClientInput(message) => {
                warn!("Rejected upload: {message}");
                (StatusCode::BAD_REQUEST, "client_input", message)
            }
            AppError::Extraction(err) => {
                // Tool output stays in the log; the caller gets a generic message.
                error!("Extraction failed: {:?}", err);
                let message = match err {
                    ExtractError::Ocr(_) => "OCR processing failed",
                    _ => "Document processing failed",
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "extraction_failed",
                    message.to_string(),
                )
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "error": category,
            "message": message,
        }));

        (status_code, body).into_response()
    }
}
