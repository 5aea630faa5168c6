//! # Upload Handler
//!
//! Receives one file, validates it against the accepted media types and size
//! limit, writes it to the upload directory and runs the analysis pipeline.

use super::{AppError, AppState};
use axum::{body::Bytes, extract::State, Json};
use axum_extra::extract::Multipart;
use chrono::Utc;
use socialyze::{MediaType, ResponseEnvelope, UploadedFile};
use std::path::Path;
use tracing::{info, warn};

struct ReceivedFile {
    original_name: String,
    media_type: MediaType,
    data: Bytes,
}

/// Handler for `POST /api/upload`.
pub async fn upload_handler(
    State(app_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResponseEnvelope>, AppError> {
    let max_bytes = app_state.config.max_upload_bytes;
    let mut received: Option<ReceivedFile> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        if name != "file" {
            warn!("Ignoring unknown multipart field: {}", name);
            continue;
        }
        if received.is_some() {
            return Err(AppError::ClientInput(
                "Only one file may be uploaded per request".to_string(),
            ));
        }

        let content_type = field.content_type().unwrap_or("").to_string();
        let media_type = MediaType::from_mime(&content_type)
            .ok_or_else(|| AppError::ClientInput("Unsupported file type".to_string()))?;
        let original_name = field.file_name().unwrap_or("upload").to_string();
        let data = field.bytes().await?;

        if data.len() > max_bytes {
            return Err(AppError::ClientInput(format!(
                "File too large: limit is {max_bytes} bytes"
            )));
        }

        info!(
            "Received upload '{}' ({}, {} bytes)",
            original_name,
            media_type.as_mime(),
            data.len()
        );
        received = Some(ReceivedFile {
            original_name,
            media_type,
            data,
        });
    }

    let received =
        received.ok_or_else(|| AppError::ClientInput("No file uploaded".to_string()))?;

    let file = UploadedFile::new(
        Path::new(&app_state.config.upload_dir),
        &received.original_name,
        received.media_type,
        received.data.len(),
        Utc::now().timestamp_millis(),
    );
    tokio::fs::write(&file.path, &received.data)
        .await
        .map_err(anyhow::Error::from)?;

    let envelope = app_state.pipeline.run(&file).await?;
    Ok(Json(envelope))
}
