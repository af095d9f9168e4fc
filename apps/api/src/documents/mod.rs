pub mod extract;
pub mod handlers;
pub mod prompts;

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::{debug, info};

use crate::documents::extract::{extract_text, ExtractedDocument};
use crate::errors::AppError;

/// Multipart field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

/// Reads the `file` field of a multipart upload. Other fields are skipped.
pub async fn read_upload(mut multipart: Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {}", e.body_text())))?
    {
        if field.name() != Some(FILE_FIELD) {
            debug!("Skipping multipart field {:?}", field.name());
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid file upload: {}", e.body_text())))?;
        return Ok((file_name, data));
    }

    Err(AppError::Validation(format!(
        "Multipart field '{FILE_FIELD}' is required"
    )))
}

/// Runs extraction on the blocking pool; PDF and spreadsheet parsing is CPU-bound.
pub async fn extract_upload(file_name: String, data: Bytes) -> Result<ExtractedDocument, AppError> {
    let size = data.len();
    let document = tokio::task::spawn_blocking(move || extract_text(&file_name, &data))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}")))??;

    info!(
        file_name = %document.file_name,
        kind = ?document.kind,
        bytes = size,
        chars = document.text.chars().count(),
        "Document extracted"
    );
    Ok(document)
}
