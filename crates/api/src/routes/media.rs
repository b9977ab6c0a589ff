//! Media upload route.
//!
//! Accepts multipart form data with any number of `file` parts and a
//! `category` field. Files are stored independently: one failure is
//! reported in place and never blocks the rest of the batch.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminAuth;
use crate::media::MediaError;

/// Outcome for one uploaded file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub files: Vec<UploadedFile>,
}

/// POST /api/v1/admin/media
pub async fn upload(
    State(state): State<AppState>,
    auth: AdminAuth,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut category: Option<String> = None;
    let mut pending: Vec<(String, Vec<u8>)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Upload(format!("Malformed multipart body: {}", e)))?
    {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("category") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::Upload(format!("Unreadable category field: {}", e)))?;
                category = Some(value);
            }
            Some("file") => {
                let file_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Upload(format!("Unreadable file part: {}", e)))?;
                pending.push((file_name, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let category =
        category.ok_or_else(|| ApiError::Validation("category field is required".into()))?;

    if pending.is_empty() {
        return Err(ApiError::Validation("No files in upload".into()));
    }

    let single = pending.len() == 1;
    let mut files = Vec::with_capacity(pending.len());
    for (file_name, bytes) in pending {
        match state.media.upload(&category, &file_name, &bytes).await {
            Ok(url) => files.push(UploadedFile {
                file_name,
                url: Some(url),
                error: None,
            }),
            Err(e) => {
                tracing::warn!(file = %file_name, error = %e, "Upload failed");
                // A batch of one gets the precise status instead of a
                // per-file error entry.
                if single {
                    return Err(map_media_error(e));
                }
                files.push(UploadedFile {
                    file_name,
                    url: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    tracing::info!(user_id = %auth.user_id, count = files.len(), category = %category, "Media upload processed");

    Ok(Json(UploadResponse { files }))
}

fn map_media_error(error: MediaError) -> ApiError {
    match error {
        MediaError::TooLarge(limit) => ApiError::UploadTooLarge(limit),
        other => ApiError::Upload(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uploaded_file_success_shape() {
        let file = UploadedFile {
            file_name: "banner.jpg".to_string(),
            url: Some("https://example.org/media/events/x.jpg".to_string()),
            error: None,
        };
        let json = serde_json::to_string(&file).unwrap();
        assert!(json.contains("\"fileName\":\"banner.jpg\""));
        assert!(!json.contains("error"));
    }

    #[test]
    fn test_uploaded_file_failure_shape() {
        let file = UploadedFile {
            file_name: "huge.png".to_string(),
            url: None,
            error: Some("File exceeds the 5242880 byte upload limit".to_string()),
        };
        let json = serde_json::to_string(&file).unwrap();
        assert!(json.contains("\"error\""));
        assert!(!json.contains("\"url\""));
    }

    #[test]
    fn test_map_media_error_too_large() {
        let error = map_media_error(MediaError::TooLarge(1024));
        assert!(matches!(error, ApiError::UploadTooLarge(1024)));
    }
}
