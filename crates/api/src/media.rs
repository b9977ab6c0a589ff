//! Local-disk media store.
//!
//! Uploaded images live under `<root_dir>/<category>/` with uuid-based names
//! and are served read-only at `/media`. Only the returned public URL is ever
//! persisted. Deletion is best-effort: a file left behind after a failed
//! database write is an accepted orphan, logged and never fatal.

use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

use crate::config::MediaConfig;

/// Upload categories, one directory per content area.
const CATEGORIES: &[&str] = &[
    "events",
    "announcements",
    "gallery",
    "team",
    "facilities",
];

/// File extensions accepted for upload.
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "svg"];

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("File exceeds the {0} byte upload limit")]
    TooLarge(usize),

    #[error("Unknown upload category: {0}")]
    UnknownCategory(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),
}

/// Local filesystem store for uploaded media.
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
    public_base_url: String,
    max_bytes: usize,
}

impl MediaStore {
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            root: PathBuf::from(&config.root_dir),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
            max_bytes: config.max_upload_bytes,
        }
    }

    /// Directory served by the static file layer.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Store one file and return its durable public URL.
    pub async fn upload(
        &self,
        category: &str,
        original_filename: &str,
        bytes: &[u8],
    ) -> Result<String, MediaError> {
        if !CATEGORIES.contains(&category) {
            return Err(MediaError::UnknownCategory(category.to_string()));
        }

        if bytes.len() > self.max_bytes {
            return Err(MediaError::TooLarge(self.max_bytes));
        }

        let extension = sanitized_extension(original_filename)
            .ok_or_else(|| MediaError::UnsupportedType(original_filename.to_string()))?;

        let filename = format!("{}.{}", Uuid::new_v4(), extension);
        let dir = self.root.join(category);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&filename), bytes).await?;

        tracing::info!(category = category, filename = %filename, size = bytes.len(), "Stored media file");

        Ok(format!(
            "{}/media/{}/{}",
            self.public_base_url, category, filename
        ))
    }

    /// Remove the file behind a previously returned URL. Failures are logged
    /// and swallowed; URLs this store did not issue are ignored.
    pub async fn delete(&self, url: &str) {
        let Some(relative) = self.relative_path(url) else {
            tracing::warn!(url = url, "Skipping delete of foreign media URL");
            return;
        };

        let path = self.root.join(relative);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::warn!(url = url, error = %e, "Failed to delete media file");
        }
    }

    /// Maps a public URL back to a path relative to the media root, refusing
    /// anything that escapes it.
    fn relative_path(&self, url: &str) -> Option<String> {
        let prefix = format!("{}/media/", self.public_base_url);
        let relative = url.strip_prefix(&prefix)?;
        if relative.is_empty() || relative.contains("..") || relative.starts_with('/') {
            return None;
        }
        Some(relative.to_string())
    }
}

/// Lowercased extension of the original filename, if it is one we accept.
fn sanitized_extension(filename: &str) -> Option<String> {
    let extension = Path::new(filename).extension()?.to_str()?.to_lowercase();
    if ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        Some(extension)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MediaConfig;

    fn store() -> MediaStore {
        MediaStore::new(&MediaConfig {
            root_dir: "media".to_string(),
            public_base_url: "https://example.org".to_string(),
            max_upload_bytes: 1024,
        })
    }

    #[test]
    fn test_extension_whitelist() {
        assert_eq!(sanitized_extension("photo.JPG"), Some("jpg".to_string()));
        assert_eq!(sanitized_extension("photo.webp"), Some("webp".to_string()));
        assert_eq!(sanitized_extension("script.exe"), None);
        assert_eq!(sanitized_extension("no-extension"), None);
    }

    #[test]
    fn test_relative_path_from_own_url() {
        let store = store();
        assert_eq!(
            store.relative_path("https://example.org/media/events/abc.jpg"),
            Some("events/abc.jpg".to_string())
        );
    }

    #[test]
    fn test_relative_path_rejects_foreign_and_escaping_urls() {
        let store = store();
        assert_eq!(store.relative_path("https://elsewhere.net/media/a.jpg"), None);
        assert_eq!(
            store.relative_path("https://example.org/media/../secrets.txt"),
            None
        );
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let store = MediaStore::new(&MediaConfig {
            root_dir: "media".to_string(),
            public_base_url: "https://example.org/".to_string(),
            max_upload_bytes: 1024,
        });
        assert_eq!(
            store.relative_path("https://example.org/media/team/x.png"),
            Some("team/x.png".to_string())
        );
    }

    #[tokio::test]
    async fn test_upload_rejects_oversized_payload() {
        let store = store();
        let bytes = vec![0u8; 2048];
        let result = store.upload("events", "big.jpg", &bytes).await;
        assert!(matches!(result, Err(MediaError::TooLarge(1024))));
    }

    #[tokio::test]
    async fn test_upload_rejects_unknown_category() {
        let store = store();
        let result = store.upload("downloads", "a.jpg", &[1, 2, 3]).await;
        assert!(matches!(result, Err(MediaError::UnknownCategory(_))));
    }

    #[tokio::test]
    async fn test_upload_rejects_unsupported_type() {
        let store = store();
        let result = store.upload("events", "malware.exe", &[1, 2, 3]).await;
        assert!(matches!(result, Err(MediaError::UnsupportedType(_))));
    }
}
