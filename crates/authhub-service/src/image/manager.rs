//! Base64 image file storage on the local filesystem.
//!
//! Admin panel images arrive as base64 payloads, optionally carrying a
//! `data:image/<ext>;base64,` header. Files are written under a configured
//! root and addressed by their root-relative URL (`prefix/name.ext`).

use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tokio::fs;
use tracing::debug;

use authhub_core::error::{AppError, ErrorKind};
use authhub_core::result::AppResult;

/// Fallback extension when the payload carries no data-URL header.
const DEFAULT_EXTENSION: &str = "png";

/// Stores admin images under a root directory.
#[derive(Debug, Clone)]
pub struct ImageManager {
    /// Root directory for all stored images.
    root: PathBuf,
}

impl ImageManager {
    /// Create a new image manager rooted at the given path.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create image root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Decode the payload, write it under `prefix/name.ext`, and return
    /// that root-relative URL.
    pub async fn create_image(
        &self,
        prefix: &str,
        name: &str,
        encoded: &str,
    ) -> AppResult<String> {
        let (data, extension) = decode_payload(encoded)?;

        let url = format!(
            "{}/{}.{}",
            prefix.trim_matches('/'),
            name.trim_matches('/'),
            extension
        );
        let full_path = self.resolve(&url)?;
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write image: {url}"),
                e,
            )
        })?;

        debug!(url = %url, bytes = data.len(), "Image created");
        Ok(url)
    }

    /// Overwrite the content of an existing image.
    pub async fn update_image(&self, url: &str, encoded: &str) -> AppResult<()> {
        let (data, _) = decode_payload(encoded)?;
        let full_path = self.resolve(url)?;

        if fs::metadata(&full_path).await.is_err() {
            return Err(AppError::not_found(format!("Image not found: {url}")));
        }

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to update image: {url}"),
                e,
            )
        })?;

        debug!(url = %url, bytes = data.len(), "Image updated");
        Ok(())
    }

    /// Remove an image file.
    pub async fn delete_image(&self, url: &str) -> AppResult<()> {
        let full_path = self.resolve(url)?;

        fs::remove_file(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Image not found: {url}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to delete image: {url}"),
                    e,
                )
            }
        })?;

        debug!(url = %url, "Image deleted");
        Ok(())
    }

    /// Resolve a root-relative URL to an absolute path within the root.
    fn resolve(&self, url: &str) -> AppResult<PathBuf> {
        let clean = url.trim_start_matches('/');
        if clean.is_empty() || Path::new(clean).components().any(|c| {
            matches!(
                c,
                std::path::Component::ParentDir | std::path::Component::RootDir
            )
        }) {
            return Err(AppError::validation(format!("Invalid image url: {url}")));
        }
        Ok(self.root.join(clean))
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

/// Decode a base64 payload, honoring an optional data-URL header, and
/// return the raw bytes together with the file extension to use.
fn decode_payload(encoded: &str) -> AppResult<(Vec<u8>, String)> {
    let (body, extension) = match encoded.strip_prefix("data:image/") {
        Some(rest) => {
            let (ext, body) = rest.split_once(";base64,").ok_or_else(|| {
                AppError::validation("Malformed image data URL header")
            })?;
            (body, ext.to_string())
        }
        None => (encoded, DEFAULT_EXTENSION.to_string()),
    };

    let data = BASE64
        .decode(body.trim())
        .map_err(|e| AppError::validation(format!("Invalid base64 image payload: {e}")))?;

    Ok((data, extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIXEL: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn encoded_pixel() -> String {
        format!("data:image/png;base64,{}", BASE64.encode(PIXEL))
    }

    async fn manager() -> (tempfile::TempDir, ImageManager) {
        let dir = tempfile::tempdir().unwrap();
        let manager = ImageManager::new(dir.path().to_str().unwrap()).await.unwrap();
        (dir, manager)
    }

    #[tokio::test]
    async fn test_create_writes_at_designated_url() {
        let (dir, manager) = manager().await;

        let url = manager
            .create_image("banners", "main", &encoded_pixel())
            .await
            .unwrap();

        assert_eq!(url, "banners/main.png");
        let written = std::fs::read(dir.path().join(&url)).unwrap();
        assert_eq!(written, PIXEL);
    }

    #[tokio::test]
    async fn test_bare_base64_defaults_to_png() {
        let (_dir, manager) = manager().await;

        let url = manager
            .create_image("banners", "plain", &BASE64.encode(PIXEL))
            .await
            .unwrap();

        assert_eq!(url, "banners/plain.png");
    }

    #[tokio::test]
    async fn test_update_overwrites_existing_content() {
        let (dir, manager) = manager().await;
        let url = manager
            .create_image("banners", "main", &encoded_pixel())
            .await
            .unwrap();

        let replacement = format!("data:image/png;base64,{}", BASE64.encode(b"replacement"));
        manager.update_image(&url, &replacement).await.unwrap();

        let written = std::fs::read(dir.path().join(&url)).unwrap();
        assert_eq!(written, b"replacement");
    }

    #[tokio::test]
    async fn test_update_missing_image_fails_not_found() {
        let (_dir, manager) = manager().await;

        let err = manager
            .update_image("banners/missing.png", &encoded_pixel())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_delete_removes_file() {
        let (dir, manager) = manager().await;
        let url = manager
            .create_image("banners", "main", &encoded_pixel())
            .await
            .unwrap();

        manager.delete_image(&url).await.unwrap();

        assert!(!dir.path().join(&url).exists());
        let err = manager.delete_image(&url).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_traversal_url_is_rejected() {
        let (_dir, manager) = manager().await;

        let err = manager
            .delete_image("../outside.png")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_invalid_base64_is_rejected() {
        let (_dir, manager) = manager().await;

        let err = manager
            .create_image("banners", "bad", "%%%not-base64%%%")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
