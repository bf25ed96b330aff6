// src/storage/mod.rs
use std::sync::Arc;
use thiserror::Error;

use crate::config::{StorageBackend, StorageConfig};

pub mod http;
pub mod local;
pub mod upload;

pub use http::HttpBucketStore;
pub use local::LocalDiskStore;
pub use upload::{upload_listing_images, ImageFile};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid object path '{0}'")]
    InvalidPath(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Network error: {0}")]
    Network(String),
    #[error("upload rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("storage misconfigured: {0}")]
    Config(String),
}

/// A bucket of objects addressed by slash-separated relative paths.
pub trait ObjectStore: Send + Sync {
    fn bucket(&self) -> &str;

    /// Fails if the object already exists.
    fn put(&self, path: &str, bytes: &[u8], content_type: &str) -> Result<(), StorageError>;

    /// `Ok(None)` when there is no such object.
    fn get(&self, path: &str) -> Result<Option<Vec<u8>>, StorageError>;

    fn public_url(&self, path: &str) -> String;
}

/// Build the configured backend.
pub fn build_store(cfg: &StorageConfig) -> Result<Arc<dyn ObjectStore>, StorageError> {
    match cfg.backend {
        StorageBackend::Local => Ok(Arc::new(LocalDiskStore::new(
            &cfg.local_root,
            &cfg.bucket,
            &cfg.public_base_url,
        ))),
        StorageBackend::Http => {
            let endpoint = cfg
                .endpoint
                .as_deref()
                .filter(|e| !e.trim().is_empty())
                .ok_or_else(|| StorageError::Config("storage.endpoint is required".into()))?;
            Ok(Arc::new(HttpBucketStore::new(
                endpoint,
                &cfg.bucket,
                cfg.api_key.clone(),
            )?))
        }
    }
}

/// Relative, no empty/`.`/`..` segments, no backslashes.
pub fn validate_path(path: &str) -> Result<(), StorageError> {
    let ok = !path.is_empty()
        && !path.contains('\\')
        && path
            .split('/')
            .all(|seg| !seg.is_empty() && seg != "." && seg != "..");

    if ok {
        Ok(())
    } else {
        Err(StorageError::InvalidPath(path.to_string()))
    }
}

/// Lower-cased extension after the last dot, if any.
pub fn extension(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    let ext = ext.trim().to_ascii_lowercase();
    if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        Some(ext)
    } else {
        None
    }
}

pub fn content_type_for(path: &str) -> String {
    let m = match extension(path).as_deref() {
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("png") => mime::IMAGE_PNG,
        Some("gif") => mime::IMAGE_GIF,
        Some("svg") => mime::IMAGE_SVG,
        Some("bmp") => mime::IMAGE_BMP,
        Some("webp") => return "image/webp".to_string(),
        Some("css") => mime::TEXT_CSS,
        _ => mime::APPLICATION_OCTET_STREAM,
    };
    m.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_traversal_and_absolute_paths() {
        assert!(validate_path("user/abc.jpg").is_ok());
        assert!(validate_path("").is_err());
        assert!(validate_path("/etc/passwd").is_err());
        assert!(validate_path("user/../other.jpg").is_err());
        assert!(validate_path("user//x.jpg").is_err());
        assert!(validate_path("user\\x.jpg").is_err());
    }

    #[test]
    fn extension_is_lowercased_suffix() {
        assert_eq!(extension("Photo.JPG").as_deref(), Some("jpg"));
        assert_eq!(extension("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(extension("noext"), None);
        assert_eq!(extension("trailing."), None);
    }

    #[test]
    fn content_types_for_images() {
        assert_eq!(content_type_for("a/b.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("x.png"), "image/png");
        assert_eq!(content_type_for("x.webp"), "image/webp");
        assert_eq!(content_type_for("x.unknown"), "application/octet-stream");
    }

    #[test]
    fn http_backend_requires_endpoint() {
        let cfg = StorageConfig {
            backend: StorageBackend::Http,
            ..StorageConfig::default()
        };
        assert!(matches!(build_store(&cfg), Err(StorageError::Config(_))));
    }
}
