// src/listing/previews.rs
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

pub const PREVIEW_PREFIX: &str = "/previews/";

#[derive(Debug, Clone)]
pub struct Preview {
    pub content_type: String,
    pub bytes: Arc<Vec<u8>>,
}

/// Server-local URLs for images that are selected but not uploaded yet.
/// Revoking a URL drops the bytes it held.
#[derive(Default)]
pub struct PreviewRegistry {
    entries: Mutex<HashMap<String, Preview>>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the preview URL, e.g. `/previews/5b0c…`.
    pub fn create(&self, content_type: &str, bytes: Vec<u8>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.entries.lock().insert(
            id.clone(),
            Preview {
                content_type: content_type.to_string(),
                bytes: Arc::new(bytes),
            },
        );
        format!("{PREVIEW_PREFIX}{id}")
    }

    /// Look up by id (the last URL segment).
    pub fn get(&self, id: &str) -> Option<Preview> {
        self.entries.lock().get(id).cloned()
    }

    /// False if the URL was unknown or already revoked.
    pub fn revoke(&self, url: &str) -> bool {
        let id = url.strip_prefix(PREVIEW_PREFIX).unwrap_or(url);
        self.entries.lock().remove(id).is_some()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_get_revoke() {
        let reg = PreviewRegistry::new();
        let url = reg.create("image/png", vec![1, 2, 3]);
        assert!(url.starts_with(PREVIEW_PREFIX));

        let id = url.trim_start_matches(PREVIEW_PREFIX);
        let p = reg.get(id).unwrap();
        assert_eq!(p.content_type, "image/png");
        assert_eq!(p.bytes.as_slice(), &[1, 2, 3]);

        assert!(reg.revoke(&url));
        assert!(reg.get(id).is_none());
        assert!(!reg.revoke(&url));
        assert!(reg.is_empty());
    }

    #[test]
    fn urls_are_unique() {
        let reg = PreviewRegistry::new();
        let a = reg.create("image/jpeg", vec![]);
        let b = reg.create("image/jpeg", vec![]);
        assert_ne!(a, b);
        assert_eq!(reg.len(), 2);
    }
}
