// src/storage/local.rs
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use super::{validate_path, ObjectStore, StorageError};

/// Objects as plain files under `{root}/{bucket}/`, served by the app at
/// `{public_base_url}/{bucket}/{path}`.
#[derive(Debug, Clone)]
pub struct LocalDiskStore {
    root: PathBuf,
    bucket: String,
    public_base_url: String,
}

impl LocalDiskStore {
    pub fn new(root: impl Into<PathBuf>, bucket: &str, public_base_url: &str) -> Self {
        Self {
            root: root.into(),
            bucket: bucket.to_string(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn file_path(&self, path: &str) -> Result<PathBuf, StorageError> {
        validate_path(path)?;
        Ok(self.root.join(&self.bucket).join(path))
    }
}

impl ObjectStore for LocalDiskStore {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    fn put(&self, path: &str, bytes: &[u8], _content_type: &str) -> Result<(), StorageError> {
        let file = self.file_path(path)?;
        if let Some(dir) = file.parent() {
            fs::create_dir_all(dir)?;
        }

        let mut f = OpenOptions::new().write(true).create_new(true).open(&file)?;
        f.write_all(bytes)?;
        log::debug!("stored {} ({} bytes)", file.display(), bytes.len());
        Ok(())
    }

    fn get(&self, path: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let file = self.file_path(path)?;
        match fs::read(&file) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.public_base_url, self.bucket, path)
    }
}
