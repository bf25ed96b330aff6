// src/storage/upload.rs
use rand::Rng;

use super::{content_type_for, extension, ObjectStore, StorageError};

const NAME_LEN: usize = 13;
const NAME_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// An image picked in the listing form, held in memory until upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: &str, content_type: Option<&str>, bytes: Vec<u8>) -> Self {
        let content_type = content_type
            .filter(|c| !c.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| content_type_for(file_name));

        Self {
            file_name: file_name.to_string(),
            content_type,
            bytes,
        }
    }
}

/// `{user_id}/{13 random [a-z0-9]}.{ext}`; `bin` when the name has no usable
/// extension.
pub fn object_path<R: Rng>(rng: &mut R, user_id: &str, file_name: &str) -> String {
    let name: String = (0..NAME_LEN)
        .map(|_| NAME_ALPHABET[rng.gen_range(0..NAME_ALPHABET.len())] as char)
        .collect();
    let ext = extension(file_name).unwrap_or_else(|| "bin".to_string());
    format!("{user_id}/{name}.{ext}")
}

/// Upload every file in order and return their public URLs in the same
/// order. Stops at the first failure; objects already written stay.
pub fn upload_listing_images(
    store: &dyn ObjectStore,
    user_id: &str,
    files: &[ImageFile],
) -> Result<Vec<String>, StorageError> {
    let mut rng = rand::thread_rng();
    let mut urls = Vec::with_capacity(files.len());

    for file in files {
        let path = object_path(&mut rng, user_id, &file.file_name);
        store.put(&path, &file.bytes, &file.content_type)?;
        log::info!("Uploaded {} to {}/{}", file.file_name, store.bucket(), path);
        urls.push(store.public_url(&path));
    }

    Ok(urls)
}
