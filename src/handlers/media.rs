// src/handlers/media.rs
use crate::app::App;
use crate::errors::ServerError;
use crate::responses::{bytes_response, ResultResp};
use crate::storage::{content_type_for, StorageError};

const STYLESHEET: &str = include_str!("../../static/main.css");

/// Bytes of an image selected in the listing form but not uploaded yet.
pub fn preview(app: &App, id: &str) -> ResultResp {
    let preview = app.previews.get(id).ok_or(ServerError::NotFound)?;
    bytes_response(
        &preview.content_type,
        preview.bytes.as_ref().clone(),
        "private, no-store",
    )
}

/// `/storage/{bucket}/{path..}` for the local-disk backend.
pub fn stored_object(app: &App, segments: &[&str]) -> ResultResp {
    let Some((bucket, rest)) = segments.split_first() else {
        return Err(ServerError::NotFound);
    };
    if *bucket != app.store.bucket() || rest.is_empty() {
        return Err(ServerError::NotFound);
    }

    let path = rest.join("/");
    match app.store.get(&path) {
        Ok(Some(bytes)) => bytes_response(
            &content_type_for(&path),
            bytes,
            "public, max-age=31536000, immutable",
        ),
        Ok(None) | Err(StorageError::InvalidPath(_)) => Err(ServerError::NotFound),
        Err(e) => Err(e.into()),
    }
}

pub fn stylesheet() -> ResultResp {
    bytes_response(
        "text/css; charset=utf-8",
        STYLESHEET.as_bytes().to_vec(),
        "public, max-age=3600",
    )
}
