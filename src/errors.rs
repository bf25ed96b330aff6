// errors.rs
use thiserror::Error;

use crate::storage::StorageError;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB, storage).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Request body too large")]
    PayloadTooLarge,
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Storage Error: {0}")]
    Storage(#[from] StorageError),
    #[error("Internal Server Error")]
    InternalError,
}

impl From<rusqlite::Error> for ServerError {
    fn from(e: rusqlite::Error) -> Self {
        ServerError::DbError(e.to_string())
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(e: serde_json::Error) -> Self {
        ServerError::DbError(format!("json column: {e}"))
    }
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::PayloadTooLarge => 413,
            ServerError::DbError(_) | ServerError::Storage(_) | ServerError::InternalError => 500,
        }
    }
}
