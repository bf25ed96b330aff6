// src/listing/submit.rs
use thiserror::Error;

use crate::db::connection::Database;
use crate::db::properties;
use crate::domain::form::{FieldErrors, ListingForm};
use crate::errors::ServerError;
use crate::listing::drafts::ImageSelection;
use crate::storage::{upload_listing_images, ObjectStore, StorageError};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Please fix the errors in the form.")]
    Invalid(FieldErrors),
    #[error("Error uploading image: {0}")]
    Upload(StorageError),
    #[error("Error creating property: {0}")]
    Insert(ServerError),
}

/// Validate, upload every selected image, then insert one listing owned by
/// `user_id`. Returns the new listing id.
///
/// Nothing touches storage or the database unless validation passes, and
/// any upload failure means no listing is inserted.
pub fn submit_listing(
    db: &Database,
    store: &dyn ObjectStore,
    form: &ListingForm,
    selection: &ImageSelection,
    user_id: &str,
    now: i64,
) -> Result<String, SubmitError> {
    let fields = form.validate(selection.len()).map_err(SubmitError::Invalid)?;

    let urls =
        upload_listing_images(store, user_id, selection.files()).map_err(SubmitError::Upload)?;

    let new_property = fields.into_new_property(urls, user_id);
    let id = db
        .with_conn(|conn| properties::insert(conn, &new_property, now))
        .map_err(SubmitError::Insert)?;

    log::info!("Listing {} created by {}", id, user_id);
    Ok(id)
}
