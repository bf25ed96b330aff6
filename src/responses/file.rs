use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// Raw bytes with a content type, e.g. images and the stylesheet.
pub fn bytes_response(content_type: &str, bytes: Vec<u8>, cache_control: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header("Cache-Control", cache_control)
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}
