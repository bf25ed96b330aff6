use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into an HTML error page with the matching status.
/// Server-side details are logged, never shown.
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::NotFound => "Not Found".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        ServerError::PayloadTooLarge => err.to_string(),
        ServerError::DbError(_) | ServerError::Storage(_) | ServerError::InternalError => {
            log::error!("{err}");
            "Something went wrong. Please try again.".to_string()
        }
    };
    if status < 500 {
        log::debug!("{status}: {message}");
    }

    let html = error_page(status, &message).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(html.clone()))
        .unwrap_or_else(|_| Response::new(Body::from(html)))
}
