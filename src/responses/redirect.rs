use crate::errors::ServerError;
use crate::responses::ResultResp;
use crate::toast::{flash_cookie, Toast};
use astra::{Body, ResponseBuilder};

/// 303 See Other, so a POST is followed by a GET.
pub fn redirect(location: &str) -> ResultResp {
    redirect_with(location, &[], Vec::new())
}

/// Redirect carrying toasts for the next page plus any extra cookies.
pub fn redirect_with(location: &str, toasts: &[Toast], cookies: Vec<String>) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(303)
        .header("Location", location);
    if !toasts.is_empty() {
        builder = builder.header("Set-Cookie", flash_cookie(toasts)?);
    }
    for c in cookies {
        builder = builder.header("Set-Cookie", c);
    }

    builder
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
