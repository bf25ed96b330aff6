use crate::errors::ServerError;
use crate::responses::ResultResp;
use crate::templates::PageCtx;
use crate::toast::clear_flash_cookie;
use astra::{Body, ResponseBuilder};
use maud::Markup;

/// Full page render. Clears the flash cookie once its toasts are shown.
pub fn html_page(status: u16, markup: Markup, ctx: &PageCtx) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8");
    if ctx.consumed_flash {
        builder = builder.header("Set-Cookie", clear_flash_cookie());
    }

    builder
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}
