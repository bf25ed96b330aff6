// src/handlers/mod.rs
use astra::Request;

use crate::app::App;
use crate::db::properties;
use crate::domain::property::Property;
use crate::requests::cookie;
use crate::templates::PageCtx;
use crate::toast::{decode_flash, Toast, FLASH_COOKIE};

pub mod auth;
pub mod browse;
pub mod listing;
pub mod media;

/// Signed-in user plus any toasts left by the previous response.
pub fn page_ctx(req: &Request, app: &App) -> PageCtx {
    let flash = cookie(req, FLASH_COOKIE);
    PageCtx {
        user: app.current_user(req),
        toasts: flash.as_deref().map(decode_flash).unwrap_or_default(),
        consumed_flash: flash.is_some(),
    }
}

/// Whole catalog for a browsing page. A failed read is logged, shown as a
/// toast and rendered as an empty result.
pub fn catalog_or_toast(app: &App, ctx: &mut PageCtx) -> Vec<Property> {
    match properties::load_catalog(&app.db) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Failed to load properties: {e}");
            ctx.toasts
                .push(Toast::error("Error", "Failed to load properties"));
            Vec::new()
        }
    }
}

/// Only same-site absolute paths are followed after sign-in.
pub fn safe_next(next: Option<&str>) -> Option<&str> {
    next.filter(|n| n.starts_with('/') && !n.starts_with("//") && !n.contains('\\'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_must_stay_on_site() {
        assert_eq!(safe_next(Some("/properties/new")), Some("/properties/new"));
        assert_eq!(safe_next(Some("//evil.example")), None);
        assert_eq!(safe_next(Some("https://evil.example")), None);
        assert_eq!(safe_next(Some("/\\evil")), None);
        assert_eq!(safe_next(None), None);
    }
}
