// src/handlers/browse.rs
use astra::Request;

use crate::app::App;
use crate::db::properties;
use crate::domain::browse::cycle;
use crate::domain::filter::{apply, filter_properties, similar_properties, FilterOptions, ListingQuery, SortKey};
use crate::handlers::{catalog_or_toast, page_ctx};
use crate::requests::{first, query_pairs};
use crate::responses::{html_page, ResultResp};
use crate::templates::pages::{
    home_page, map_page, properties_page, property_not_found_page, property_page, MapVm,
    PropertiesVm, ViewMode,
};
use crate::toast::Toast;

const SIMILAR_LIMIT: usize = 3;

pub fn home(req: &Request, app: &App) -> ResultResp {
    let mut ctx = page_ctx(req, app);
    let catalog = catalog_or_toast(app, &mut ctx);
    let featured = ListingQuery::featured(None).run(&catalog);

    html_page(200, home_page(&ctx, &featured), &ctx)
}

pub fn properties(req: &Request, app: &App) -> ResultResp {
    let mut ctx = page_ctx(req, app);
    let pairs = query_pairs(req);
    let filters = FilterOptions::from_query(&pairs);
    let sort = SortKey::parse(first(&pairs, "sort").unwrap_or_default());
    let view = ViewMode::parse(first(&pairs, "view"));

    let catalog = catalog_or_toast(app, &mut ctx);
    let results = apply(&catalog, &filters, sort);

    let vm = PropertiesVm {
        filters: &filters,
        sort,
        view,
        results: &results,
    };
    html_page(200, properties_page(&ctx, &vm), &ctx)
}

pub fn property_detail(req: &Request, app: &App, id: &str) -> ResultResp {
    let mut ctx = page_ctx(req, app);

    let property = match properties::load_property(&app.db, id) {
        Ok(p) => p,
        Err(e) => {
            log::error!("Failed to load property {id}: {e}");
            ctx.toasts
                .push(Toast::error("Error", "Failed to load property details"));
            return html_page(500, property_not_found_page(&ctx), &ctx);
        }
    };

    let Some(property) = property else {
        return html_page(404, property_not_found_page(&ctx), &ctx);
    };

    // Similar listings are a nice-to-have; a failed read just hides them.
    let similar = match properties::load_catalog(&app.db) {
        Ok(catalog) => similar_properties(&catalog, &property, SIMILAR_LIMIT),
        Err(e) => {
            log::warn!("Similar properties unavailable: {e}");
            Vec::new()
        }
    };

    html_page(200, property_page(&ctx, &property, &similar), &ctx)
}

pub fn map_view(req: &Request, app: &App) -> ResultResp {
    let mut ctx = page_ctx(req, app);
    let pairs = query_pairs(req);
    let filters = FilterOptions::from_query(&pairs);

    let catalog = catalog_or_toast(app, &mut ctx);
    let results = filter_properties(&catalog, &filters);
    let selected = first(&pairs, "selected").and_then(|id| cycle(&results, id));

    let vm = MapVm {
        filters: &filters,
        results: &results,
        selected,
    };
    html_page(200, map_page(&ctx, &vm), &ctx)
}
