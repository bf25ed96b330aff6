use crate::errors::ServerError;
use crate::tests::utils::{
    body_string, get, init_broken_db_app, init_test_app, set_cookie, try_get,
};
use crate::toast::{encode_flash, Toast, FLASH_COOKIE};

#[test]
fn home_shows_featured_listings() {
    let app = init_test_app();
    let resp = get(&app, "/", None);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Modern Minimalist Villa"));
    assert!(body.contains("Hillside Architectural Masterpiece"));
    assert!(!body.contains("Urban Loft Apartment"));
}

#[test]
fn properties_default_to_sale_and_rent() {
    let app = init_test_app();
    let body = body_string(get(&app, "/properties", None));

    assert!(body.contains("5 properties available"));
    assert!(!body.contains("Mid-Century Modern Classic"));
}

#[test]
fn status_link_narrows_to_that_status() {
    let app = init_test_app();
    let body = body_string(get(&app, "/properties?status=pending", None));

    assert!(body.contains("1 property available"));
    assert!(body.contains("Mid-Century Modern Classic"));
}

#[test]
fn submitted_filter_without_statuses_shows_everything() {
    let app = init_test_app();
    let body = body_string(get(&app, "/properties?filtered=1", None));
    assert!(body.contains("6 properties available"));
}

#[test]
fn price_ascending_puts_the_rental_first() {
    let app = init_test_app();
    let body = body_string(get(&app, "/properties?sort=price-asc", None));

    let loft = body.find("Urban Loft Apartment").unwrap();
    let villa = body.find("Modern Minimalist Villa").unwrap();
    let hillside = body.find("Hillside Architectural Masterpiece").unwrap();
    assert!(loft < villa && villa < hillside);
}

#[test]
fn list_view_renders_rows() {
    let app = init_test_app();
    let body = body_string(get(&app, "/properties?view=list", None));
    assert!(body.contains("property-row"));
}

#[test]
fn impossible_filters_show_the_empty_state() {
    let app = init_test_app();
    let body = body_string(get(&app, "/properties?beds=40", None));

    assert!(body.contains("0 properties available"));
    assert!(body.contains("No properties found"));
}

#[test]
fn property_detail_lists_similar_properties() {
    let app = init_test_app();
    let resp = get(&app, "/property/1", None);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Modern Minimalist Villa"));
    assert!(body.contains("Similar Properties"));
}

#[test]
fn unknown_property_is_not_found_page() {
    let app = init_test_app();
    let resp = get(&app, "/property/nope", None);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Property Not Found"));
}

#[test]
fn map_selection_wraps_within_the_filtered_results() {
    let app = init_test_app();
    let body = body_string(get(&app, "/map?selected=1", None));

    assert!(body.contains("5 properties found"));
    assert!(body.contains("selected=2"));
    assert!(body.contains("selected=5"));
    assert!(!body.contains("selected=6"));
}

#[test]
fn unknown_route_is_not_found() {
    let app = init_test_app();
    match try_get(&app, "/nowhere", None) {
        Err(ServerError::NotFound) => {}
        other => panic!("expected NotFound, got: {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn flash_toast_is_shown_once_and_cleared() {
    let app = init_test_app();
    let flash = encode_flash(&[Toast::success("Saved", "All good.")]).unwrap();
    let cookie = format!("{FLASH_COOKIE}={flash}");

    let resp = get(&app, "/properties", Some(&cookie));
    assert_eq!(
        set_cookie(&resp, FLASH_COOKIE).as_deref(),
        Some(format!("{FLASH_COOKIE}=").as_str())
    );
    let body = body_string(resp);
    assert!(body.contains("Saved"));
    assert!(body.contains("All good."));
}

#[test]
fn failed_catalog_read_degrades_to_an_empty_page() {
    let app = init_broken_db_app();
    let resp = get(&app, "/properties", None);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Failed to load properties"));
    assert!(body.contains("0 properties available"));
}

#[test]
fn failed_property_read_is_a_server_error_page() {
    let app = init_broken_db_app();
    let resp = get(&app, "/property/1", None);
    assert_eq!(resp.status(), 500);
    assert!(body_string(resp).contains("Failed to load property details"));
}
