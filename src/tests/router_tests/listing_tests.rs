use crate::db::properties;
use crate::tests::utils::{
    body_string, get, init_test_app, init_test_app_with, location, multipart_body,
    post_multipart, signed_in_cookie, try_get,
};

const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 1, 2, 3, 4];

fn preview_urls(body: &str) -> Vec<String> {
    body.match_indices("/previews/")
        .map(|(i, _)| body[i..i + "/previews/".len() + 36].to_string())
        .collect()
}

fn full_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("title", "Garden Cottage"),
        ("description", "Small and quiet."),
        ("price", "450000"),
        ("type", "house"),
        ("status", "sale"),
        ("street", "1 Elm St"),
        ("city", "Portland"),
        ("state", "OR"),
        ("zip", "97201"),
        ("lat", "45.52"),
        ("lng", "-122.68"),
        ("beds", "2"),
        ("baths", "1.5"),
        ("sqft", "1100"),
        ("year", "1948"),
        ("amenity", "Garden"),
    ]
}

#[test]
fn form_requires_a_session() {
    let app = init_test_app();
    let resp = get(&app, "/properties/new", None);

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/login?next=/properties/new");
}

#[test]
fn blank_form_checks_air_conditioning() {
    let app = init_test_app();
    let cookie = signed_in_cookie(&app, "agent@example.com");

    let body = body_string(get(&app, "/properties/new", Some(&cookie)));
    assert!(body.contains("Add New Property"));
    assert!(body.contains(r#"value="Air Conditioning" checked"#));
}

#[test]
fn added_image_is_previewed_until_removed() {
    let app = init_test_app();
    let cookie = signed_in_cookie(&app, "agent@example.com");

    let body = multipart_body(&[("intent", "add_images")], &[("images", "front.jpg", JPEG)]);
    let resp = post_multipart(&app, "/properties/new", body, &cookie);
    assert_eq!(resp.status(), 200);

    let urls = preview_urls(&body_string(resp));
    assert_eq!(urls.len(), 1);
    assert_eq!(get(&app, &urls[0], None).status(), 200);

    let body = multipart_body(&[("remove_image", "0")], &[]);
    let resp = post_multipart(&app, "/properties/new", body, &cookie);
    assert!(preview_urls(&body_string(resp)).is_empty());
    assert!(try_get(&app, &urls[0], None).is_err());
}

#[test]
fn submit_without_images_is_rejected() {
    let app = init_test_app();
    let cookie = signed_in_cookie(&app, "agent@example.com");
    let before = app.db.with_conn(|c| properties::count(c)).unwrap();

    let mut fields = full_fields();
    fields.push(("intent", "submit"));
    let resp = post_multipart(&app, "/properties/new", multipart_body(&fields, &[]), &cookie);

    assert_eq!(resp.status(), 422);
    let body = body_string(resp);
    assert!(body.contains("At least one image is required"));
    assert!(body.contains("Garden Cottage"));
    assert_eq!(app.db.with_conn(|c| properties::count(c)).unwrap(), before);
}

#[test]
fn submit_uploads_images_and_redirects_to_the_listing() {
    let app = init_test_app();
    let cookie = signed_in_cookie(&app, "agent@example.com");

    let mut fields = full_fields();
    fields.push(("intent", "submit"));
    let body = multipart_body(&fields, &[("images", "front.jpg", JPEG)]);
    let resp = post_multipart(&app, "/properties/new", body, &cookie);

    assert_eq!(resp.status(), 303);
    let loc = location(&resp);
    let id = loc.strip_prefix("/property/").unwrap().to_string();

    let stored = properties::load_property(&app.db, &id).unwrap().unwrap();
    assert_eq!(stored.title, "Garden Cottage");
    assert!(!stored.featured);
    assert_eq!(stored.images.len(), 1);
    assert!(stored.images[0].starts_with("/storage/property-images/"));
    assert!(stored.images[0].ends_with(".jpg"));

    // selection and previews are gone after a successful submit
    assert!(app.previews.is_empty());

    let page = body_string(get(&app, &loc, Some(&cookie)));
    assert!(page.contains("Garden Cottage"));
}

#[test]
fn images_beyond_the_draft_cap_are_rejected() {
    let app = init_test_app_with(|cfg| cfg.listing.max_draft_images = 2);
    let cookie = signed_in_cookie(&app, "agent@example.com");

    let body = multipart_body(
        &[("intent", "add_images")],
        &[
            ("images", "a.jpg", JPEG),
            ("images", "b.jpg", JPEG),
            ("images", "c.jpg", JPEG),
        ],
    );
    let resp = post_multipart(&app, "/properties/new", body, &cookie);
    assert_eq!(resp.status(), 422);

    let page = body_string(resp);
    assert!(page.contains("You can add at most 2 images"));
    assert_eq!(preview_urls(&page).len(), 2);

    // further posts hold nothing more
    let body = multipart_body(&[("intent", "add_images")], &[("images", "d.jpg", JPEG)]);
    let resp = post_multipart(&app, "/properties/new", body, &cookie);
    assert_eq!(resp.status(), 422);
    assert_eq!(preview_urls(&body_string(resp)).len(), 2);
}

#[test]
fn drafts_of_expired_sessions_are_dropped() {
    let app = init_test_app_with(|cfg| cfg.auth.session_ttl_secs = 3);
    let stale = signed_in_cookie(&app, "stale@example.com");

    let body = multipart_body(&[("intent", "add_images")], &[("images", "front.jpg", JPEG)]);
    let resp = post_multipart(&app, "/properties/new", body, &stale);
    let urls = preview_urls(&body_string(resp));
    assert_eq!(urls.len(), 1);

    std::thread::sleep(std::time::Duration::from_secs(4));

    // the expired session cannot reach the form any more
    assert_eq!(get(&app, "/properties/new", Some(&stale)).status(), 303);

    // any later form post sweeps the abandoned draft
    let fresh = signed_in_cookie(&app, "fresh@example.com");
    let resp = post_multipart(&app, "/properties/new", multipart_body(&[("intent", "add_images")], &[]), &fresh);
    assert_eq!(resp.status(), 200);
    assert!(try_get(&app, &urls[0], None).is_err());
    assert!(app.previews.is_empty());
}
