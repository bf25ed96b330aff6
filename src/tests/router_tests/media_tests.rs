use crate::errors::ServerError;
use crate::tests::utils::{body_bytes, get, init_test_app, try_get};

#[test]
fn stylesheet_is_served_as_css() {
    let app = init_test_app();
    let resp = get(&app, "/static/main.css", None);

    assert_eq!(resp.status(), 200);
    assert!(resp.headers()["Content-Type"]
        .to_str()
        .unwrap()
        .starts_with("text/css"));
    assert!(!body_bytes(resp).is_empty());
}

#[test]
fn stored_objects_are_served_from_the_local_bucket() {
    let app = init_test_app();
    app.store
        .put("abc123.png", b"png-bytes", "image/png")
        .unwrap();

    let resp = get(&app, "/storage/property-images/abc123.png", None);
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "image/png");
    assert_eq!(body_bytes(resp), b"png-bytes");
}

#[test]
fn other_buckets_and_missing_objects_are_not_found() {
    let app = init_test_app();
    for uri in [
        "/storage/other-bucket/abc.png",
        "/storage/property-images/missing.png",
        "/storage/property-images",
        "/previews/00000000-0000-0000-0000-000000000000",
    ] {
        assert!(
            matches!(try_get(&app, uri, None), Err(ServerError::NotFound)),
            "{uri} should be not found"
        );
    }
}
