use crate::app::App;
use crate::config::AppConfig;
use crate::db::connection::init_db;
use crate::db::seed::seed_if_empty;
use crate::router::handle;
use crate::storage::LocalDiskStore;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::sync::Arc;

pub const BOUNDARY: &str = "----skylineTestBoundary";

fn temp_root() -> std::path::PathBuf {
    let root = std::env::temp_dir().join(format!("skyline_test_{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&root).unwrap();
    root
}

fn local_store(config: &AppConfig) -> Arc<LocalDiskStore> {
    Arc::new(LocalDiskStore::new(
        &config.storage.local_root,
        &config.storage.bucket,
        &config.storage.public_base_url,
    ))
}

/// Fresh app over its own temp SQLite file and storage dir, seeded with
/// the sample listings.
pub fn init_test_app() -> App {
    init_test_app_with(|_| {})
}

pub fn init_test_app_with(adjust: impl FnOnce(&mut AppConfig)) -> App {
    let root = temp_root();

    let mut config = AppConfig::default();
    config.database.path = root.join("test.sqlite").to_string_lossy().to_string();
    config.storage.local_root = root.join("storage").to_string_lossy().to_string();
    adjust(&mut config);

    let db = crate::db::connection::Database::new(config.database.path.clone());
    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    db.with_conn(|conn| seed_if_empty(conn, 1_700_000_000))
        .unwrap();

    let store = local_store(&config);
    App::new(config, db, store)
}

/// App whose database path is a directory, so every read fails.
pub fn init_broken_db_app() -> App {
    let root = temp_root();
    let mut config = AppConfig::default();
    config.database.path = root.to_string_lossy().to_string();
    config.storage.local_root = root.join("storage").to_string_lossy().to_string();

    let db = crate::db::connection::Database::new(config.database.path.clone());
    let store = local_store(&config);
    App::new(config, db, store)
}

pub fn get(app: &App, uri: &str, cookie: Option<&str>) -> Response {
    try_get(app, uri, cookie).expect("Failed to handle request")
}

pub fn try_get(app: &App, uri: &str, cookie: Option<&str>) -> crate::responses::ResultResp {
    let mut b = Request::builder().method(Method::GET).uri(uri);
    if let Some(c) = cookie {
        b = b.header("Cookie", c);
    }
    handle(b.body(Body::empty()).unwrap(), app)
}

pub fn post_form(app: &App, uri: &str, body: &str, cookie: Option<&str>) -> Response {
    let mut b = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(c) = cookie {
        b = b.header("Cookie", c);
    }
    handle(b.body(Body::from(body.to_string())).unwrap(), app).expect("Failed to handle request")
}

pub fn post_multipart(app: &App, uri: &str, body: Vec<u8>, cookie: &str) -> Response {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header("Cookie", cookie)
        .body(Body::from(body))
        .unwrap();
    handle(req, app).expect("Failed to handle request")
}

/// Text fields then `(field, filename, bytes)` files.
pub fn multipart_body(fields: &[(&str, &str)], files: &[(&str, &str, &[u8])]) -> Vec<u8> {
    let mut out = Vec::new();
    for (name, value) in fields {
        out.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    for (name, file_name, bytes) in files {
        out.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        out.extend_from_slice(bytes);
        out.extend_from_slice(b"\r\n");
    }
    out.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    out
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body().reader().read_to_end(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// `name=value` of the Set-Cookie header for `name`, if any.
pub fn set_cookie(resp: &Response, name: &str) -> Option<String> {
    resp.headers()
        .get_all("Set-Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or_default().to_string())
        .find(|pair| pair.starts_with(&format!("{name}=")))
}

/// Signs up a new account and returns its `session=...` cookie.
pub fn signed_in_cookie(app: &App, email: &str) -> String {
    let resp = post_form(
        app,
        "/signup",
        &format!("email={email}&password=hunter22"),
        None,
    );
    assert_eq!(resp.status(), 303);
    set_cookie(&resp, "session").expect("session cookie")
}
