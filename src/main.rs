use crate::app::App;
use crate::auth::AuthEvent;
use crate::config::AppConfig;
use crate::db::connection::init_db;
use crate::db::seed::seed_if_empty;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

mod app;
mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod handlers;
mod listing;
mod requests;
mod responses;
mod router;
mod storage;
mod templates;
mod toast;

#[cfg(test)]
mod tests;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let app = match App::from_config(config) {
        Ok(app) => Arc::new(app),
        Err(e) => {
            log::error!("Startup failed: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = init_db(&app.db, &app.config.database.schema_path) {
        log::error!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    if app.config.database.seed_sample_data {
        if let Err(e) = app
            .db
            .with_conn(|conn| seed_if_empty(conn, app::unix_now()))
        {
            log::warn!("Sample data not seeded: {e}");
        }
    }

    // Mirror every auth change into the log.
    let events = app.auth.subscribe();
    std::thread::spawn(move || {
        for change in events {
            let who = change.user.map(|u| u.email).unwrap_or_default();
            match change.event {
                AuthEvent::SignedUp => log::info!("auth: signed up {who}"),
                AuthEvent::SignedIn => log::info!("auth: signed in {who}"),
                AuthEvent::SignedOut => log::info!("auth: signed out"),
            }
        }
    });

    // Drafts of sessions that simply expire are never discarded by a sign-out.
    let sweeper = Arc::clone(&app);
    std::thread::spawn(move || loop {
        std::thread::sleep(Duration::from_secs(sweeper.config.listing.draft_sweep_secs.max(1)));
        sweeper.sweep_drafts();
    });

    let addr: SocketAddr = match app.config.server_address().parse() {
        Ok(a) => a,
        Err(e) => {
            log::error!("Bad server address {}: {e}", app.config.server_address());
            std::process::exit(1);
        }
    };
    log::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(app.config.server.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
