// src/app.rs
use std::sync::Arc;

use crate::auth::provider::Session;
use crate::auth::{IdentityProvider, User, SESSION_COOKIE};
use crate::config::AppConfig;
use crate::db::connection::Database;
use crate::errors::ServerError;
use crate::listing::{DraftStore, PreviewRegistry};
use crate::storage::{build_store, ObjectStore};

/// Everything a request handler can reach. Shared by all workers.
pub struct App {
    pub config: AppConfig,
    pub db: Database,
    pub store: Arc<dyn ObjectStore>,
    pub auth: IdentityProvider,
    pub previews: PreviewRegistry,
    pub drafts: DraftStore,
}

impl App {
    pub fn new(config: AppConfig, db: Database, store: Arc<dyn ObjectStore>) -> Self {
        let auth = IdentityProvider::new(db.clone(), config.auth.clone());
        Self {
            config,
            db,
            store,
            auth,
            previews: PreviewRegistry::new(),
            drafts: DraftStore::new(),
        }
    }

    pub fn from_config(config: AppConfig) -> Result<Self, ServerError> {
        let db = Database::new(config.database.path.clone());
        let store = build_store(&config.storage)?;
        Ok(Self::new(config, db, store))
    }

    /// Live session for this request's cookie. Lookup failures are logged
    /// and treated as signed out.
    pub fn current_session(&self, req: &astra::Request) -> Option<Session> {
        let token = crate::requests::cookie(req, SESSION_COOKIE)?;
        match self.auth.get_session(&token, unix_now()) {
            Ok(session) => session,
            Err(e) => {
                log::error!("Session lookup failed: {e}");
                None
            }
        }
    }

    pub fn current_user(&self, req: &astra::Request) -> Option<User> {
        self.current_session(req).map(|s| s.user)
    }

    /// Release drafts left behind by sessions that expired without a sign-out.
    pub fn sweep_drafts(&self) {
        let dropped = self.drafts.sweep_expired(&self.previews, unix_now());
        if dropped > 0 {
            log::info!("Dropped {dropped} expired listing draft(s)");
        }
    }

    pub fn session_cookie(&self, token: &str) -> String {
        let cfg = self.auth.config();
        let mut c = format!(
            "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            cfg.session_ttl_secs
        );
        if cfg.cookie_secure {
            c.push_str("; Secure");
        }
        c
    }

    pub fn clear_session_cookie(&self) -> String {
        format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
    }
}

pub fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}
