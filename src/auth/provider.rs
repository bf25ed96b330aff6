// src/auth/provider.rs
use parking_lot::Mutex;
use std::sync::mpsc::{channel, Receiver, Sender};
use thiserror::Error;

use crate::auth::{password, sessions};
use crate::config::AuthConfig;
use crate::db::connection::Database;
use crate::db::users;
use crate::errors::ServerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Raw token; lives only in the client's cookie.
    pub token: String,
    pub user: User,
    pub expires_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    SignedUp,
    SignedIn,
    SignedOut,
}

/// Pushed to every subscriber after a successful sign-up/in/out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthChange {
    pub event: AuthEvent,
    pub user: Option<User>,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password should be at least {0} characters")]
    WeakPassword(usize),
    #[error("User already registered")]
    AlreadyRegistered,
    #[error("Invalid login credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Server(#[from] ServerError),
}

/// Email/password accounts and cookie sessions over the `users` and
/// `sessions` tables.
pub struct IdentityProvider {
    db: Database,
    cfg: AuthConfig,
    listeners: Mutex<Vec<Sender<AuthChange>>>,
}

impl IdentityProvider {
    pub fn new(db: Database, cfg: AuthConfig) -> Self {
        Self {
            db,
            cfg,
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.cfg
    }

    /// Trim + lowercase, minimal sanity check.
    pub fn normalize_email(email: &str) -> Result<String, AuthError> {
        let e = email.trim().to_lowercase();
        if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
            return Err(AuthError::InvalidEmail);
        }
        Ok(e)
    }

    /// Receive every later auth change. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> Receiver<AuthChange> {
        let (tx, rx) = channel();
        self.listeners.lock().push(tx);
        rx
    }

    fn publish(&self, change: AuthChange) {
        self.listeners
            .lock()
            .retain(|tx| tx.send(change.clone()).is_ok());
    }

    pub fn sign_up(&self, email: &str, pw: &str, now: i64) -> Result<Session, AuthError> {
        let email = Self::normalize_email(email)?;
        if pw.chars().count() < self.cfg.min_password_len {
            return Err(AuthError::WeakPassword(self.cfg.min_password_len));
        }
        let hash = password::hash_password(pw)?;
        let user_id = uuid::Uuid::new_v4().to_string();

        let session = self.db.with_conn(|conn| {
            let tx = conn.transaction()?;
            if !users::insert_user(&tx, &user_id, &email, &hash, now)? {
                return Ok(None);
            }
            users::touch_last_login(&tx, &user_id, now)?;
            let (token, expires_at) =
                sessions::create_session(&tx, &user_id, now, self.cfg.session_ttl_secs)?;
            tx.commit()?;
            Ok(Some(Session {
                token,
                user: User {
                    id: user_id.clone(),
                    email: email.clone(),
                },
                expires_at,
            }))
        })?;

        let session = session.ok_or(AuthError::AlreadyRegistered)?;
        log::info!("New account {}", session.user.email);
        self.publish(AuthChange {
            event: AuthEvent::SignedUp,
            user: Some(session.user.clone()),
        });
        Ok(session)
    }

    pub fn sign_in(&self, email: &str, pw: &str, now: i64) -> Result<Session, AuthError> {
        // Malformed emails get the same answer as unknown ones.
        let email = Self::normalize_email(email).map_err(|_| AuthError::InvalidCredentials)?;

        let row = self
            .db
            .with_conn(|conn| users::find_by_email(conn, &email))?
            .ok_or(AuthError::InvalidCredentials)?;

        if !password::verify_password(pw, &row.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let (token, expires_at) = self.db.with_conn(|conn| {
            users::touch_last_login(conn, &row.id, now)?;
            sessions::create_session(conn, &row.id, now, self.cfg.session_ttl_secs)
        })?;

        let session = Session {
            token,
            user: User {
                id: row.id,
                email: row.email,
            },
            expires_at,
        };
        self.publish(AuthChange {
            event: AuthEvent::SignedIn,
            user: Some(session.user.clone()),
        });
        Ok(session)
    }

    /// Revokes the session. Returns the user id that was signed out, if the
    /// token was live.
    pub fn sign_out(&self, token: &str, now: i64) -> Result<Option<String>, AuthError> {
        let user_id = self
            .db
            .with_conn(|conn| sessions::revoke_session(conn, token, now))?;

        if user_id.is_some() {
            self.publish(AuthChange {
                event: AuthEvent::SignedOut,
                user: None,
            });
        }
        Ok(user_id)
    }

    pub fn get_session(&self, token: &str, now: i64) -> Result<Option<Session>, AuthError> {
        let row = self
            .db
            .with_conn(|conn| sessions::load_session(conn, token, now))?;

        Ok(row.map(|r| Session {
            token: token.to_string(),
            user: User {
                id: r.user_id,
                email: r.email,
            },
            expires_at: r.expires_at,
        }))
    }
}
