// src/auth/sessions.rs
use crate::auth::token::{hash_token, new_session_token};
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

/// Opens a session for `user_id` and returns the raw token (never stored).
pub fn create_session(
    conn: &Connection,
    user_id: &str,
    now: i64,
    ttl_secs: i64,
) -> Result<(String, i64), ServerError> {
    let raw_token = new_session_token();
    let hash = hash_token(&raw_token);
    let expires_at = now + ttl_secs;

    conn.execute(
        r#"
        insert into sessions (user_id, token_hash, created_at, expires_at)
        values (?, ?, ?, ?)
        "#,
        params![user_id, hash.as_slice(), now, expires_at],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;

    Ok((raw_token, expires_at))
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionRow {
    pub user_id: String,
    pub email: String,
    pub expires_at: i64,
}

/// Live (unexpired, unrevoked) session for a raw token.
pub fn load_session(
    conn: &Connection,
    raw_token: &str,
    now: i64,
) -> Result<Option<SessionRow>, ServerError> {
    let hash = hash_token(raw_token);

    conn.query_row(
        r#"
        select u.id, u.email, s.expires_at
        from sessions s
        join users u on u.id = s.user_id
        where s.token_hash = ?
          and s.expires_at > ?
          and s.revoked_at is null
        "#,
        params![hash.as_slice(), now],
        |row| {
            Ok(SessionRow {
                user_id: row.get(0)?,
                email: row.get(1)?,
                expires_at: row.get(2)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))
}

/// Marks the session revoked. Returns the owning user id when a live
/// session was revoked.
pub fn revoke_session(
    conn: &Connection,
    raw_token: &str,
    now: i64,
) -> Result<Option<String>, ServerError> {
    let hash = hash_token(raw_token);

    let user_id: Option<String> = conn
        .query_row(
            "select user_id from sessions where token_hash = ? and revoked_at is null",
            params![hash.as_slice()],
            |r| r.get(0),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))?;

    if user_id.is_some() {
        conn.execute(
            "update sessions set revoked_at = ? where token_hash = ? and revoked_at is null",
            params![now, hash.as_slice()],
        )
        .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;
    }

    Ok(user_id)
}
