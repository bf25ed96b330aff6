// src/db/users.rs
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub password_hash: String,
}

/// Insert a user unless the email is taken. Returns false on conflict.
/// Email should already be normalized by caller (trim/lowercase).
pub fn insert_user(
    conn: &Connection,
    id: &str,
    email: &str,
    password_hash: &str,
    now: i64,
) -> Result<bool, ServerError> {
    let inserted = conn
        .execute(
            "insert or ignore into users (id, email, password_hash, created_at) values (?, ?, ?, ?)",
            params![id, email, password_hash, now],
        )
        .map_err(|e| ServerError::DbError(format!("insert user failed: {e}")))?;

    Ok(inserted == 1)
}

pub fn find_by_email(conn: &Connection, email: &str) -> Result<Option<UserRow>, ServerError> {
    conn.query_row(
        "select id, email, password_hash from users where email = ?",
        params![email],
        |r| {
            Ok(UserRow {
                id: r.get(0)?,
                email: r.get(1)?,
                password_hash: r.get(2)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select user failed: {e}")))
}

pub fn touch_last_login(conn: &Connection, user_id: &str, now: i64) -> Result<(), ServerError> {
    conn.execute(
        "update users set last_login_at = ? where id = ?",
        params![now, user_id],
    )
    .map_err(|e| ServerError::DbError(format!("update last_login_at failed: {e}")))?;
    Ok(())
}
