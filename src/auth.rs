//! Credential header parsing and owner authentication.
//!
//! The credential is a plain `name:password` string carried in the
//! `Authorization` header. It is split on the first colon only, so passwords
//! may themselves contain colons.

use axum::http::HeaderMap;
use rusqlite::Connection;

use crate::crypto::verify_password;
use crate::db::queries;
use crate::error::{AppError, Result, msg};
use crate::models::Owner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub name: &'a str,
    pub password: &'a str,
}

impl<'a> Credentials<'a> {
    /// Split `name:password` on the first colon. Returns None without a colon.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let (name, password) = raw.split_once(':')?;
        Some(Self { name, password })
    }
}

/// Extract the raw credential string from the Authorization header.
///
/// The value is decoded as UTF-8 rather than visible ASCII, since names and
/// passwords may be any Unicode text.
pub fn extract_credentials(headers: &HeaderMap) -> Result<&str> {
    let value = headers
        .get("Authorization")
        .ok_or_else(|| AppError::Unauthorized(msg::MISSING_CREDENTIALS.into()))?;
    std::str::from_utf8(value.as_bytes())
        .map_err(|_| AppError::Unauthorized(msg::MALFORMED_CREDENTIALS.into()))
}

/// Look up the owner named in `raw` and check the password.
///
/// Unknown owner is `NotFound`, wrong password is `Forbidden`, a value with no
/// colon is `Unauthorized`.
pub fn authenticate(conn: &Connection, raw: &str) -> Result<Owner> {
    let credentials = Credentials::parse(raw)
        .ok_or_else(|| AppError::Unauthorized(msg::MALFORMED_CREDENTIALS.into()))?;

    let owner = queries::get_owner_by_name(conn, credentials.name)?.ok_or_else(|| {
        tracing::debug!("Authentication failed: unknown owner {:?}", credentials.name);
        AppError::NotFound(msg::OWNER_NOT_FOUND.into())
    })?;

    if !verify_password(credentials.password, &owner.password_hash) {
        tracing::debug!("Authentication failed: wrong password for {}", owner.name);
        return Err(AppError::Forbidden(msg::WRONG_PASSWORD.into()));
    }

    Ok(owner)
}
