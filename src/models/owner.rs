use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result, msg};

use super::validate_length;

pub const OWNER_NAME_MIN: usize = 7;
pub const OWNER_NAME_MAX: usize = 50;
pub const PASSWORD_MIN: usize = 11;
pub const PASSWORD_MAX: usize = 30;

/// Stored owner row. Never serialized directly; see [`OwnerPublic`].
#[derive(Debug, Clone)]
pub struct Owner {
    pub id: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateOwner {
    pub name: String,
    pub password: String,
}

impl CreateOwner {
    pub fn validate(&self) -> Result<()> {
        validate_length("name", &self.name, OWNER_NAME_MIN, OWNER_NAME_MAX)?;
        // The credential header splits on the first colon.
        if self.name.contains(':') {
            return Err(AppError::BadRequest(msg::OWNER_NAME_COLON.into()));
        }
        // Password is checked untrimmed: whitespace is part of the secret.
        let len = self.password.chars().count();
        if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&len) {
            return Err(AppError::BadRequest(format!(
                "password must be between {} and {} characters",
                PASSWORD_MIN, PASSWORD_MAX
            )));
        }
        Ok(())
    }
}

/// Public view of an owner (no password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerPublic {
    pub id: String,
    pub name: String,
    pub created_at: i64,
}

impl From<Owner> for OwnerPublic {
    fn from(o: Owner) -> Self {
        Self {
            id: o.id,
            name: o.name,
            created_at: o.created_at,
        }
    }
}
