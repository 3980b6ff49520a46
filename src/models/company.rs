use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::validate_length;

pub const COMPANY_NAME_MAX: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub created_at: i64,
}

/// Body for both creating and deleting a company (addressed by name).
#[derive(Debug, Deserialize)]
pub struct CompanyName {
    pub name: String,
}

impl CompanyName {
    pub fn validate(&self) -> Result<()> {
        validate_length("name", &self.name, 1, COMPANY_NAME_MAX)
    }
}
