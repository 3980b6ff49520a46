use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result, msg};

use super::validate_length;

pub const EMPLOYEE_NAME_MAX: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub company_id: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeName {
    pub name: String,
}

impl EmployeeName {
    pub fn validate(&self) -> Result<()> {
        validate_length("name", &self.name, 1, EMPLOYEE_NAME_MAX)
    }
}

/// Bulk insert body: `{"array": [{"name": ...}, ...]}`
#[derive(Debug, Deserialize)]
pub struct EmployeeBatch {
    pub array: Vec<EmployeeName>,
}

impl EmployeeBatch {
    pub fn validate(&self) -> Result<()> {
        if self.array.is_empty() {
            return Err(AppError::BadRequest(msg::EMPLOYEE_LIST_EMPTY.into()));
        }
        self.array.iter().try_for_each(EmployeeName::validate)
    }

    pub fn names(&self) -> Vec<String> {
        self.array.iter().map(|e| e.name.trim().to_string()).collect()
    }
}
