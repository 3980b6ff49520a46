mod company;
mod employee;
mod owner;

pub use company::*;
pub use employee::*;
pub use owner::*;

use crate::error::{AppError, Result, msg};

/// Check a trimmed name against character-count bounds.
fn validate_length(field: &str, value: &str, min: usize, max: usize) -> Result<()> {
    let len = value.trim().chars().count();
    if len == 0 {
        return Err(AppError::BadRequest(msg::NAME_EMPTY.into()));
    }
    if len < min || len > max {
        return Err(AppError::BadRequest(format!(
            "{} must be between {} and {} characters",
            field, min, max
        )));
    }
    Ok(())
}
