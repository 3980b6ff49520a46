use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// User-facing error messages shared by the ownership rules and the store.
pub mod msg {
    pub const OWNER_NOT_FOUND: &str = "Owner not found";
    pub const OWNER_NAME_TAKEN: &str = "Owner with this name already exists";
    pub const WRONG_PASSWORD: &str = "Wrong password";
    pub const MISSING_CREDENTIALS: &str = "Missing authorization header";
    pub const MALFORMED_CREDENTIALS: &str = "Authorization header must be name:password";

    pub const COMPANY_NOT_FOUND: &str = "Company not found";
    pub const COMPANY_NAME_TAKEN: &str = "Company with this name already exists";
    pub const OWNER_HAS_COMPANY: &str = "Owner already has a company";
    pub const NO_COMPANY: &str = "Owner has no company";

    pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";
    pub const EMPLOYEE_LIST_EMPTY: &str = "Employee list cannot be empty";

    pub const NAME_EMPTY: &str = "Name cannot be empty";
    pub const OWNER_NAME_COLON: &str = "Owner name cannot contain ':'";
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[source] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Re-labels a domain `NotFound` with the status an endpoint reports for it.
    pub fn not_found_as(self, status: StatusCode) -> Self {
        match self {
            AppError::NotFound(msg) => AppError::with_status(status, msg),
            other => other,
        }
    }

    /// Re-labels a domain `Conflict` with the status an endpoint reports for it.
    pub fn conflict_as(self, status: StatusCode) -> Self {
        match self {
            AppError::Conflict(msg) => AppError::with_status(status, msg),
            other => other,
        }
    }

    fn with_status(status: StatusCode, msg: String) -> Self {
        match status {
            StatusCode::NOT_FOUND => AppError::NotFound(msg),
            StatusCode::BAD_REQUEST => AppError::BadRequest(msg),
            StatusCode::UNAUTHORIZED => AppError::Unauthorized(msg),
            StatusCode::FORBIDDEN => AppError::Forbidden(msg),
            StatusCode::CONFLICT => AppError::Conflict(msg),
            _ => AppError::Internal(msg),
        }
    }
}

/// Returns true when a statement failed on a UNIQUE or PRIMARY KEY constraint.
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}

/// Unique violations that slip past the pre-insert checks (concurrent writers)
/// surface as `Conflict` rather than a 500.
impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        if is_unique_violation(&err) {
            AppError::Conflict(err.to_string())
        } else {
            AppError::Database(err)
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized", Some(msg.clone()))
            }
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, "Forbidden", Some(msg.clone())),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "Conflict", Some(msg.clone())),
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error", None)
            }
            AppError::Pool(e) => {
                tracing::error!("Pool error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error", None)
            }
            AppError::InvalidBody(rejection) => (
                StatusCode::BAD_REQUEST,
                "Invalid JSON",
                Some(rejection.body_text()),
            ),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
