mod company;
mod employees;

pub use company::*;
pub use employees::*;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::db::AppState;
use crate::middleware::owner_auth;

/// Routes that act on the authenticated owner's company and its employees.
pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/company", post(create_company))
        .route("/company", delete(delete_company))
        .route("/company/by/owner", get(get_company_by_owner))
        .route("/company/employees", get(list_employees))
        .route("/create/employee", post(create_employee))
        .route("/create/employee", delete(delete_employee))
        .route("/create/employees", post(create_employees))
        .layer(middleware::from_fn_with_state(state, owner_auth))
}
