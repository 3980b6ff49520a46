use axum::{
    extract::{Extension, State},
    http::StatusCode,
};

use crate::db::AppState;
use crate::error::Result;
use crate::extractors::Json;
use crate::middleware::OwnerContext;
use crate::models::{Employee, EmployeeBatch, EmployeeName};
use crate::ownership;

pub async fn create_employee(
    State(state): State<AppState>,
    Extension(ctx): Extension<OwnerContext>,
    Json(input): Json<EmployeeName>,
) -> Result<(StatusCode, Json<Employee>)> {
    input.validate()?;

    let conn = state.db.get()?;
    let employee = ownership::add_employee(&conn, &ctx.owner, &input.name)?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// Insert `{"array": [{"name": ...}]}` as one batch; any failure inserts nothing.
pub async fn create_employees(
    State(state): State<AppState>,
    Extension(ctx): Extension<OwnerContext>,
    Json(input): Json<EmployeeBatch>,
) -> Result<(StatusCode, Json<Vec<Employee>>)> {
    input.validate()?;

    let mut conn = state.db.get()?;
    let employees = ownership::add_employees_bulk(&mut conn, &ctx.owner, &input.names())?;

    Ok((StatusCode::CREATED, Json(employees)))
}

pub async fn list_employees(
    State(state): State<AppState>,
    Extension(ctx): Extension<OwnerContext>,
) -> Result<Json<Vec<Employee>>> {
    let conn = state.db.get()?;
    let employees = ownership::list_employees(&conn, &ctx.owner)?;
    Ok(Json(employees))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Extension(ctx): Extension<OwnerContext>,
    Json(input): Json<EmployeeName>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let conn = state.db.get()?;
    ownership::delete_employee(&conn, &ctx.owner, &input.name)?;

    Ok((StatusCode::CREATED, Json(serde_json::json!({ "success": true }))))
}
