use axum::{
    extract::{Extension, State},
    http::StatusCode,
};

use crate::db::AppState;
use crate::error::{AppError, Result, msg};
use crate::extractors::Json;
use crate::middleware::OwnerContext;
use crate::models::{Company, CompanyName};
use crate::ownership;

/// Create the caller's company. Name clashes and a second company are 400.
pub async fn create_company(
    State(state): State<AppState>,
    Extension(ctx): Extension<OwnerContext>,
    Json(input): Json<CompanyName>,
) -> Result<(StatusCode, Json<Company>)> {
    input.validate()?;

    let conn = state.db.get()?;
    let company = ownership::create_company(&conn, &ctx.owner, &input.name)
        .map_err(|e| e.conflict_as(StatusCode::BAD_REQUEST))?;

    Ok((StatusCode::CREATED, Json(company)))
}

/// Delete the caller's company (and its employees) by name.
pub async fn delete_company(
    State(state): State<AppState>,
    Extension(ctx): Extension<OwnerContext>,
    Json(input): Json<CompanyName>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let mut conn = state.db.get()?;
    ownership::delete_company(&mut conn, &ctx.owner, &input.name)
        .map_err(|e| e.not_found_as(StatusCode::BAD_REQUEST))?;

    Ok((StatusCode::CREATED, Json(serde_json::json!({ "success": true }))))
}

pub async fn get_company_by_owner(
    State(state): State<AppState>,
    Extension(ctx): Extension<OwnerContext>,
) -> Result<Json<Company>> {
    let conn = state.db.get()?;
    let company = ownership::get_company_by_owner(&conn, &ctx.owner)?
        .ok_or_else(|| AppError::NotFound(msg::NO_COMPANY.into()))?;

    Ok(Json(company))
}
