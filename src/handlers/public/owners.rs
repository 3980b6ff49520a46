use axum::{extract::State, http::StatusCode};

use crate::db::AppState;
use crate::error::Result;
use crate::extractors::Json;
use crate::models::{CreateOwner, OwnerPublic};
use crate::ownership;

/// Register an owner. A taken name is reported as 401.
pub async fn create_owner(
    State(state): State<AppState>,
    Json(input): Json<CreateOwner>,
) -> Result<(StatusCode, Json<OwnerPublic>)> {
    input.validate()?;

    let conn = state.db.get()?;
    let owner = ownership::register_owner(&conn, &input)
        .map_err(|e| e.conflict_as(StatusCode::UNAUTHORIZED))?;

    Ok((StatusCode::CREATED, Json(owner.into())))
}
