use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::auth::{authenticate, extract_credentials};
use crate::db::AppState;
use crate::error::AppError;
use crate::models::Owner;

/// Authenticated owner, inserted into request extensions by [`owner_auth`].
#[derive(Clone)]
pub struct OwnerContext {
    pub owner: Owner,
}

/// Authenticate the `name:password` credential header.
///
/// An unknown owner is reported as 401, a wrong password as 403.
pub async fn owner_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let owner = {
        let raw = extract_credentials(request.headers())?;
        // Release the connection before the handler acquires its own.
        let conn = state.db.get()?;
        authenticate(&conn, raw).map_err(|e| e.not_found_as(StatusCode::UNAUTHORIZED))?
    };

    request.extensions_mut().insert(OwnerContext { owner });

    Ok(next.run(request).await)
}
