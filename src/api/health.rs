//! Health check endpoint

use axum::{extract::State, Json};

use crate::{
    error::{AppError, AppResult, ErrorResponse, MessageResponse},
    AppState,
};

/// Liveness probe backed by a database ping
#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable", body = MessageResponse),
        (status = 500, description = "Database unreachable", body = ErrorResponse)
    )
)]
pub async fn healthz(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    state
        .health
        .ping()
        .await
        .map_err(|_| AppError::Internal("error pinging database"))?;

    Ok(Json(MessageResponse::new("OK")))
}
