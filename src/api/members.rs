//! Member management endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::{delete_error, non_empty, SERVER_ERROR};
use crate::{
    error::{AppError, AppResult, ErrorResponse, MessageResponse},
    models::Member,
    AppState,
};

/// List all members
#[utoipa::path(
    get,
    path = "/members",
    tag = "members",
    responses(
        (status = 200, description = "All members", body = Vec<Member>),
        (status = 404, description = "No members stored", body = MessageResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_members(State(state): State<AppState>) -> AppResult<Json<Vec<Member>>> {
    let members = state
        .members
        .get()
        .await
        .map_err(|_| AppError::Internal(SERVER_ERROR))?;

    non_empty(members, "no members found")
}

/// Register a member
#[utoipa::path(
    post,
    path = "/member",
    tag = "members",
    request_body = Member,
    responses(
        (status = 201, description = "Member created", body = MessageResponse),
        (status = 400, description = "Invalid body or insert failed", body = ErrorResponse)
    )
)]
pub async fn create_member(
    State(state): State<AppState>,
    payload: Result<Json<Member>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let Json(mut member) = payload.map_err(|e| {
        tracing::error!(error = %e, "member body parsing failed for create");
        AppError::BadRequest("member creation failed")
    })?;

    member.id = Uuid::new_v4().to_string();
    state
        .members
        .create(&member)
        .await
        .map_err(|_| AppError::BadRequest("member creation failed"))?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new("member created"))))
}

/// Rename a member
#[utoipa::path(
    patch,
    path = "/member/{id}",
    tag = "members",
    params(("id" = String, Path, description = "Member ID")),
    request_body = Member,
    responses(
        (status = 200, description = "Member updated", body = MessageResponse),
        (status = 400, description = "Invalid body or update failed", body = ErrorResponse),
        (status = 404, description = "Member not found", body = MessageResponse)
    )
)]
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Member>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(member) = payload.map_err(|e| {
        tracing::error!(id = %id, error = %e, "member body parsing failed for update");
        AppError::BadRequest("member update failed")
    })?;

    // Members report a missing row under `message`, unlike authors and books
    state
        .members
        .exists(&id)
        .await
        .map_err(|_| AppError::Empty("member not found"))?;

    state.members.update(&id, &member).await.map_err(|e| {
        tracing::error!(id = %id, error = %e, "member update failed");
        AppError::BadRequest("member update failed")
    })?;

    Ok(Json(MessageResponse::new("member updated")))
}

/// Delete a member who has returned every book
#[utoipa::path(
    delete,
    path = "/member/{id}",
    tag = "members",
    params(("id" = String, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member deleted", body = MessageResponse),
        (status = 400, description = "Member still has borrowed books", body = MessageResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state
        .members
        .delete(&id)
        .await
        .map_err(|e| delete_error(e, "member still has books, all books must be returned"))?;

    Ok(Json(MessageResponse::new("member deleted")))
}
