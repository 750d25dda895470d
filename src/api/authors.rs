//! Author management endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::{delete_error, non_empty, SERVER_ERROR};
use crate::{
    error::{AppError, AppResult, ErrorResponse, MessageResponse},
    models::Author,
    AppState,
};

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "All authors", body = Vec<Author>),
        (status = 404, description = "No authors stored", body = MessageResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> AppResult<Json<Vec<Author>>> {
    let authors = state
        .authors
        .get()
        .await
        .map_err(|_| AppError::Internal(SERVER_ERROR))?;

    non_empty(authors, "authors not found")
}

/// Create an author; the id is generated server-side
#[utoipa::path(
    post,
    path = "/author",
    tag = "authors",
    request_body = Author,
    responses(
        (status = 201, description = "Author created", body = MessageResponse),
        (status = 400, description = "Invalid body or insert failed", body = ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    payload: Result<Json<Author>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let Json(mut author) = payload.map_err(|e| {
        tracing::error!(error = %e, "author body parsing failed for create");
        AppError::BadRequest("author creation failed")
    })?;

    author.id = Uuid::new_v4().to_string();
    state
        .authors
        .create(&author)
        .await
        .map_err(|_| AppError::BadRequest("author creation failed"))?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new("author created"))))
}

/// Replace an existing author's fields
#[utoipa::path(
    patch,
    path = "/author/{id}",
    tag = "authors",
    params(("id" = String, Path, description = "Author ID")),
    request_body = Author,
    responses(
        (status = 200, description = "Author updated", body = MessageResponse),
        (status = 400, description = "Invalid body or update failed", body = ErrorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Author>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(author) = payload.map_err(|e| {
        tracing::error!(id = %id, error = %e, "author body parsing failed for update");
        AppError::BadRequest("author update failed")
    })?;

    state
        .authors
        .exists(&id)
        .await
        .map_err(|_| AppError::NotFound("author not found"))?;

    state
        .authors
        .update(&id, &author)
        .await
        .map_err(|_| AppError::BadRequest("author update failed"))?;

    Ok(Json(MessageResponse::new("author updated")))
}

/// Delete an author without books
#[utoipa::path(
    delete,
    path = "/author/{id}",
    tag = "authors",
    params(("id" = String, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author deleted", body = MessageResponse),
        (status = 400, description = "Author still has books", body = MessageResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state
        .authors
        .delete(&id)
        .await
        .map_err(|e| delete_error(e, "author has related recordings and cannot be deleted"))?;

    Ok(Json(MessageResponse::new("author deleted")))
}

/// Titles of an author's books
#[utoipa::path(
    get,
    path = "/author/{id}/books",
    tag = "authors",
    params(("id" = String, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Book titles", body = Vec<String>),
        (status = 404, description = "Author has no books", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn get_author_books(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<String>>> {
    let titles = state
        .authors
        .get_authors_books(&id)
        .await
        .map_err(|_| AppError::Internal(SERVER_ERROR))?;

    if titles.is_empty() {
        tracing::info!(id = %id, "no books found for author");
        return Err(AppError::NotFound("book not found"));
    }

    Ok(Json(titles))
}
