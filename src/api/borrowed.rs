//! Borrowed-book endpoints
//!
//! A loan is the `(member_id, book_id)` row itself: creating it lends the
//! book, deleting it returns the book. There are no due dates.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use super::{non_empty, SERVER_ERROR};
use crate::{
    error::{AppError, AppResult, ErrorResponse, MessageResponse},
    models::{Book, Borrowed},
    AppState,
};

/// Lend a book to a member
#[utoipa::path(
    post,
    path = "/member/borrowed",
    tag = "borrowed",
    request_body = Borrowed,
    responses(
        (status = 201, description = "Loan recorded", body = MessageResponse),
        (status = 400, description = "Invalid body or insert failed", body = ErrorResponse)
    )
)]
pub async fn create_borrowed(
    State(state): State<AppState>,
    payload: Result<Json<Borrowed>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let Json(borrowed) = payload.map_err(|e| {
        tracing::error!(error = %e, "parsing borrowed data");
        AppError::BadRequest("borrowed book creation failed")
    })?;

    state
        .borrowed
        .create(&borrowed)
        .await
        .map_err(|_| AppError::BadRequest("borrowed book creation failed"))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("borrowed book created")),
    ))
}

/// Books a member currently holds
#[utoipa::path(
    get,
    path = "/member/{id}/borrowed",
    tag = "borrowed",
    params(("id" = String, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Borrowed books with their author's name", body = Vec<Book>),
        (status = 404, description = "Member holds no books", body = MessageResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_borrowed(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state
        .borrowed
        .get(&id)
        .await
        .map_err(|_| AppError::Internal(SERVER_ERROR))?;

    non_empty(books, "no books found for this member")
}

/// Return one book
#[utoipa::path(
    delete,
    path = "/member/{id}/borrowed/{book_id}",
    tag = "borrowed",
    params(
        ("id" = String, Path, description = "Member ID"),
        ("book_id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book returned", body = MessageResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    Path((id, book_id)): Path<(String, String)>,
) -> AppResult<Json<MessageResponse>> {
    state
        .borrowed
        .delete(&id, &book_id)
        .await
        .map_err(|_| AppError::Internal(SERVER_ERROR))?;

    Ok(Json(MessageResponse::new("borrowed book deleted")))
}

/// Return several books at once; the deletion succeeds or fails as a whole
#[utoipa::path(
    delete,
    path = "/member/{id}/borrowed",
    tag = "borrowed",
    params(("id" = String, Path, description = "Member ID")),
    request_body = Vec<String>,
    responses(
        (status = 200, description = "Books returned", body = MessageResponse),
        (status = 400, description = "Body is not a list of book ids", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn return_books(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Vec<String>>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(book_ids) = payload.map_err(|e| {
        tracing::error!(id = %id, error = %e, "parsing borrowed data");
        AppError::BadRequest("borrowed book delete failed")
    })?;

    state
        .borrowed
        .delete_list(&id, &book_ids)
        .await
        .map_err(|_| AppError::Internal(SERVER_ERROR))?;

    Ok(Json(MessageResponse::new("borrowed books deleted")))
}
