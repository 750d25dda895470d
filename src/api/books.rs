//! Book management endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{delete_error, non_empty, SERVER_ERROR};
use crate::{
    error::{AppError, AppResult, ErrorResponse, MessageResponse},
    models::Book,
    AppState,
};

/// Created book reply, carrying the generated id
#[derive(Serialize, ToSchema)]
pub struct BookCreatedResponse {
    pub id: String,
    pub message: String,
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>),
        (status = 404, description = "No books stored", body = MessageResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state
        .books
        .get()
        .await
        .map_err(|_| AppError::Internal(SERVER_ERROR))?;

    non_empty(books, "no books found")
}

/// Create a book
#[utoipa::path(
    post,
    path = "/book",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = BookCreatedResponse),
        (status = 400, description = "Invalid body or insert failed", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<Book>, JsonRejection>,
) -> AppResult<(StatusCode, Json<BookCreatedResponse>)> {
    let Json(mut book) = payload.map_err(|e| {
        tracing::error!(error = %e, "book body parsing failed for create");
        AppError::BadRequest("book creation failed")
    })?;

    book.id = Uuid::new_v4().to_string();
    state
        .books
        .create(&book)
        .await
        .map_err(|_| AppError::BadRequest("book creation failed"))?;

    Ok((
        StatusCode::CREATED,
        Json(BookCreatedResponse {
            id: book.id,
            message: "book created".to_string(),
        }),
    ))
}

/// Replace an existing book's fields
#[utoipa::path(
    patch,
    path = "/book/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Invalid body or update failed", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Book>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(book) = payload.map_err(|e| {
        tracing::error!(id = %id, error = %e, "book body parsing failed for update");
        AppError::BadRequest("book update failed")
    })?;

    state
        .books
        .exists(&id)
        .await
        .map_err(|_| AppError::NotFound("book not found"))?;

    state
        .books
        .update(&id, &book)
        .await
        .map_err(|_| AppError::BadRequest("book update failed"))?;

    Ok(Json(MessageResponse::new("book updated")))
}

/// Delete a book that nobody has borrowed
#[utoipa::path(
    delete,
    path = "/book/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 400, description = "Book is currently borrowed", body = MessageResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state
        .books
        .delete(&id)
        .await
        .map_err(|e| delete_error(e, "book has related recordings and cannot be deleted"))?;

    Ok(Json(MessageResponse::new("book deleted")))
}
