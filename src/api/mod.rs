//! API handlers for the library REST endpoints

pub mod authors;
pub mod books;
pub mod borrowed;
pub mod health;
pub mod members;
pub mod metrics;
pub mod openapi;

use std::time::Duration;

use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN},
        HeaderName, Method,
    },
    middleware,
    routing::{delete, get, patch, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{AppError, AppResult, StoreError},
    AppState,
};

/// Client-facing text for every unclassified persistence failure
pub(crate) const SERVER_ERROR: &str = "server error";

/// Treat an empty listing as not found
pub(crate) fn non_empty<T>(rows: Vec<T>, empty: &'static str) -> AppResult<Json<Vec<T>>> {
    if rows.is_empty() {
        tracing::info!("{}", empty);
        return Err(AppError::Empty(empty));
    }
    Ok(Json(rows))
}

/// Map a failed delete, singling out rows that still have dependents
pub(crate) fn delete_error(e: StoreError, referenced: &'static str) -> AppError {
    if e.is_foreign_key_violation() {
        AppError::Referenced(referenced)
    } else {
        AppError::Internal(SERVER_ERROR)
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState, metrics_state: metrics::MetricsState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::PATCH])
        .allow_headers([
            ORIGIN,
            HeaderName::from_static("x-requested-with"),
            CONTENT_TYPE,
            ACCEPT,
            AUTHORIZATION,
        ])
        .max_age(Duration::from_secs(120));

    Router::new()
        // Authors
        .route("/authors", get(authors::list_authors))
        .route("/author", post(authors::create_author))
        .route(
            "/author/:id",
            patch(authors::update_author).delete(authors::delete_author),
        )
        .route("/author/:id/books", get(authors::get_author_books))
        // Books
        .route("/books", get(books::list_books))
        .route("/book", post(books::create_book))
        .route("/book/:id", patch(books::update_book).delete(books::delete_book))
        // Members
        .route("/members", get(members::list_members))
        .route("/member", post(members::create_member))
        .route(
            "/member/:id",
            patch(members::update_member).delete(members::delete_member),
        )
        // Loans
        .route("/member/borrowed", post(borrowed::create_borrowed))
        .route(
            "/member/:id/borrowed",
            get(borrowed::list_borrowed).delete(borrowed::return_books),
        )
        .route("/member/:id/borrowed/:book_id", delete(borrowed::return_book))
        .layer(TraceLayer::new_for_http())
        // Health probes and scrapes stay out of the access log
        .route("/healthz", get(health::healthz))
        .with_state(state)
        .merge(
            Router::new()
                .route("/metrics", get(metrics::metrics_handler))
                .with_state(metrics_state),
        )
        .merge(openapi::create_openapi_router())
        .layer(middleware::from_fn(metrics::track_requests))
        .layer(cors)
}
