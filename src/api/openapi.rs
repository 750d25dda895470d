//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, borrowed, health, members};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library API",
        version = "0.1.0",
        description = "Authors, books, members and borrowed books over REST"
    ),
    paths(
        // Health
        health::healthz,
        // Authors
        authors::list_authors,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        authors::get_author_books,
        // Books
        books::list_books,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Members
        members::list_members,
        members::create_member,
        members::update_member,
        members::delete_member,
        // Borrowed books
        borrowed::create_borrowed,
        borrowed::list_borrowed,
        borrowed::return_book,
        borrowed::return_books,
    ),
    components(
        schemas(
            crate::models::Author,
            crate::models::Book,
            crate::models::Member,
            crate::models::Borrowed,
            books::BookCreatedResponse,
            crate::error::MessageResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "authors", description = "Author management"),
        (name = "books", description = "Book management"),
        (name = "members", description = "Member management"),
        (name = "borrowed", description = "Lending and returning books")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
