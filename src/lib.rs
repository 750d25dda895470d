//! Library API
//!
//! REST JSON API over authors, books, members and the books members have
//! borrowed, backed by PostgreSQL.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub use config::AppConfig;
pub use error::{AppError, AppResult, StoreError, StoreResult};

use repository::{AuthorStore, BookStore, BorrowedStore, HealthStore, MemberStore, Repository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub authors: Arc<dyn AuthorStore>,
    pub books: Arc<dyn BookStore>,
    pub members: Arc<dyn MemberStore>,
    pub borrowed: Arc<dyn BorrowedStore>,
    pub health: Arc<dyn HealthStore>,
}

impl AppState {
    /// Wire every store to the PostgreSQL repository
    pub fn new(repository: Repository) -> Self {
        Self {
            authors: Arc::new(repository.authors.clone()),
            books: Arc::new(repository.books.clone()),
            members: Arc::new(repository.members.clone()),
            borrowed: Arc::new(repository.borrowed.clone()),
            health: Arc::new(repository),
        }
    }
}
