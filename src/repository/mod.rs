//! Repository layer for database operations
//!
//! Each entity exposes its capabilities through a store trait so handlers
//! depend only on what they call; the PostgreSQL implementations live in
//! the submodules.

pub mod authors;
pub mod books;
pub mod borrowed;
pub mod members;

use async_trait::async_trait;
use sqlx::{Connection, Pool, Postgres};

use crate::{
    error::StoreResult,
    models::{Author, Book, Borrowed, Member},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorStore: Send + Sync {
    async fn create(&self, author: &Author) -> StoreResult<()>;
    async fn get(&self) -> StoreResult<Vec<Author>>;
    /// Succeeds only when exactly one author has this id
    async fn exists(&self, id: &str) -> StoreResult<()>;
    async fn update(&self, id: &str, author: &Author) -> StoreResult<()>;
    async fn delete(&self, id: &str) -> StoreResult<()>;
    /// Titles of the books written by the author
    async fn get_authors_books(&self, id: &str) -> StoreResult<Vec<String>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn create(&self, book: &Book) -> StoreResult<()>;
    async fn get(&self) -> StoreResult<Vec<Book>>;
    async fn exists(&self, id: &str) -> StoreResult<()>;
    async fn update(&self, id: &str, book: &Book) -> StoreResult<()>;
    async fn delete(&self, id: &str) -> StoreResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberStore: Send + Sync {
    async fn create(&self, member: &Member) -> StoreResult<()>;
    async fn get(&self) -> StoreResult<Vec<Member>>;
    async fn exists(&self, id: &str) -> StoreResult<()>;
    async fn update(&self, id: &str, member: &Member) -> StoreResult<()>;
    async fn delete(&self, id: &str) -> StoreResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BorrowedStore: Send + Sync {
    async fn create(&self, borrowed: &Borrowed) -> StoreResult<()>;
    /// Books currently borrowed by a member, with the author's name embedded
    async fn get(&self, member_id: &str) -> StoreResult<Vec<Book>>;
    async fn delete(&self, member_id: &str, book_id: &str) -> StoreResult<()>;
    /// Return several books in a single statement
    async fn delete_list(&self, member_id: &str, book_ids: &[String]) -> StoreResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthStore: Send + Sync {
    async fn ping(&self) -> StoreResult<()>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub authors: authors::AuthorsRepository,
    pub books: books::BooksRepository,
    pub members: members::MembersRepository,
    pub borrowed: borrowed::BorrowedRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: authors::AuthorsRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            members: members::MembersRepository::new(pool.clone()),
            borrowed: borrowed::BorrowedRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl HealthStore for Repository {
    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.pool.acquire().await.map_err(|e| {
            tracing::error!(error = %e, "acquiring connection for ping failed");
            e
        })?;
        conn.ping().await.map_err(|e| {
            tracing::error!(error = %e, "error pinging database");
            e
        })?;
        Ok(())
    }
}
