//! Books repository for database operations

use async_trait::async_trait;
use sqlx::{FromRow, Pool, Postgres};

use super::BookStore;
use crate::{
    error::{StoreError, StoreResult},
    models::Book,
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn create(&self, book: &Book) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO books (id, authors_id, title, genre, isbn)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&book.id)
        .bind(&book.authors_id)
        .bind(&book.title)
        .bind(&book.genre)
        .bind(&book.isbn)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to create book");
            StoreError::from(e)
        })?;

        Ok(())
    }

    async fn get(&self) -> StoreResult<Vec<Book>> {
        let rows = sqlx::query("SELECT id, authors_id, title, genre, isbn FROM books")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "select all failed for books");
                StoreError::from(e)
            })?;

        rows.iter()
            .map(|row| Book::from_row(row))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                tracing::error!(error = %e, "scanning selected failed for books");
                StoreError::Decode(e)
            })
    }

    async fn exists(&self, id: &str) -> StoreResult<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::info!(id, error = %e, "select error");
                StoreError::from(e)
            })?;

        if count != 1 {
            tracing::info!(id, count, "book does not exist");
            return Err(StoreError::NotFound("book"));
        }

        Ok(())
    }

    async fn update(&self, id: &str, book: &Book) -> StoreResult<()> {
        sqlx::query(
            "UPDATE books SET authors_id = $1, title = $2, genre = $3, isbn = $4 WHERE id = $5",
        )
        .bind(&book.authors_id)
        .bind(&book.title)
        .bind(&book.genre)
        .bind(&book.isbn)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(id, error = %e, "update failed for book");
            StoreError::from(e)
        })?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(id, error = %e, "delete failed for books");
                StoreError::from(e)
            })?;

        Ok(())
    }
}
