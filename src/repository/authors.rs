//! Authors repository for database operations

use async_trait::async_trait;
use sqlx::{FromRow, Pool, Postgres, Row};

use super::AuthorStore;
use crate::{
    error::{StoreError, StoreResult},
    models::Author,
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorStore for AuthorsRepository {
    async fn create(&self, author: &Author) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO authors (id, full_name, nick_name, specialization) VALUES ($1, $2, $3, $4)",
        )
        .bind(&author.id)
        .bind(&author.full_name)
        .bind(&author.nick_name)
        .bind(&author.specialization)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to create author");
            StoreError::from(e)
        })?;

        Ok(())
    }

    async fn get(&self) -> StoreResult<Vec<Author>> {
        let rows = sqlx::query("SELECT id, full_name, nick_name, specialization FROM authors")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "select all request failed for authors");
                StoreError::from(e)
            })?;

        rows.iter()
            .map(|row| Author::from_row(row))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                tracing::error!(error = %e, "scanning selected failed for authors");
                StoreError::Decode(e)
            })
    }

    async fn exists(&self, id: &str) -> StoreResult<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::info!(id, error = %e, "select error");
                StoreError::from(e)
            })?;

        if count != 1 {
            tracing::info!(id, count, "author does not exist");
            return Err(StoreError::NotFound("author"));
        }

        Ok(())
    }

    async fn update(&self, id: &str, author: &Author) -> StoreResult<()> {
        sqlx::query(
            "UPDATE authors SET full_name = $1, nick_name = $2, specialization = $3 WHERE id = $4",
        )
        .bind(&author.full_name)
        .bind(&author.nick_name)
        .bind(&author.specialization)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(id, error = %e, "update failed for author");
            StoreError::from(e)
        })?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(id, error = %e, "delete failed for authors");
                StoreError::from(e)
            })?;

        Ok(())
    }

    async fn get_authors_books(&self, id: &str) -> StoreResult<Vec<String>> {
        let rows = sqlx::query("SELECT title FROM books WHERE authors_id = $1")
            .bind(id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(id, error = %e, "select for get for authors books failed");
                StoreError::from(e)
            })?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("title"))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                tracing::error!(id, error = %e, "scan rows failed for authors books");
                StoreError::Decode(e)
            })
    }
}
