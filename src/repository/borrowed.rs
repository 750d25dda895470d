//! Borrowed-books repository for database operations

use async_trait::async_trait;
use sqlx::{postgres::PgRow, Pool, Postgres, Row};

use super::BorrowedStore;
use crate::{
    error::{StoreError, StoreResult},
    models::{Author, Book, Borrowed},
};

#[derive(Clone)]
pub struct BorrowedRepository {
    pool: Pool<Postgres>,
}

impl BorrowedRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// Map a joined books/authors row; only the author's name is carried over
fn borrowed_book_from_row(row: &PgRow) -> Result<Book, sqlx::Error> {
    Ok(Book {
        title: row.try_get("title")?,
        genre: row.try_get("genre")?,
        isbn: row.try_get("isbn")?,
        author: Author::named(row.try_get("full_name")?),
        ..Default::default()
    })
}

#[async_trait]
impl BorrowedStore for BorrowedRepository {
    async fn create(&self, borrowed: &Borrowed) -> StoreResult<()> {
        sqlx::query("INSERT INTO borrowed_books (member_id, book_id) VALUES ($1, $2)")
            .bind(&borrowed.member_id)
            .bind(&borrowed.book_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(
                    member_id = %borrowed.member_id,
                    book_id = %borrowed.book_id,
                    error = %e,
                    "failed to create borrowed book"
                );
                StoreError::from(e)
            })?;

        Ok(())
    }

    async fn get(&self, member_id: &str) -> StoreResult<Vec<Book>> {
        let rows = sqlx::query(
            r#"
            SELECT books.title, authors.full_name, books.genre, books.isbn
            FROM borrowed_books
            JOIN books ON books.id = borrowed_books.book_id
            JOIN authors ON authors.id = books.authors_id
            WHERE borrowed_books.member_id = $1
            "#,
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(id = member_id, error = %e, "get books failed for member");
            StoreError::from(e)
        })?;

        rows.iter()
            .map(borrowed_book_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                tracing::error!(id = member_id, error = %e, "scanning selected failed for books of member");
                StoreError::Decode(e)
            })
    }

    async fn delete(&self, member_id: &str, book_id: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM borrowed_books WHERE member_id = $1 AND book_id = $2")
            .bind(member_id)
            .bind(book_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(member_id, book_id, error = %e, "delete book failed for member");
                StoreError::from(e)
            })?;

        Ok(())
    }

    async fn delete_list(&self, member_id: &str, book_ids: &[String]) -> StoreResult<()> {
        sqlx::query("DELETE FROM borrowed_books WHERE member_id = $1 AND book_id = ANY($2)")
            .bind(member_id)
            .bind(book_ids)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(member_id, count = book_ids.len(), error = %e, "delete list of books failed for member");
                StoreError::from(e)
            })?;

        Ok(())
    }
}
