//! Members repository for database operations

use async_trait::async_trait;
use sqlx::{FromRow, Pool, Postgres};

use super::MemberStore;
use crate::{
    error::{StoreError, StoreResult},
    models::Member,
};

#[derive(Clone)]
pub struct MembersRepository {
    pool: Pool<Postgres>,
}

impl MembersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberStore for MembersRepository {
    async fn create(&self, member: &Member) -> StoreResult<()> {
        sqlx::query("INSERT INTO members (id, full_name) VALUES ($1, $2)")
            .bind(&member.id)
            .bind(&member.full_name)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "failed to create member");
                StoreError::from(e)
            })?;

        Ok(())
    }

    async fn get(&self) -> StoreResult<Vec<Member>> {
        let rows = sqlx::query("SELECT id, full_name FROM members")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "get all failed for members");
                StoreError::from(e)
            })?;

        rows.iter()
            .map(|row| Member::from_row(row))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                tracing::error!(error = %e, "scanning selected failed for members");
                StoreError::Decode(e)
            })
    }

    async fn exists(&self, id: &str) -> StoreResult<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::info!(id, error = %e, "select error");
                StoreError::from(e)
            })?;

        if count != 1 {
            tracing::info!(id, count, "member does not exist");
            return Err(StoreError::NotFound("member"));
        }

        Ok(())
    }

    async fn update(&self, id: &str, member: &Member) -> StoreResult<()> {
        sqlx::query("UPDATE members SET full_name = $1 WHERE id = $2")
            .bind(&member.full_name)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(id, error = %e, "update failed for members");
                StoreError::from(e)
            })?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(id, error = %e, "delete failed for members");
                StoreError::from(e)
            })?;

        Ok(())
    }
}
