//! PostgreSQL implementation of MakerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use catalog_core::entities::{Maker, NewMaker};
use catalog_core::error::DomainError;
use catalog_core::traits::{MakerRepository, RepoResult};

use crate::models::MakerModel;

use super::error::{maker_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of MakerRepository
#[derive(Clone)]
pub struct PgMakerRepository {
    pool: PgPool,
}

impl PgMakerRepository {
    /// Create a new PgMakerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MakerRepository for PgMakerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Maker>> {
        let result = sqlx::query_as::<_, MakerModel>(
            r"
            SELECT id, name, address, created_user, created_at, updated_user, updated_at, deleted
            FROM makers
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Maker::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, search: Option<&str>) -> RepoResult<Vec<Maker>> {
        let result = sqlx::query_as::<_, MakerModel>(
            r"
            SELECT id, name, address, created_user, created_at, updated_user, updated_at, deleted
            FROM makers
            WHERE deleted = FALSE
              AND ($1::TEXT IS NULL
                   OR name ILIKE '%' || $1 || '%'
                   OR address ILIKE '%' || $1 || '%')
            ORDER BY id
            ",
        )
        .bind(search)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Maker::from).collect())
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM makers WHERE id = $1 AND deleted = FALSE)
            ",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM makers
                WHERE name = $1 AND deleted = FALSE
                  AND ($2::BIGINT IS NULL OR id <> $2)
            )
            ",
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, new), fields(name = %new.name))]
    async fn create(&self, new: &NewMaker) -> RepoResult<Maker> {
        let model = sqlx::query_as::<_, MakerModel>(
            r"
            INSERT INTO makers (name, address, created_user, created_at, updated_user, updated_at, deleted)
            VALUES ($1, $2, $3, NOW(), $3, NOW(), FALSE)
            RETURNING id, name, address, created_user, created_at, updated_user, updated_at, deleted
            ",
        )
        .bind(&new.name)
        .bind(&new.address)
        .bind(&new.created_user)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::MakerNameTaken(new.name.clone())))?;

        Ok(Maker::from(model))
    }

    #[instrument(skip(self, maker), fields(id = maker.id))]
    async fn update(&self, maker: &Maker) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE makers
            SET name = $2, address = $3, updated_user = $4, updated_at = $5
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(maker.id)
        .bind(&maker.name)
        .bind(&maker.address)
        .bind(&maker.updated_user)
        .bind(maker.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::MakerNameTaken(maker.name.clone())))?;

        if result.rows_affected() == 0 {
            return Err(maker_not_found(maker.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64, updated_user: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE makers
            SET deleted = TRUE, updated_user = $2, updated_at = NOW()
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(id)
        .bind(updated_user)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(maker_not_found(id));
        }

        Ok(())
    }
}
