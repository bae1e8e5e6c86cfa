//! PostgreSQL implementation of GenreRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use catalog_core::entities::{Genre, NewGenre};
use catalog_core::error::DomainError;
use catalog_core::traits::{GenreRepository, RepoResult};

use crate::models::GenreModel;

use super::error::{genre_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of GenreRepository
#[derive(Clone)]
pub struct PgGenreRepository {
    pool: PgPool,
}

impl PgGenreRepository {
    /// Create a new PgGenreRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenreRepository for PgGenreRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Genre>> {
        let result = sqlx::query_as::<_, GenreModel>(
            r"
            SELECT id, name, created_user, created_at, updated_user, updated_at, deleted
            FROM genres
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Genre::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, search: Option<&str>) -> RepoResult<Vec<Genre>> {
        let result = sqlx::query_as::<_, GenreModel>(
            r"
            SELECT id, name, created_user, created_at, updated_user, updated_at, deleted
            FROM genres
            WHERE deleted = FALSE
              AND ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
            ORDER BY id
            ",
        )
        .bind(search)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Genre::from).collect())
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM genres WHERE id = $1 AND deleted = FALSE)
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
                SELECT 1 FROM genres
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
    async fn create(&self, new: &NewGenre) -> RepoResult<Genre> {
        let model = sqlx::query_as::<_, GenreModel>(
            r"
            INSERT INTO genres (name, created_user, created_at, updated_user, updated_at, deleted)
            VALUES ($1, $2, NOW(), $2, NOW(), FALSE)
            RETURNING id, name, created_user, created_at, updated_user, updated_at, deleted
            ",
        )
        .bind(&new.name)
        .bind(&new.created_user)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::GenreNameTaken(new.name.clone())))?;

        Ok(Genre::from(model))
    }

    #[instrument(skip(self, genre), fields(id = genre.id))]
    async fn update(&self, genre: &Genre) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE genres
            SET name = $2, updated_user = $3, updated_at = $4
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(genre.id)
        .bind(&genre.name)
        .bind(&genre.updated_user)
        .bind(genre.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::GenreNameTaken(genre.name.clone())))?;

        if result.rows_affected() == 0 {
            return Err(genre_not_found(genre.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64, updated_user: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE genres
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
            return Err(genre_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgGenreRepository>();
    }
}
