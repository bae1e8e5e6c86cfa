//! PostgreSQL implementation of GameRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use catalog_core::entities::{Game, NewGame};
use catalog_core::traits::{GameFilter, GameListEntry, GameRepository, RepoResult};

use crate::models::{GameModel, GameWithNamesModel};

use super::error::{game_not_found, map_db_error};

/// PostgreSQL implementation of GameRepository
#[derive(Clone)]
pub struct PgGameRepository {
    pool: PgPool,
}

impl PgGameRepository {
    /// Create a new PgGameRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameRepository for PgGameRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<GameListEntry>> {
        let result = sqlx::query_as::<_, GameWithNamesModel>(
            r"
            SELECT g.id, g.title, g.maker_id, m.name AS maker_name,
                   g.genre_id, ge.name AS genre_name, g.sales_count, g.memo,
                   g.created_user, g.created_at, g.updated_user, g.updated_at, g.deleted
            FROM games g
            JOIN makers m ON m.id = g.maker_id
            JOIN genres ge ON ge.id = g.genre_id
            WHERE g.id = $1 AND g.deleted = FALSE
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(GameListEntry::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &GameFilter) -> RepoResult<Vec<GameListEntry>> {
        let result = sqlx::query_as::<_, GameWithNamesModel>(
            r"
            SELECT g.id, g.title, g.maker_id, m.name AS maker_name,
                   g.genre_id, ge.name AS genre_name, g.sales_count, g.memo,
                   g.created_user, g.created_at, g.updated_user, g.updated_at, g.deleted
            FROM games g
            JOIN makers m ON m.id = g.maker_id
            JOIN genres ge ON ge.id = g.genre_id
            WHERE g.deleted = FALSE
              AND ($1::TEXT IS NULL OR g.title ILIKE '%' || $1 || '%')
              AND ($2::TEXT IS NULL OR m.name ILIKE '%' || $2 || '%')
              AND ($3::TEXT IS NULL OR ge.name ILIKE '%' || $3 || '%')
            ORDER BY g.id
            ",
        )
        .bind(filter.title.as_deref())
        .bind(filter.maker.as_deref())
        .bind(filter.genre.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(GameListEntry::from).collect())
    }

    #[instrument(skip(self, new), fields(title = %new.title))]
    async fn create(&self, new: &NewGame) -> RepoResult<Game> {
        let model = sqlx::query_as::<_, GameModel>(
            r"
            INSERT INTO games (title, maker_id, genre_id, sales_count, memo,
                               created_user, created_at, updated_user, updated_at, deleted)
            VALUES ($1, $2, $3, $4, $5, $6, NOW(), $6, NOW(), FALSE)
            RETURNING id, title, maker_id, genre_id, sales_count, memo,
                      created_user, created_at, updated_user, updated_at, deleted
            ",
        )
        .bind(&new.title)
        .bind(new.maker_id)
        .bind(new.genre_id)
        .bind(new.sales_count)
        .bind(&new.memo)
        .bind(&new.created_user)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Game::from(model))
    }

    #[instrument(skip(self, game), fields(id = game.id))]
    async fn update(&self, game: &Game) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE games
            SET title = $2, maker_id = $3, genre_id = $4, sales_count = $5, memo = $6,
                updated_user = $7, updated_at = $8
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(game.id)
        .bind(&game.title)
        .bind(game.maker_id)
        .bind(game.genre_id)
        .bind(game.sales_count)
        .bind(&game.memo)
        .bind(&game.updated_user)
        .bind(game.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(game_not_found(game.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64, updated_user: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE games
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
            return Err(game_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn any_for_maker(&self, maker_id: i64) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM games WHERE maker_id = $1 AND deleted = FALSE)
            ",
        )
        .bind(maker_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn any_for_genre(&self, genre_id: i64) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM games WHERE genre_id = $1 AND deleted = FALSE)
            ",
        )
        .bind(genre_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
