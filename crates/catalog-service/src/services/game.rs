//! Game service
//!
//! Catalog CRUD for games. Create and update verify that the referenced
//! maker and genre are live rows; responses carry both names.

use catalog_core::entities::NewGame;
use catalog_core::traits::{GameFilter, GameListEntry};
use catalog_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{GameRequest, GameResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Game service
pub struct GameService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GameService<'a> {
    /// Create a new GameService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List games with optional title/maker/genre substring filters
    #[instrument(skip(self))]
    pub async fn list_games(&self, filter: GameFilter) -> ServiceResult<Vec<GameResponse>> {
        let entries = self.ctx.game_repo().list(&filter).await?;
        Ok(entries.iter().map(GameResponse::from).collect())
    }

    /// Get a game by ID, joined with maker and genre names
    #[instrument(skip(self))]
    pub async fn get_game(&self, game_id: i64) -> ServiceResult<GameResponse> {
        let entry = self
            .ctx
            .game_repo()
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Game", game_id.to_string()))?;

        Ok(GameResponse::from(&entry))
    }

    /// Create a new game; the maker and genre must be live rows
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_game(
        &self,
        actor_id: i64,
        request: GameRequest,
    ) -> ServiceResult<GameResponse> {
        let actor = self.ctx.acting_user(actor_id).await?;

        let (maker_name, genre_name) = self
            .resolve_references(request.maker_id, request.genre_id)
            .await?;

        let game = self
            .ctx
            .game_repo()
            .create(&NewGame {
                title: request.title,
                maker_id: request.maker_id,
                genre_id: request.genre_id,
                sales_count: request.sales_count,
                memo: request.memo,
                created_user: actor.username,
            })
            .await?;

        info!(game_id = game.id, "Game created");

        Ok(GameResponse::from(GameListEntry {
            game,
            maker_name,
            genre_name,
        }))
    }

    /// Replace the mutable fields of a game, re-checking references
    #[instrument(skip(self, request))]
    pub async fn update_game(
        &self,
        actor_id: i64,
        game_id: i64,
        request: GameRequest,
    ) -> ServiceResult<GameResponse> {
        let actor = self.ctx.acting_user(actor_id).await?;

        let entry = self
            .ctx
            .game_repo()
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Game", game_id.to_string()))?;

        let (maker_name, genre_name) = self
            .resolve_references(request.maker_id, request.genre_id)
            .await?;

        let mut game = entry.game;
        game.title = request.title;
        game.maker_id = request.maker_id;
        game.genre_id = request.genre_id;
        game.sales_count = request.sales_count;
        game.memo = request.memo;
        game.touch(actor.username);

        self.ctx.game_repo().update(&game).await?;

        info!(game_id, "Game updated");

        Ok(GameResponse::from(GameListEntry {
            game,
            maker_name,
            genre_name,
        }))
    }

    /// Soft delete a game
    #[instrument(skip(self))]
    pub async fn delete_game(&self, actor_id: i64, game_id: i64) -> ServiceResult<()> {
        let actor = self.ctx.acting_user(actor_id).await?;

        self.ctx.game_repo().delete(game_id, &actor.username).await?;

        info!(game_id, "Game deleted");
        Ok(())
    }

    /// Verify that the referenced maker and genre exist as live rows,
    /// returning their names for the response payload
    async fn resolve_references(
        &self,
        maker_id: i64,
        genre_id: i64,
    ) -> ServiceResult<(String, String)> {
        let maker = self
            .ctx
            .maker_repo()
            .find_by_id(maker_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::InvalidMakerReference(maker_id)))?;

        let genre = self
            .ctx
            .genre_repo()
            .find_by_id(genre_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::InvalidGenreReference(genre_id)))?;

        Ok((maker.name, genre.name))
    }
}
