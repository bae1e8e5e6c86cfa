//! Genre service
//!
//! Master-data management for genres, mirroring the maker flows.

use catalog_core::entities::NewGenre;
use catalog_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{GenreRequest, GenreResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Genre service
pub struct GenreService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GenreService<'a> {
    /// Create a new GenreService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List genres; the optional substring matches the name
    #[instrument(skip(self))]
    pub async fn list_genres(&self, search: Option<String>) -> ServiceResult<Vec<GenreResponse>> {
        let genres = self.ctx.genre_repo().list(search.as_deref()).await?;
        Ok(genres.iter().map(GenreResponse::from).collect())
    }

    /// Get a genre by ID
    #[instrument(skip(self))]
    pub async fn get_genre(&self, genre_id: i64) -> ServiceResult<GenreResponse> {
        let genre = self
            .ctx
            .genre_repo()
            .find_by_id(genre_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Genre", genre_id.to_string()))?;

        Ok(GenreResponse::from(&genre))
    }

    /// Create a new genre; the name must be unique among live rows
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_genre(
        &self,
        actor_id: i64,
        request: GenreRequest,
    ) -> ServiceResult<GenreResponse> {
        let actor = self.ctx.acting_user(actor_id).await?;

        if self.ctx.genre_repo().name_exists(&request.name, None).await? {
            return Err(ServiceError::from(DomainError::GenreNameTaken(request.name)));
        }

        let genre = self
            .ctx
            .genre_repo()
            .create(&NewGenre {
                name: request.name,
                created_user: actor.username,
            })
            .await?;

        info!(genre_id = genre.id, "Genre created");
        Ok(GenreResponse::from(&genre))
    }

    /// Update a genre; the name must be unique among other live rows
    #[instrument(skip(self, request))]
    pub async fn update_genre(
        &self,
        actor_id: i64,
        genre_id: i64,
        request: GenreRequest,
    ) -> ServiceResult<GenreResponse> {
        let actor = self.ctx.acting_user(actor_id).await?;

        let mut genre = self
            .ctx
            .genre_repo()
            .find_by_id(genre_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Genre", genre_id.to_string()))?;

        if self
            .ctx
            .genre_repo()
            .name_exists(&request.name, Some(genre_id))
            .await?
        {
            return Err(ServiceError::from(DomainError::GenreNameTaken(request.name)));
        }

        genre.name = request.name;
        genre.touch(actor.username);

        self.ctx.genre_repo().update(&genre).await?;

        info!(genre_id, "Genre updated");
        Ok(GenreResponse::from(&genre))
    }

    /// Soft delete a genre; rejected while any live game references it
    #[instrument(skip(self))]
    pub async fn delete_genre(&self, actor_id: i64, genre_id: i64) -> ServiceResult<()> {
        let actor = self.ctx.acting_user(actor_id).await?;

        if self.ctx.genre_repo().find_by_id(genre_id).await?.is_none() {
            return Err(ServiceError::not_found("Genre", genre_id.to_string()));
        }

        if self.ctx.game_repo().any_for_genre(genre_id).await? {
            return Err(ServiceError::from(DomainError::GenreInUse(genre_id)));
        }

        self.ctx.genre_repo().delete(genre_id, &actor.username).await?;

        info!(genre_id, "Genre deleted");
        Ok(())
    }
}
