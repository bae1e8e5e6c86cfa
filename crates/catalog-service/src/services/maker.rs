//! Maker service
//!
//! Master-data management for makers: list/detail for every authenticated
//! user, mutations stamped with the acting account's username.

use catalog_core::entities::NewMaker;
use catalog_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{MakerRequest, MakerResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Maker service
pub struct MakerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MakerService<'a> {
    /// Create a new MakerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List makers; the optional substring matches name or address
    #[instrument(skip(self))]
    pub async fn list_makers(&self, search: Option<String>) -> ServiceResult<Vec<MakerResponse>> {
        let makers = self.ctx.maker_repo().list(search.as_deref()).await?;
        Ok(makers.iter().map(MakerResponse::from).collect())
    }

    /// Get a maker by ID
    #[instrument(skip(self))]
    pub async fn get_maker(&self, maker_id: i64) -> ServiceResult<MakerResponse> {
        let maker = self
            .ctx
            .maker_repo()
            .find_by_id(maker_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Maker", maker_id.to_string()))?;

        Ok(MakerResponse::from(&maker))
    }

    /// Create a new maker; the name must be unique among live rows
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_maker(
        &self,
        actor_id: i64,
        request: MakerRequest,
    ) -> ServiceResult<MakerResponse> {
        let actor = self.ctx.acting_user(actor_id).await?;

        if self.ctx.maker_repo().name_exists(&request.name, None).await? {
            return Err(ServiceError::from(DomainError::MakerNameTaken(request.name)));
        }

        let maker = self
            .ctx
            .maker_repo()
            .create(&NewMaker {
                name: request.name,
                address: request.address,
                created_user: actor.username,
            })
            .await?;

        info!(maker_id = maker.id, "Maker created");
        Ok(MakerResponse::from(&maker))
    }

    /// Update a maker; the name must be unique among other live rows
    #[instrument(skip(self, request))]
    pub async fn update_maker(
        &self,
        actor_id: i64,
        maker_id: i64,
        request: MakerRequest,
    ) -> ServiceResult<MakerResponse> {
        let actor = self.ctx.acting_user(actor_id).await?;

        let mut maker = self
            .ctx
            .maker_repo()
            .find_by_id(maker_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Maker", maker_id.to_string()))?;

        if self
            .ctx
            .maker_repo()
            .name_exists(&request.name, Some(maker_id))
            .await?
        {
            return Err(ServiceError::from(DomainError::MakerNameTaken(request.name)));
        }

        maker.name = request.name;
        maker.address = request.address;
        maker.touch(actor.username);

        self.ctx.maker_repo().update(&maker).await?;

        info!(maker_id, "Maker updated");
        Ok(MakerResponse::from(&maker))
    }

    /// Soft delete a maker; rejected while any live game references it
    #[instrument(skip(self))]
    pub async fn delete_maker(&self, actor_id: i64, maker_id: i64) -> ServiceResult<()> {
        let actor = self.ctx.acting_user(actor_id).await?;

        // 404 before 409: a missing maker is not "in use"
        if self.ctx.maker_repo().find_by_id(maker_id).await?.is_none() {
            return Err(ServiceError::not_found("Maker", maker_id.to_string()));
        }

        if self.ctx.game_repo().any_for_maker(maker_id).await? {
            return Err(ServiceError::from(DomainError::MakerInUse(maker_id)));
        }

        self.ctx.maker_repo().delete(maker_id, &actor.username).await?;

        info!(maker_id, "Maker deleted");
        Ok(())
    }
}
