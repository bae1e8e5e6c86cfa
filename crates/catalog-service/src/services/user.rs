//! User administration service
//!
//! Admin-gated listing, detail, partial update, and soft delete of accounts.

use catalog_core::traits::UserFilter;
use chrono::Utc;
use tracing::{info, instrument};

use crate::dto::{UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User administration service
pub struct UserAdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserAdminService<'a> {
    /// Create a new UserAdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List users, optionally filtered by substring and admin flag
    #[instrument(skip(self))]
    pub async fn list_users(&self, filter: UserFilter) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list(&filter).await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: i64) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Partially update a user; absent fields keep their current values
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: i64,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if let Some(email) = request.email {
            if email != user.email
                && self.ctx.user_repo().email_exists(&email, Some(user_id)).await?
            {
                return Err(ServiceError::from(
                    catalog_core::DomainError::EmailAlreadyExists,
                ));
            }
            user.email = email;
        }

        if let Some(username) = request.username {
            user.username = username;
        }

        if let Some(is_admin) = request.is_admin {
            user.is_admin = is_admin;
        }

        user.updated_at = Utc::now();
        self.ctx.user_repo().update(&user).await?;

        info!(user_id, "User updated");
        Ok(UserResponse::from(&user))
    }

    /// Soft delete a user account
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: i64) -> ServiceResult<()> {
        self.ctx.user_repo().delete(user_id).await?;
        info!(user_id, "User account deleted");

        Ok(())
    }
}
