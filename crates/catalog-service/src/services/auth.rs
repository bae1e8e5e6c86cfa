//! Authentication service
//!
//! Handles user registration, login, token refresh, and current-user lookup.

use catalog_common::auth::{hash_password, validate_password_strength, verify_password};
use catalog_core::entities::NewUser;
use tracing::{info, instrument, warn};

use crate::dto::{
    AuthResponse, CurrentUserResponse, LoginRequest, RefreshTokenRequest, RegisterRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Validate password strength before proceeding
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        // Check if email already exists among live accounts
        if self.ctx.user_repo().email_exists(&request.email, None).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        // Hash password
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        // Save to database
        let new_user = NewUser {
            username: request.username,
            email: request.email,
            is_admin: request.is_admin,
        };
        let user = self.ctx.user_repo().create(&new_user, &password_hash).await?;

        info!(user_id = user.id, "User registered successfully");

        // Generate tokens
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id, user.is_admin)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(&user),
        ))
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        // Find user by email
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: user not found");
                ServiceError::App(catalog_common::AppError::InvalidCredentials)
            })?;

        // Get password hash
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                ServiceError::App(catalog_common::AppError::InvalidCredentials)
            })?;

        // Verify password
        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(ServiceError::App(catalog_common::AppError::InvalidCredentials));
        }

        info!(user_id = user.id, "User logged in successfully");

        // Generate tokens
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id, user.is_admin)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(&user),
        ))
    }

    /// Refresh access token using a refresh token
    ///
    /// The admin claim is re-read from the account so that a revoked admin
    /// flag takes effect at the next refresh.
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(
        &self,
        request: RefreshTokenRequest,
    ) -> ServiceResult<AuthResponse> {
        // Validate the refresh token
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)
            .map_err(ServiceError::from)?;
        let user_id = claims.user_id().map_err(ServiceError::from)?;

        // The account must still exist (soft delete revokes refresh)
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::App(catalog_common::AppError::InvalidToken))?;

        // Generate new tokens
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id, user.is_admin)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!(user_id = user.id, "Tokens refreshed successfully");

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(&user),
        ))
    }

    /// Get the current authenticated user's account info
    #[instrument(skip(self))]
    pub async fn current_user(&self, user_id: i64) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(CurrentUserResponse::from(&user))
    }
}
