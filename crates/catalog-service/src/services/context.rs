//! Service context - dependency container for services
//!
//! Holds all repositories and shared services needed by the service layer.

use std::sync::Arc;

use catalog_common::auth::JwtService;
use catalog_common::AppError;
use catalog_core::entities::User;
use catalog_core::traits::{GameRepository, GenreRepository, MakerRepository, UserRepository};
use catalog_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (health checks, ad-hoc queries)
    pool: PgPool,

    // Repositories
    game_repo: Arc<dyn GameRepository>,
    maker_repo: Arc<dyn MakerRepository>,
    genre_repo: Arc<dyn GenreRepository>,
    user_repo: Arc<dyn UserRepository>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        game_repo: Arc<dyn GameRepository>,
        maker_repo: Arc<dyn MakerRepository>,
        genre_repo: Arc<dyn GenreRepository>,
        user_repo: Arc<dyn UserRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            game_repo,
            maker_repo,
            genre_repo,
            user_repo,
            jwt_service,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the game repository
    pub fn game_repo(&self) -> &dyn GameRepository {
        self.game_repo.as_ref()
    }

    /// Get the maker repository
    pub fn maker_repo(&self) -> &dyn MakerRepository {
        self.maker_repo.as_ref()
    }

    /// Get the genre repository
    pub fn genre_repo(&self) -> &dyn GenreRepository {
        self.genre_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Load the authenticated account performing an operation
    ///
    /// Mutations stamp audit fields with this account's username. A token
    /// whose account has been soft-deleted is no longer considered valid.
    ///
    /// # Errors
    /// Returns `AppError::InvalidToken` if the account no longer exists
    pub async fn acting_user(&self, user_id: i64) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(AppError::from)?
            .ok_or(AppError::InvalidToken)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    game_repo: Option<Arc<dyn GameRepository>>,
    maker_repo: Option<Arc<dyn MakerRepository>>,
    genre_repo: Option<Arc<dyn GenreRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            game_repo: None,
            maker_repo: None,
            genre_repo: None,
            user_repo: None,
            jwt_service: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn game_repo(mut self, repo: Arc<dyn GameRepository>) -> Self {
        self.game_repo = Some(repo);
        self
    }

    pub fn maker_repo(mut self, repo: Arc<dyn MakerRepository>) -> Self {
        self.maker_repo = Some(repo);
        self
    }

    pub fn genre_repo(mut self, repo: Arc<dyn GenreRepository>) -> Self {
        self.genre_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.game_repo
                .ok_or_else(|| super::error::ServiceError::validation("game_repo is required"))?,
            self.maker_repo
                .ok_or_else(|| super::error::ServiceError::validation("maker_repo is required"))?,
            self.genre_repo
                .ok_or_else(|| super::error::ServiceError::validation("genre_repo is required"))?,
            self.user_repo
                .ok_or_else(|| super::error::ServiceError::validation("user_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| super::error::ServiceError::validation("jwt_service is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
