//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every query excludes soft-deleted rows.

use async_trait::async_trait;

use crate::entities::{Game, Genre, Maker, NewGame, NewGenre, NewMaker, NewUser, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Game Repository
// ============================================================================

/// Substring filters for game listings; all are optional and independent
#[derive(Debug, Clone, Default)]
pub struct GameFilter {
    /// Match against the game title
    pub title: Option<String>,
    /// Match against the maker name
    pub maker: Option<String>,
    /// Match against the genre name
    pub genre: Option<String>,
}

/// A game joined with the names of its maker and genre
#[derive(Debug, Clone)]
pub struct GameListEntry {
    pub game: Game,
    pub maker_name: String,
    pub genre_name: String,
}

#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Find a game by ID, joined with maker and genre names
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<GameListEntry>>;

    /// List games matching the filter, joined with maker and genre names
    async fn list(&self, filter: &GameFilter) -> RepoResult<Vec<GameListEntry>>;

    /// Insert a new game and return the stored row
    async fn create(&self, new: &NewGame) -> RepoResult<Game>;

    /// Update the mutable fields of an existing game
    async fn update(&self, game: &Game) -> RepoResult<()>;

    /// Soft delete a game, stamping the update audit fields
    async fn delete(&self, id: i64, updated_user: &str) -> RepoResult<()>;

    /// Check whether any live game references the maker
    async fn any_for_maker(&self, maker_id: i64) -> RepoResult<bool>;

    /// Check whether any live game references the genre
    async fn any_for_genre(&self, genre_id: i64) -> RepoResult<bool>;
}

// ============================================================================
// Maker Repository
// ============================================================================

#[async_trait]
pub trait MakerRepository: Send + Sync {
    /// Find a maker by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Maker>>;

    /// List makers; an optional substring matches name or address
    async fn list(&self, search: Option<&str>) -> RepoResult<Vec<Maker>>;

    /// Check whether a live maker exists with this ID
    async fn exists(&self, id: i64) -> RepoResult<bool>;

    /// Check whether the name is taken by a live maker other than `exclude_id`
    async fn name_exists(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool>;

    /// Insert a new maker and return the stored row
    async fn create(&self, new: &NewMaker) -> RepoResult<Maker>;

    /// Update an existing maker
    async fn update(&self, maker: &Maker) -> RepoResult<()>;

    /// Soft delete a maker, stamping the update audit fields
    async fn delete(&self, id: i64, updated_user: &str) -> RepoResult<()>;
}

// ============================================================================
// Genre Repository
// ============================================================================

#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// Find a genre by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Genre>>;

    /// List genres; an optional substring matches the name
    async fn list(&self, search: Option<&str>) -> RepoResult<Vec<Genre>>;

    /// Check whether a live genre exists with this ID
    async fn exists(&self, id: i64) -> RepoResult<bool>;

    /// Check whether the name is taken by a live genre other than `exclude_id`
    async fn name_exists(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool>;

    /// Insert a new genre and return the stored row
    async fn create(&self, new: &NewGenre) -> RepoResult<Genre>;

    /// Update an existing genre
    async fn update(&self, genre: &Genre) -> RepoResult<()>;

    /// Soft delete a genre, stamping the update audit fields
    async fn delete(&self, id: i64, updated_user: &str) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

/// Filters for user listings
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Substring match against username or email
    pub search: Option<String>,
    /// Filter by the admin flag
    pub is_admin: Option<bool>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check whether the email is taken by a live user other than `exclude_id`
    async fn email_exists(&self, email: &str, exclude_id: Option<i64>) -> RepoResult<bool>;

    /// List users matching the filter
    async fn list(&self, filter: &UserFilter) -> RepoResult<Vec<User>>;

    /// Insert a new user with its password hash and return the stored row
    async fn create(&self, new: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Soft delete a user
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;
}
