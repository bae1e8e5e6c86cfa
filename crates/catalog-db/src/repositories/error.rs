//! Error handling utilities for repositories

use catalog_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "game not found" error
pub fn game_not_found(id: i64) -> DomainError {
    DomainError::GameNotFound(id)
}

/// Create a "maker not found" error
pub fn maker_not_found(id: i64) -> DomainError {
    DomainError::MakerNotFound(id)
}

/// Create a "genre not found" error
pub fn genre_not_found(id: i64) -> DomainError {
    DomainError::GenreNotFound(id)
}

/// Create a "user not found" error
pub fn user_not_found(id: i64) -> DomainError {
    DomainError::UserNotFound(id)
}
