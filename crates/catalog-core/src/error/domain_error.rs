//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Game not found: {0}")]
    GameNotFound(i64),

    #[error("Maker not found: {0}")]
    MakerNotFound(i64),

    #[error("Genre not found: {0}")]
    GenreNotFound(i64),

    #[error("User not found: {0}")]
    UserNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Game references unknown maker: {0}")]
    InvalidMakerReference(i64),

    #[error("Game references unknown genre: {0}")]
    InvalidGenreReference(i64),

    #[error("Invalid email format")]
    InvalidEmail,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Maker name already in use: {0}")]
    MakerNameTaken(String),

    #[error("Genre name already in use: {0}")]
    GenreNameTaken(String),

    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Maker {0} is referenced by existing games")]
    MakerInUse(i64),

    #[error("Genre {0} is referenced by existing games")]
    GenreInUse(i64),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::GameNotFound(_) => "UNKNOWN_GAME",
            Self::MakerNotFound(_) => "UNKNOWN_MAKER",
            Self::GenreNotFound(_) => "UNKNOWN_GENRE",
            Self::UserNotFound(_) => "UNKNOWN_USER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidMakerReference(_) => "INVALID_MAKER_REFERENCE",
            Self::InvalidGenreReference(_) => "INVALID_GENRE_REFERENCE",
            Self::InvalidEmail => "INVALID_EMAIL",

            // Conflict
            Self::MakerNameTaken(_) => "MAKER_NAME_TAKEN",
            Self::GenreNameTaken(_) => "GENRE_NAME_TAKEN",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Business Rules
            Self::MakerInUse(_) => "MAKER_IN_USE",
            Self::GenreInUse(_) => "GENRE_IN_USE",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::GameNotFound(_)
                | Self::MakerNotFound(_)
                | Self::GenreNotFound(_)
                | Self::UserNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidMakerReference(_)
                | Self::InvalidGenreReference(_)
                | Self::InvalidEmail
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::MakerNameTaken(_)
                | Self::GenreNameTaken(_)
                | Self::EmailAlreadyExists
                | Self::MakerInUse(_)
                | Self::GenreInUse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::GameNotFound(1);
        assert_eq!(err.code(), "UNKNOWN_GAME");

        let err = DomainError::MakerNameTaken("Sega".to_string());
        assert_eq!(err.code(), "MAKER_NAME_TAKEN");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::GameNotFound(1).is_not_found());
        assert!(DomainError::UserNotFound(1).is_not_found());
        assert!(!DomainError::EmailAlreadyExists.is_not_found());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::InvalidMakerReference(5).is_validation());
        assert!(DomainError::ValidationError("title required".to_string()).is_validation());
        assert!(!DomainError::MakerInUse(5).is_validation());
    }

    #[test]
    fn test_is_conflict() {
        assert!(DomainError::GenreNameTaken("RPG".to_string()).is_conflict());
        assert!(DomainError::GenreInUse(3).is_conflict());
        assert!(!DomainError::GenreNotFound(3).is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::GameNotFound(123);
        assert_eq!(err.to_string(), "Game not found: 123");

        let err = DomainError::MakerInUse(7);
        assert_eq!(err.to_string(), "Maker 7 is referenced by existing games");
    }
}
