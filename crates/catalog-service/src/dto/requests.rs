//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field limits mirror the column widths of the catalog tables.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 50, message = "Username must be 2-50 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    /// Grants access to master-data management
    #[serde(default)]
    pub is_admin: bool,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// User Administration Requests
// ============================================================================

/// Partial user update; absent fields keep their current values
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 50, message = "Username must be 2-50 characters"))]
    pub username: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub is_admin: Option<bool>,
}

// ============================================================================
// Game Requests
// ============================================================================

/// Create/update game request (updates replace all mutable fields)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GameRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    pub maker_id: i64,

    pub genre_id: i64,

    #[validate(range(min = 0, message = "Sales count cannot be negative"))]
    pub sales_count: i32,

    pub memo: Option<String>,
}

// ============================================================================
// Maker Requests
// ============================================================================

/// Create/update maker request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MakerRequest {
    #[validate(length(min = 1, max = 100, message = "Maker name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address: Option<String>,
}

// ============================================================================
// Genre Requests
// ============================================================================

/// Create/update genre request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenreRequest {
    #[validate(length(min = 1, max = 100, message = "Genre name must be 1-100 characters"))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            password: "securepassword123".to_string(),
            is_admin: false,
        };
        assert!(valid.validate().is_ok());

        let short_username = RegisterRequest {
            username: "a".to_string(),
            ..valid.clone()
        };
        assert!(short_username.validate().is_err());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterRequest {
            password: "short".to_string(),
            ..valid
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_game_request_validation() {
        let valid = GameRequest {
            title: "Space Trader".to_string(),
            maker_id: 1,
            genre_id: 2,
            sales_count: 100,
            memo: None,
        };
        assert!(valid.validate().is_ok());

        let empty_title = GameRequest {
            title: String::new(),
            ..valid.clone()
        };
        assert!(empty_title.validate().is_err());

        let long_title = GameRequest {
            title: "x".repeat(201),
            ..valid.clone()
        };
        assert!(long_title.validate().is_err());

        let negative_sales = GameRequest {
            sales_count: -1,
            ..valid
        };
        assert!(negative_sales.validate().is_err());
    }

    #[test]
    fn test_maker_request_validation() {
        let valid = MakerRequest {
            name: "Nintendo".to_string(),
            address: Some("Kyoto".to_string()),
        };
        assert!(valid.validate().is_ok());

        let empty_name = MakerRequest {
            name: String::new(),
            address: None,
        };
        assert!(empty_name.validate().is_err());

        let long_address = MakerRequest {
            name: "Nintendo".to_string(),
            address: Some("x".repeat(201)),
        };
        assert!(long_address.validate().is_err());
    }

    #[test]
    fn test_genre_request_validation() {
        assert!(GenreRequest { name: "RPG".to_string() }.validate().is_ok());
        assert!(GenreRequest { name: String::new() }.validate().is_err());
        assert!(GenreRequest { name: "x".repeat(101) }.validate().is_err());
    }

    #[test]
    fn test_update_user_request_partial() {
        // All-absent update is valid (a no-op)
        assert!(UpdateUserRequest::default().validate().is_ok());

        let bad_email = UpdateUserRequest {
            email: Some("nope".to_string()),
            ..UpdateUserRequest::default()
        };
        assert!(bad_email.validate().is_err());
    }
}
