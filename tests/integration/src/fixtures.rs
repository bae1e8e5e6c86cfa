//! Test fixtures and data generators
//!
//! Provides reusable request/response shapes for integration tests. The
//! uniqueness counter is seeded from a UUID so repeated runs against the
//! same database never collide.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let run = Uuid::new_v4().simple().to_string();
    format!("{}-{}", &run[..8], n)
}

// ============================================================================
// Auth fixtures
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("user-{suffix}"),
            email: format!("user-{suffix}@example.com"),
            password: "TestPass123".to_string(),
            is_admin: false,
        }
    }

    pub fn unique_admin() -> Self {
        Self {
            is_admin: true,
            ..Self::unique()
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Refresh request
#[derive(Debug, Serialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserPayload,
}

/// User payload inside auth and account responses
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

// ============================================================================
// Master data fixtures
// ============================================================================

/// Maker create/update request
#[derive(Debug, Clone, Serialize)]
pub struct MakerRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl MakerRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("maker-{}", unique_suffix()),
            address: Some("1-1 Chuo-dori".to_string()),
        }
    }
}

/// Maker response
#[derive(Debug, Deserialize)]
pub struct MakerResponse {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub created_user: String,
    pub updated_user: String,
}

/// Genre create/update request
#[derive(Debug, Clone, Serialize)]
pub struct GenreRequest {
    pub name: String,
}

impl GenreRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("genre-{}", unique_suffix()),
        }
    }
}

/// Genre response
#[derive(Debug, Deserialize)]
pub struct GenreResponse {
    pub id: i64,
    pub name: String,
    pub created_user: String,
    pub updated_user: String,
}

// ============================================================================
// Game fixtures
// ============================================================================

/// Game create/update request
#[derive(Debug, Clone, Serialize)]
pub struct GameRequest {
    pub title: String,
    pub maker_id: i64,
    pub genre_id: i64,
    pub sales_count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl GameRequest {
    pub fn unique(maker_id: i64, genre_id: i64) -> Self {
        Self {
            title: format!("game-{}", unique_suffix()),
            maker_id,
            genre_id,
            sales_count: 1000,
            memo: None,
        }
    }
}

/// Game response
#[derive(Debug, Deserialize)]
pub struct GameResponse {
    pub id: i64,
    pub title: String,
    pub maker_id: i64,
    pub maker_name: String,
    pub genre_id: i64,
    pub genre_name: String,
    pub sales_count: i32,
    pub memo: Option<String>,
    pub created_user: String,
    pub updated_user: String,
}

// ============================================================================
// User administration fixtures
// ============================================================================

/// Partial user update request
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

/// User row in administration responses
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}
