//! User entity - an account with an admin flag
//!
//! The password hash is not part of the entity; it is passed alongside at
//! creation time and fetched separately for credential checks.

use chrono::{DateTime, Utc};

/// User account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted: bool,
}

/// Draft for registering a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

impl User {
    /// Maximum username length in characters
    pub const MAX_USERNAME_LEN: usize = 50;

    /// Check if the account may manage master data
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Check if the user is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }
}
