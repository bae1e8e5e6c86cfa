//! Game entity - a catalog entry referencing a maker and a genre

use chrono::{DateTime, Utc};

/// Game entity with audit fields and a soft-delete flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: i64,
    pub title: String,
    pub maker_id: i64,
    pub genre_id: i64,
    pub sales_count: i32,
    pub memo: Option<String>,
    pub created_user: String,
    pub created_at: DateTime<Utc>,
    pub updated_user: String,
    pub updated_at: DateTime<Utc>,
    pub deleted: bool,
}

/// Draft for inserting a new game; the id is assigned by the database
#[derive(Debug, Clone)]
pub struct NewGame {
    pub title: String,
    pub maker_id: i64,
    pub genre_id: i64,
    pub sales_count: i32,
    pub memo: Option<String>,
    pub created_user: String,
}

impl Game {
    /// Maximum title length in characters
    pub const MAX_TITLE_LEN: usize = 200;

    /// Stamp the update audit fields
    pub fn touch(&mut self, updated_user: impl Into<String>) {
        self.updated_user = updated_user.into();
        self.updated_at = Utc::now();
    }

    /// Check if the game is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }
}
