//! Genre entity - a game category

use chrono::{DateTime, Utc};

/// Genre entity; names are unique among non-deleted rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
    pub created_user: String,
    pub created_at: DateTime<Utc>,
    pub updated_user: String,
    pub updated_at: DateTime<Utc>,
    pub deleted: bool,
}

/// Draft for inserting a new genre
#[derive(Debug, Clone)]
pub struct NewGenre {
    pub name: String,
    pub created_user: String,
}

impl Genre {
    /// Maximum name length in characters
    pub const MAX_NAME_LEN: usize = 100;

    /// Stamp the update audit fields
    pub fn touch(&mut self, updated_user: impl Into<String>) {
        self.updated_user = updated_user.into();
        self.updated_at = Utc::now();
    }

    /// Check if the genre is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }
}
