//! Maker entity - a game publisher/manufacturer

use chrono::{DateTime, Utc};

/// Maker entity; names are unique among non-deleted rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maker {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub created_user: String,
    pub created_at: DateTime<Utc>,
    pub updated_user: String,
    pub updated_at: DateTime<Utc>,
    pub deleted: bool,
}

/// Draft for inserting a new maker
#[derive(Debug, Clone)]
pub struct NewMaker {
    pub name: String,
    pub address: Option<String>,
    pub created_user: String,
}

impl Maker {
    /// Maximum name length in characters
    pub const MAX_NAME_LEN: usize = 100;
    /// Maximum address length in characters
    pub const MAX_ADDRESS_LEN: usize = 200;

    /// Stamp the update audit fields
    pub fn touch(&mut self, updated_user: impl Into<String>) {
        self.updated_user = updated_user.into();
        self.updated_at = Utc::now();
    }

    /// Check if the maker is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }
}
