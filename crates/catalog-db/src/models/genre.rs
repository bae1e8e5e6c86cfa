//! Genre database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the genres table
#[derive(Debug, Clone, FromRow)]
pub struct GenreModel {
    pub id: i64,
    pub name: String,
    pub created_user: String,
    pub created_at: DateTime<Utc>,
    pub updated_user: String,
    pub updated_at: DateTime<Utc>,
    pub deleted: bool,
}
