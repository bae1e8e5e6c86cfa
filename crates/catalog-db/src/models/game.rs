//! Game database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the games table
#[derive(Debug, Clone, FromRow)]
pub struct GameModel {
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

/// Game row joined with maker and genre names
#[derive(Debug, Clone, FromRow)]
pub struct GameWithNamesModel {
    pub id: i64,
    pub title: String,
    pub maker_id: i64,
    pub maker_name: String,
    pub genre_id: i64,
    pub genre_name: String,
    pub sales_count: i32,
    pub memo: Option<String>,
    pub created_user: String,
    pub created_at: DateTime<Utc>,
    pub updated_user: String,
    pub updated_at: DateTime<Utc>,
    pub deleted: bool,
}
