//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use catalog_core::entities::{Genre, Maker, User};
use catalog_core::traits::GameListEntry;

use super::responses::{
    CurrentUserResponse, GameResponse, GenreResponse, MakerResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Game Mappers
// ============================================================================

impl From<&GameListEntry> for GameResponse {
    fn from(entry: &GameListEntry) -> Self {
        Self {
            id: entry.game.id,
            title: entry.game.title.clone(),
            maker_id: entry.game.maker_id,
            maker_name: entry.maker_name.clone(),
            genre_id: entry.game.genre_id,
            genre_name: entry.genre_name.clone(),
            sales_count: entry.game.sales_count,
            memo: entry.game.memo.clone(),
            created_user: entry.game.created_user.clone(),
            created_at: entry.game.created_at,
            updated_user: entry.game.updated_user.clone(),
            updated_at: entry.game.updated_at,
        }
    }
}

impl From<GameListEntry> for GameResponse {
    fn from(entry: GameListEntry) -> Self {
        Self::from(&entry)
    }
}

// ============================================================================
// Maker Mappers
// ============================================================================

impl From<&Maker> for MakerResponse {
    fn from(maker: &Maker) -> Self {
        Self {
            id: maker.id,
            name: maker.name.clone(),
            address: maker.address.clone(),
            created_user: maker.created_user.clone(),
            created_at: maker.created_at,
            updated_user: maker.updated_user.clone(),
            updated_at: maker.updated_at,
        }
    }
}

impl From<Maker> for MakerResponse {
    fn from(maker: Maker) -> Self {
        Self::from(&maker)
    }
}

// ============================================================================
// Genre Mappers
// ============================================================================

impl From<&Genre> for GenreResponse {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name.clone(),
            created_user: genre.created_user.clone(),
            created_at: genre.created_at,
            updated_user: genre.updated_user.clone(),
            updated_at: genre.updated_at,
        }
    }
}

impl From<Genre> for GenreResponse {
    fn from(genre: Genre) -> Self {
        Self::from(&genre)
    }
}
