//! List-filter query extractors
//!
//! Query-string filters for the list endpoints. Empty strings count as
//! "no filter", matching the behavior of absent parameters.

use catalog_core::traits::{GameFilter, UserFilter};
use serde::Deserialize;

/// Single-field substring search (`?search=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: Option<String>,
}

impl SearchQuery {
    /// The search term, with empty strings normalized away
    pub fn term(self) -> Option<String> {
        self.search.filter(|s| !s.is_empty())
    }
}

/// Game list filters (`?title=&maker=&genre=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameListQuery {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub maker: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl From<GameListQuery> for GameFilter {
    fn from(query: GameListQuery) -> Self {
        GameFilter {
            title: query.title.filter(|s| !s.is_empty()),
            maker: query.maker.filter(|s| !s.is_empty()),
            genre: query.genre.filter(|s| !s.is_empty()),
        }
    }
}

/// User list filters (`?search=&is_admin=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub is_admin: Option<bool>,
}

impl From<UserListQuery> for UserFilter {
    fn from(query: UserListQuery) -> Self {
        UserFilter {
            search: query.search.filter(|s| !s.is_empty()),
            is_admin: query.is_admin,
        }
    }
}
