//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, path ids, and
//! list-filter query strings.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::{AdminUser, AuthUser};
pub use path::EntityIdPath;
pub use query::{GameListQuery, SearchQuery, UserListQuery};
pub use validated::ValidatedJson;
