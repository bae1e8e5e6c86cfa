//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in catalog-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod game;
mod genre;
mod maker;
mod user;

pub use game::PgGameRepository;
pub use genre::PgGenreRepository;
pub use maker::PgMakerRepository;
pub use user::PgUserRepository;
