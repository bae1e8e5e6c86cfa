//! Database models - SQLx-compatible structs for PostgreSQL tables

mod game;
mod genre;
mod maker;
mod user;

pub use game::{GameModel, GameWithNamesModel};
pub use genre::GenreModel;
pub use maker::MakerModel;
pub use user::UserModel;
