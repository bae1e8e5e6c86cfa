//! Repository traits (ports) for data access

mod repositories;

pub use repositories::{
    GameFilter, GameListEntry, GameRepository, GenreRepository, MakerRepository, RepoResult,
    UserFilter, UserRepository,
};
