//! Game entity <-> model mappers

use catalog_core::entities::Game;
use catalog_core::traits::GameListEntry;

use crate::models::{GameModel, GameWithNamesModel};

/// Convert GameModel to Game entity
impl From<GameModel> for Game {
    fn from(model: GameModel) -> Self {
        Game {
            id: model.id,
            title: model.title,
            maker_id: model.maker_id,
            genre_id: model.genre_id,
            sales_count: model.sales_count,
            memo: model.memo,
            created_user: model.created_user,
            created_at: model.created_at,
            updated_user: model.updated_user,
            updated_at: model.updated_at,
            deleted: model.deleted,
        }
    }
}

/// Convert the joined row to a GameListEntry
impl From<GameWithNamesModel> for GameListEntry {
    fn from(model: GameWithNamesModel) -> Self {
        GameListEntry {
            game: Game {
                id: model.id,
                title: model.title,
                maker_id: model.maker_id,
                genre_id: model.genre_id,
                sales_count: model.sales_count,
                memo: model.memo,
                created_user: model.created_user,
                created_at: model.created_at,
                updated_user: model.updated_user,
                updated_at: model.updated_at,
                deleted: model.deleted,
            },
            maker_name: model.maker_name,
            genre_name: model.genre_name,
        }
    }
}
