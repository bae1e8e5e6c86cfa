//! Genre entity <-> model mapper

use catalog_core::entities::Genre;

use crate::models::GenreModel;

impl From<GenreModel> for Genre {
    fn from(model: GenreModel) -> Self {
        Genre {
            id: model.id,
            name: model.name,
            created_user: model.created_user,
            created_at: model.created_at,
            updated_user: model.updated_user,
            updated_at: model.updated_at,
            deleted: model.deleted,
        }
    }
}
