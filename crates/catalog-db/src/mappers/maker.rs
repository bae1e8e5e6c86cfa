//! Maker entity <-> model mapper

use catalog_core::entities::Maker;

use crate::models::MakerModel;

impl From<MakerModel> for Maker {
    fn from(model: MakerModel) -> Self {
        Maker {
            id: model.id,
            name: model.name,
            address: model.address,
            created_user: model.created_user,
            created_at: model.created_at,
            updated_user: model.updated_user,
            updated_at: model.updated_at,
            deleted: model.deleted,
        }
    }
}
