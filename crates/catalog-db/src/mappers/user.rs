//! User entity <-> model mapper
//!
//! The password hash stays in the model; the entity never carries it.

use catalog_core::entities::User;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            is_admin: model.is_admin,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted: model.deleted,
        }
    }
}
