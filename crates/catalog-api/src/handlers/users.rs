//! User administration handlers
//!
//! Admin-only endpoints for listing, inspecting, updating, and
//! soft-deleting accounts.

use axum::{
    extract::{Query, State},
    Json,
};
use catalog_service::{UpdateUserRequest, UserAdminService, UserResponse};

use crate::extractors::{AdminUser, EntityIdPath, UserListQuery, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// List users with optional substring and admin-flag filters
///
/// GET /users?search=&is_admin=
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<UserListQuery>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserAdminService::new(state.service_context());
    let users = service.list_users(query.into()).await?;
    Ok(Json(users))
}

/// Get user details
///
/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    EntityIdPath(user_id): EntityIdPath,
) -> ApiResult<Json<UserResponse>> {
    let service = UserAdminService::new(state.service_context());
    let user = service.get_user(user_id).await?;
    Ok(Json(user))
}

/// Partially update a user
///
/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    EntityIdPath(user_id): EntityIdPath,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserAdminService::new(state.service_context());
    let user = service.update_user(user_id, request).await?;
    Ok(Json(user))
}

/// Soft delete a user
///
/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    EntityIdPath(user_id): EntityIdPath,
) -> ApiResult<NoContent> {
    let service = UserAdminService::new(state.service_context());
    service.delete_user(user_id).await?;
    Ok(NoContent)
}
