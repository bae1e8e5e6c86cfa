//! Maker handlers
//!
//! Reads are open to any authenticated user (the game form needs the
//! lookup list); mutations are admin-only master-data management.

use axum::{
    extract::{Query, State},
    Json,
};
use catalog_service::{MakerRequest, MakerResponse, MakerService};

use crate::extractors::{AdminUser, AuthUser, EntityIdPath, SearchQuery, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List makers with an optional name/address substring filter
///
/// GET /makers?search=
pub async fn list_makers(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<MakerResponse>>> {
    let service = MakerService::new(state.service_context());
    let makers = service.list_makers(query.term()).await?;
    Ok(Json(makers))
}

/// Get maker details
///
/// GET /makers/{id}
pub async fn get_maker(
    State(state): State<AppState>,
    _auth: AuthUser,
    EntityIdPath(maker_id): EntityIdPath,
) -> ApiResult<Json<MakerResponse>> {
    let service = MakerService::new(state.service_context());
    let maker = service.get_maker(maker_id).await?;
    Ok(Json(maker))
}

/// Create a new maker
///
/// POST /makers
pub async fn create_maker(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(request): ValidatedJson<MakerRequest>,
) -> ApiResult<Created<Json<MakerResponse>>> {
    let service = MakerService::new(state.service_context());
    let maker = service.create_maker(admin.0.user_id, request).await?;
    Ok(Created(Json(maker)))
}

/// Update a maker
///
/// PUT /makers/{id}
pub async fn update_maker(
    State(state): State<AppState>,
    admin: AdminUser,
    EntityIdPath(maker_id): EntityIdPath,
    ValidatedJson(request): ValidatedJson<MakerRequest>,
) -> ApiResult<Json<MakerResponse>> {
    let service = MakerService::new(state.service_context());
    let maker = service.update_maker(admin.0.user_id, maker_id, request).await?;
    Ok(Json(maker))
}

/// Soft delete a maker (rejected while games reference it)
///
/// DELETE /makers/{id}
pub async fn delete_maker(
    State(state): State<AppState>,
    admin: AdminUser,
    EntityIdPath(maker_id): EntityIdPath,
) -> ApiResult<NoContent> {
    let service = MakerService::new(state.service_context());
    service.delete_maker(admin.0.user_id, maker_id).await?;
    Ok(NoContent)
}
