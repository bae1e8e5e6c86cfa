//! Genre handlers
//!
//! Same access split as makers: authenticated reads, admin-only mutations.

use axum::{
    extract::{Query, State},
    Json,
};
use catalog_service::{GenreRequest, GenreResponse, GenreService};

use crate::extractors::{AdminUser, AuthUser, EntityIdPath, SearchQuery, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List genres with an optional name substring filter
///
/// GET /genres?search=
pub async fn list_genres(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<GenreResponse>>> {
    let service = GenreService::new(state.service_context());
    let genres = service.list_genres(query.term()).await?;
    Ok(Json(genres))
}

/// Get genre details
///
/// GET /genres/{id}
pub async fn get_genre(
    State(state): State<AppState>,
    _auth: AuthUser,
    EntityIdPath(genre_id): EntityIdPath,
) -> ApiResult<Json<GenreResponse>> {
    let service = GenreService::new(state.service_context());
    let genre = service.get_genre(genre_id).await?;
    Ok(Json(genre))
}

/// Create a new genre
///
/// POST /genres
pub async fn create_genre(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(request): ValidatedJson<GenreRequest>,
) -> ApiResult<Created<Json<GenreResponse>>> {
    let service = GenreService::new(state.service_context());
    let genre = service.create_genre(admin.0.user_id, request).await?;
    Ok(Created(Json(genre)))
}

/// Update a genre
///
/// PUT /genres/{id}
pub async fn update_genre(
    State(state): State<AppState>,
    admin: AdminUser,
    EntityIdPath(genre_id): EntityIdPath,
    ValidatedJson(request): ValidatedJson<GenreRequest>,
) -> ApiResult<Json<GenreResponse>> {
    let service = GenreService::new(state.service_context());
    let genre = service.update_genre(admin.0.user_id, genre_id, request).await?;
    Ok(Json(genre))
}

/// Soft delete a genre (rejected while games reference it)
///
/// DELETE /genres/{id}
pub async fn delete_genre(
    State(state): State<AppState>,
    admin: AdminUser,
    EntityIdPath(genre_id): EntityIdPath,
) -> ApiResult<NoContent> {
    let service = GenreService::new(state.service_context());
    service.delete_genre(admin.0.user_id, genre_id).await?;
    Ok(NoContent)
}
