//! Game handlers
//!
//! Catalog CRUD for games; any authenticated user may read and write.

use axum::{
    extract::{Query, State},
    Json,
};
use catalog_service::{GameRequest, GameResponse, GameService};

use crate::extractors::{AuthUser, EntityIdPath, GameListQuery, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List games with optional title/maker/genre filters
///
/// GET /games?title=&maker=&genre=
pub async fn list_games(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<GameListQuery>,
) -> ApiResult<Json<Vec<GameResponse>>> {
    let service = GameService::new(state.service_context());
    let games = service.list_games(query.into()).await?;
    Ok(Json(games))
}

/// Get game details
///
/// GET /games/{id}
pub async fn get_game(
    State(state): State<AppState>,
    _auth: AuthUser,
    EntityIdPath(game_id): EntityIdPath,
) -> ApiResult<Json<GameResponse>> {
    let service = GameService::new(state.service_context());
    let game = service.get_game(game_id).await?;
    Ok(Json(game))
}

/// Create a new game
///
/// POST /games
pub async fn create_game(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<GameRequest>,
) -> ApiResult<Created<Json<GameResponse>>> {
    let service = GameService::new(state.service_context());
    let game = service.create_game(auth.user_id, request).await?;
    Ok(Created(Json(game)))
}

/// Update a game
///
/// PUT /games/{id}
pub async fn update_game(
    State(state): State<AppState>,
    auth: AuthUser,
    EntityIdPath(game_id): EntityIdPath,
    ValidatedJson(request): ValidatedJson<GameRequest>,
) -> ApiResult<Json<GameResponse>> {
    let service = GameService::new(state.service_context());
    let game = service.update_game(auth.user_id, game_id, request).await?;
    Ok(Json(game))
}

/// Soft delete a game
///
/// DELETE /games/{id}
pub async fn delete_game(
    State(state): State<AppState>,
    auth: AuthUser,
    EntityIdPath(game_id): EntityIdPath,
) -> ApiResult<NoContent> {
    let service = GameService::new(state.service_context());
    service.delete_game(auth.user_id, game_id).await?;
    Ok(NoContent)
}
