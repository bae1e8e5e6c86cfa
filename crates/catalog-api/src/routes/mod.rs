//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{auth, games, genres, health, makers, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(game_routes())
        .merge(maker_routes())
        .merge(genre_routes())
}

/// Authentication and account routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/account", get(auth::get_account))
}

/// User administration routes (admin-gated via extractor)
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/users/:id", get(users::get_user))
        .route("/users/:id", put(users::update_user))
        .route("/users/:id", delete(users::delete_user))
}

/// Game routes
fn game_routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(games::list_games))
        .route("/games", post(games::create_game))
        .route("/games/:id", get(games::get_game))
        .route("/games/:id", put(games::update_game))
        .route("/games/:id", delete(games::delete_game))
}

/// Maker routes (mutations admin-gated via extractor)
fn maker_routes() -> Router<AppState> {
    Router::new()
        .route("/makers", get(makers::list_makers))
        .route("/makers", post(makers::create_maker))
        .route("/makers/:id", get(makers::get_maker))
        .route("/makers/:id", put(makers::update_maker))
        .route("/makers/:id", delete(makers::delete_maker))
}

/// Genre routes (mutations admin-gated via extractor)
fn genre_routes() -> Router<AppState> {
    Router::new()
        .route("/genres", get(genres::list_genres))
        .route("/genres", post(genres::create_genre))
        .route("/genres/:id", get(genres::get_genre))
        .route("/genres/:id", put(genres::update_genre))
        .route("/genres/:id", delete(genres::delete_genre))
}
