//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance (migrations are applied on startup)
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register a fresh admin account and return its access token
async fn register_admin(server: &TestServer) -> AuthResponse {
    let request = RegisterRequest::unique_admin();
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

/// Register a fresh non-admin account and return its access token
async fn register_user(server: &TestServer) -> AuthResponse {
    let request = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.user.email, request.email);
    assert!(!auth.user.is_admin);
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/v1/auth/register", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_weak_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest {
        // Long enough for DTO validation, but no digit
        password: "NoDigitsHere".to_string(),
        ..RegisterRequest::unique()
    };

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique_admin();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, register_req.username);
    // The admin flag from registration comes back on login
    assert!(auth.user.is_admin);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Unknown email
    let login_req = LoginRequest {
        email: format!("missing-{}@example.com", unique_suffix()),
        password: "WrongPass123".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // Known email, wrong password
    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();

    let login_req = LoginRequest {
        email: register_req.email.clone(),
        password: "WrongPass123".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let refresh_req = RefreshRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server.post("/api/v1/auth/refresh", &refresh_req).await.unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(refreshed.user.id, auth.user.id);
    assert!(!refreshed.access_token.is_empty());

    // An access token is not accepted as a refresh token
    let bogus = RefreshRequest {
        refresh_token: refreshed.access_token.clone(),
    };
    let response = server.post("/api/v1/auth/refresh", &bogus).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_get_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_admin(&server).await;

    // Without a token
    let response = server.get("/api/v1/account").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // With a token
    let response = server.get_auth("/api/v1/account", &auth.access_token).await.unwrap();
    let me: UserPayload = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(me.id, auth.user.id);
    assert!(me.is_admin);
}

// ============================================================================
// Admin Gating Tests
// ============================================================================

#[tokio::test]
async fn test_master_data_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_user(&server).await;

    // Reads are allowed for any authenticated user
    let response = server.get_auth("/api/v1/genres", &user.access_token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Mutations are not
    let response = server
        .post_auth("/api/v1/genres", &user.access_token, &GenreRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Neither is user administration, including reads
    let response = server.get_auth("/api/v1/users", &user.access_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Genre Tests
// ============================================================================

#[tokio::test]
async fn test_genre_crud() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let token = &admin.access_token;

    // Create
    let request = GenreRequest::unique();
    let response = server.post_auth("/api/v1/genres", token, &request).await.unwrap();
    let genre: GenreResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(genre.name, request.name);
    assert_eq!(genre.created_user, admin.user.username);

    // Duplicate name is rejected
    let response = server.post_auth("/api/v1/genres", token, &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // List with substring filter finds it
    let response = server
        .get_auth(&format!("/api/v1/genres?search={}", request.name), token)
        .await
        .unwrap();
    let listed: Vec<GenreResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, genre.id);

    // Detail
    let response = server
        .get_auth(&format!("/api/v1/genres/{}", genre.id), token)
        .await
        .unwrap();
    let detail: GenreResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.name, request.name);

    // Update
    let renamed = GenreRequest::unique();
    let response = server
        .put_auth(&format!("/api/v1/genres/{}", genre.id), token, &renamed)
        .await
        .unwrap();
    let updated: GenreResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, renamed.name);
    assert_eq!(updated.updated_user, admin.user.username);

    // Delete, then the row is gone
    let response = server
        .delete_auth(&format!("/api/v1/genres/{}", genre.id), token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/genres/{}", genre.id), token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_genre_update_duplicate_name() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let token = &admin.access_token;

    let first = GenreRequest::unique();
    let response = server.post_auth("/api/v1/genres", token, &first).await.unwrap();
    let _first: GenreResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let second = GenreRequest::unique();
    let response = server.post_auth("/api/v1/genres", token, &second).await.unwrap();
    let second_genre: GenreResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Renaming the second genre to the first name collides
    let response = server
        .put_auth(&format!("/api/v1/genres/{}", second_genre.id), token, &first)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Renaming it to its own name is fine
    let response = server
        .put_auth(&format!("/api/v1/genres/{}", second_genre.id), token, &second)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Maker Tests
// ============================================================================

#[tokio::test]
async fn test_maker_crud() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let token = &admin.access_token;

    // Create
    let request = MakerRequest::unique();
    let response = server.post_auth("/api/v1/makers", token, &request).await.unwrap();
    let maker: MakerResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(maker.name, request.name);
    assert_eq!(maker.address, request.address);

    // Duplicate name is rejected
    let response = server.post_auth("/api/v1/makers", token, &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // The search matches the address as well as the name
    let response = server
        .get_auth(&format!("/api/v1/makers?search={}", "Chuo-dori"), token)
        .await
        .unwrap();
    let listed: Vec<MakerResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.iter().any(|m| m.id == maker.id));

    // Update clears the address
    let updated_req = MakerRequest {
        name: request.name.clone(),
        address: None,
    };
    let response = server
        .put_auth(&format!("/api/v1/makers/{}", maker.id), token, &updated_req)
        .await
        .unwrap();
    let updated: MakerResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(updated.address.is_none());

    // Delete
    let response = server
        .delete_auth(&format!("/api/v1/makers/{}", maker.id), token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/makers/{}", maker.id), token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Game Tests
// ============================================================================

#[tokio::test]
async fn test_game_crud() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let token = &admin.access_token;

    // Master data
    let maker_req = MakerRequest::unique();
    let response = server.post_auth("/api/v1/makers", token, &maker_req).await.unwrap();
    let maker: MakerResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let genre_req = GenreRequest::unique();
    let response = server.post_auth("/api/v1/genres", token, &genre_req).await.unwrap();
    let genre: GenreResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Any authenticated (non-admin) user can create games
    let user = register_user(&server).await;
    let game_req = GameRequest::unique(maker.id, genre.id);
    let response = server
        .post_auth("/api/v1/games", &user.access_token, &game_req)
        .await
        .unwrap();
    let game: GameResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(game.title, game_req.title);
    assert_eq!(game.maker_name, maker.name);
    assert_eq!(game.genre_name, genre.name);
    assert_eq!(game.created_user, user.user.username);

    // List filtered by title substring
    let response = server
        .get_auth(&format!("/api/v1/games?title={}", game_req.title), token)
        .await
        .unwrap();
    let listed: Vec<GameResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 1);

    // List filtered by maker name
    let response = server
        .get_auth(&format!("/api/v1/games?maker={}", maker.name), token)
        .await
        .unwrap();
    let listed: Vec<GameResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.iter().any(|g| g.id == game.id));

    // Update by a different user stamps the update audit fields only
    let update_req = GameRequest {
        sales_count: 9999,
        memo: Some("reprint".to_string()),
        ..game_req.clone()
    };
    let response = server
        .put_auth(&format!("/api/v1/games/{}", game.id), token, &update_req)
        .await
        .unwrap();
    let updated: GameResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.sales_count, 9999);
    assert_eq!(updated.memo.as_deref(), Some("reprint"));
    assert_eq!(updated.created_user, user.user.username);
    assert_eq!(updated.updated_user, admin.user.username);

    // Delete
    let response = server
        .delete_auth(&format!("/api/v1/games/{}", game.id), token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/games/{}", game.id), token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_game_invalid_references() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let token = &admin.access_token;

    let genre_req = GenreRequest::unique();
    let response = server.post_auth("/api/v1/genres", token, &genre_req).await.unwrap();
    let genre: GenreResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Nonexistent maker id
    let game_req = GameRequest::unique(i64::MAX - 1, genre.id);
    let response = server.post_auth("/api/v1/games", token, &game_req).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // A soft-deleted maker does not count as a valid reference either
    let maker_req = MakerRequest::unique();
    let response = server.post_auth("/api/v1/makers", token, &maker_req).await.unwrap();
    let maker: MakerResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    server
        .delete_auth(&format!("/api/v1/makers/{}", maker.id), token)
        .await
        .unwrap();

    let game_req = GameRequest::unique(maker.id, genre.id);
    let response = server.post_auth("/api/v1/games", token, &game_req).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_delete_blocked_while_referenced() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let token = &admin.access_token;

    let response = server
        .post_auth("/api/v1/makers", token, &MakerRequest::unique())
        .await
        .unwrap();
    let maker: MakerResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/v1/genres", token, &GenreRequest::unique())
        .await
        .unwrap();
    let genre: GenreResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/v1/games", token, &GameRequest::unique(maker.id, genre.id))
        .await
        .unwrap();
    let game: GameResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Both parents are pinned by the live game
    let response = server
        .delete_auth(&format!("/api/v1/makers/{}", maker.id), token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/genres/{}", genre.id), token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Soft-deleting the game releases them
    server
        .delete_auth(&format!("/api/v1/games/{}", game.id), token)
        .await
        .unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/makers/{}", maker.id), token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/genres/{}", genre.id), token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// User Administration Tests
// ============================================================================

#[tokio::test]
async fn test_user_administration() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register_admin(&server).await;
    let token = &admin.access_token;
    let target = register_user(&server).await;

    // List filtered by username substring and admin flag
    let response = server
        .get_auth(
            &format!("/api/v1/users?search={}&is_admin=false", target.user.username),
            token,
        )
        .await
        .unwrap();
    let listed: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, target.user.id);

    // Detail
    let response = server
        .get_auth(&format!("/api/v1/users/{}", target.user.id), token)
        .await
        .unwrap();
    let detail: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.email, target.user.email);

    // Partial update: promote to admin, everything else unchanged
    let update = UpdateUserRequest {
        is_admin: Some(true),
        ..UpdateUserRequest::default()
    };
    let response = server
        .put_auth(&format!("/api/v1/users/{}", target.user.id), token, &update)
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(updated.is_admin);
    assert_eq!(updated.username, target.user.username);

    // Changing email to the admin's email collides
    let update = UpdateUserRequest {
        email: Some(admin.user.email.clone()),
        ..UpdateUserRequest::default()
    };
    let response = server
        .put_auth(&format!("/api/v1/users/{}", target.user.id), token, &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Soft delete
    let response = server
        .delete_auth(&format!("/api/v1/users/{}", target.user.id), token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/users/{}", target.user.id), token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // A deleted account can no longer log in
    let login = LoginRequest {
        email: target.user.email.clone(),
        password: "TestPass123".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}
