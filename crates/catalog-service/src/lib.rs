//! # catalog-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export the service surface for handler crates
pub use dto::{
    AuthResponse, CurrentUserResponse, GameRequest, GameResponse, GenreRequest, GenreResponse,
    HealthResponse, LoginRequest, MakerRequest, MakerResponse, ReadinessResponse,
    RefreshTokenRequest, RegisterRequest, UpdateUserRequest, UserResponse,
};
pub use services::{
    AuthService, GameService, GenreService, MakerService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, UserAdminService,
};
