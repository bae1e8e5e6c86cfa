//! Path parameter extractor
//!
//! Type-safe extraction of numeric entity IDs from path parameters with a
//! consistent error body on malformed input.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::response::ApiError;

/// Extract a single entity ID from a path parameter
#[derive(Debug, Clone, Copy)]
pub struct EntityIdPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for EntityIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::invalid_path("Invalid id format"))?;

        Ok(EntityIdPath(id))
    }
}
