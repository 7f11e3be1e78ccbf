//! Request extractors shared by the controllers.
//!
//! Both extractors reject with `AppError::BadRequest`, so malformed input goes
//! through the same error mapping as every other failure instead of axum's plain
//! text rejections.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::server::error::AppError;

/// Card ID parsed from the `{id}` path segment.
///
/// Any 64-bit integer is accepted; ids outside the stored range are rejected as
/// not found rather than as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardId(pub i32);

impl<S> FromRequestParts<S> for CardId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let id = raw
            .parse::<i64>()
            .map_err(|e| AppError::BadRequest(format!("invalid card id '{}': {}", raw, e)))?;

        // No stored card can carry an id past the column range.
        i32::try_from(id)
            .map(CardId)
            .map_err(|_| AppError::NotFound(id))
    }
}

/// JSON request body decoded without regard to the request content type.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError::BadRequest(format!("invalid JSON body: {}", e)))
    }
}
