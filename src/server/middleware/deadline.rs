use std::time::Duration;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::server::error::AppError;

/// Upper bound on the time a card request may take end to end.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Bounds the wrapped handler by [`REQUEST_TIMEOUT`].
pub async fn request_deadline(req: Request, next: Next) -> Response {
    with_deadline(REQUEST_TIMEOUT, req, next).await
}

/// Runs the wrapped handler, dropping it (and any in-flight repository call)
/// once `timeout` elapses and responding with `AppError::DeadlineExceeded`.
pub async fn with_deadline(timeout: Duration, req: Request, next: Next) -> Response {
    match tokio::time::timeout(timeout, next.run(req)).await {
        Ok(response) => response,
        Err(_) => AppError::DeadlineExceeded(timeout).into_response(),
    }
}
