use axum::{extract::Request, middleware::Next, response::Response};

use crate::server::error::ErrorReport;

/// Logs the error behind any failed response from the wrapped stack.
///
/// Handlers have already rendered the client response by the time this runs; this
/// only records the `ErrorReport` the error mapping attached, together with the
/// request method and path. Server errors log at error level, client errors at
/// debug.
pub async fn log_errors(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = next.run(req).await;

    if let Some(ErrorReport(error)) = response.extensions().get::<ErrorReport>() {
        let status = response.status();

        if status.is_server_error() {
            tracing::error!(%method, %path, status = status.as_u16(), "serve http: {}", error);
        } else {
            tracing::debug!(%method, %path, status = status.as_u16(), "serve http: {}", error);
        }
    }

    response
}
