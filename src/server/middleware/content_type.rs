use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Marks every response from the wrapped handler as JSON.
///
/// Applies to empty bodies as well, so a successful delete is still
/// `application/json`.
pub async fn json_content_type(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;

    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    response
}
