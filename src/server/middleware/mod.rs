//! Request wrappers applied around every card handler.
//!
//! The chain is ordinary function composition: each wrapper is an
//! `axum::middleware::from_fn` function, and [`apply_chain`] layers them so that
//! the outermost wrapper runs first:
//!
//! 1. `finalize::log_errors` - logs the error behind a failed response
//! 2. `deadline::request_deadline` - bounds the request by a fixed timeout
//! 3. `content_type::json_content_type` - marks the response as JSON

pub mod content_type;
pub mod deadline;
pub mod finalize;

use axum::{middleware::from_fn, Router};

/// Wraps every route registered on `router` with the middleware chain.
///
/// Uses `route_layer`, so requests that match no route fall through to axum's
/// default 404 without passing through the chain.
pub fn apply_chain<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .route_layer(from_fn(content_type::json_content_type))
        .route_layer(from_fn(deadline::request_deadline))
        .route_layer(from_fn(finalize::log_errors))
}
