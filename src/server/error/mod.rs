//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the single mapping
//! from errors to HTTP responses. Every handler failure ends up here: the variant
//! decides the status code and body, and the rendered error text is attached to
//! the response as an [`ErrorReport`] so the finalizing middleware can log it.
//! Error text never reaches the client.

pub mod config;
pub mod validation;

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::MessageDto,
    server::error::{config::ConfigError, validation::ValidationErrors},
};

/// Top-level application error type.
///
/// Aggregates everything that can fail between the HTTP boundary and the
/// database, plus the startup failures that terminate `main`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Submitted form is well-formed but one or more fields were rejected.
    ///
    /// Results in 422 Unprocessable Entity with the field-level details.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Request body or path could not be decoded.
    ///
    /// Results in 400 Bad Request. The message is only logged.
    ///
    /// # Fields
    /// - Description of what failed to decode
    #[error("bad request: {0}")]
    BadRequest(String),

    /// No card exists with the requested ID.
    ///
    /// Results in 404 Not Found.
    #[error("card {0} not found")]
    NotFound(i64),

    /// Repository call failed for a reason other than a missing record.
    ///
    /// Results in 500 Internal Server Error.
    #[error("repository {operation}: {source}")]
    Repository {
        /// Repository operation that failed
        operation: &'static str,
        /// The underlying database error
        #[source]
        source: sea_orm::DbErr,
    },

    /// The request did not complete before the server deadline.
    ///
    /// Results in 500 Internal Server Error.
    #[error("request exceeded deadline of {0:?}")]
    DeadlineExceeded(Duration),

    /// Database error outside of a repository call (connection, migrations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

impl AppError {
    /// Builds a closure wrapping a database error with the repository operation
    /// that produced it, for use with `map_err`.
    pub fn repository(operation: &'static str) -> impl FnOnce(sea_orm::DbErr) -> Self {
        move |source| Self::Repository { operation, source }
    }
}

/// Rendered description of the error behind a failed response.
///
/// Inserted into the response extensions by `AppError::into_response` and read by
/// the finalizing middleware, which is the only place errors are logged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorReport(pub String);

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 422 Unprocessable Entity - For `Validation`, with the field details
/// - 400 Bad Request - For `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For every other variant
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let report = ErrorReport(self.to_string());

        let mut response = match self {
            Self::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(errors.into_dto())).into_response()
            }
            Self::BadRequest(_) => message_response(StatusCode::BAD_REQUEST, "bad request"),
            Self::NotFound(_) => message_response(StatusCode::NOT_FOUND, "not found"),
            _ => message_response(StatusCode::INTERNAL_SERVER_ERROR, "internal server error"),
        };

        response.extensions_mut().insert(report);
        response
    }
}

fn message_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(MessageDto {
            message: message.to_string(),
        }),
    )
        .into_response()
}
