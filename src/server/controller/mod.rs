//! HTTP request handlers.
//!
//! Controllers decode path and body input, call the service layer and convert
//! domain models to DTOs. They never build error responses themselves: every
//! failure is returned as an `AppError` and rendered by its `IntoResponse`
//! implementation.

pub mod card;
pub mod param;
