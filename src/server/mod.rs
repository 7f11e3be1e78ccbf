//! Server-side API backend for the cards service.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, extractors and DTO conversion
//! - **Service Layer** (`service/`) - Validation and error translation around the repository
//! - **Data Layer** (`data/`) - Repository port and its SeaORM implementation
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Logging, deadline and content type wrappers
//! - **Validation** (`validation`) - Required field checks for card forms
//!
//! # Request Flow
//!
//! 1. **Router** matches the request to a card handler
//! 2. **Middleware** logs failures, bounds the request by a deadline and sets the content type
//! 3. **Controller** extracts the ID and body, calls the service
//! 4. **Service** validates input and calls the repository
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO, or the error to its response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod validation;
