//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They run validation, coordinate repository calls and translate persistence
//! failures into application errors, working with domain models rather than DTOs or
//! entity models.

pub mod card;
