//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through
//! Axum's state extraction.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::card::SeaOrmCardRepository, service::card::CardService, validation::CardValidator,
};

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: the card service only holds reference-counted trait objects.
#[derive(Clone)]
pub struct AppState {
    /// Card operations used by every card handler.
    pub card_service: CardService,
}

impl AppState {
    /// Creates the application state backed by the given database.
    ///
    /// Wires a SeaORM-backed card repository and the standard card validator into
    /// the card service.
    pub fn new(db: DatabaseConnection) -> Self {
        Self::from_service(CardService::new(
            Arc::new(SeaOrmCardRepository::new(db)),
            Arc::new(CardValidator),
        ))
    }

    /// Creates the application state around an already assembled card service.
    pub fn from_service(card_service: CardService) -> Self {
        Self { card_service }
    }
}
