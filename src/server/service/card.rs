//! Card service for business logic.
//!
//! This module provides the `CardService`, which runs validation before every
//! mutating operation and translates repository failures into `AppError`s. A
//! missing card always surfaces as `AppError::NotFound` so the controller layer can
//! map it to 404 regardless of which operation hit it.

use std::sync::Arc;

use sea_orm::DbErr;

use crate::server::{
    data::card::CardRepository,
    error::AppError,
    model::card::{Card, CardForm, CreateCardParam},
    validation::Validator,
};

/// Service providing business logic for card management.
///
/// Holds its repository and validator as independently substitutable trait objects,
/// so the service can be cloned into request handlers and exercised with test doubles.
#[derive(Clone)]
pub struct CardService {
    repository: Arc<dyn CardRepository>,
    validator: Arc<dyn Validator>,
}

impl CardService {
    /// Creates a new CardService instance.
    ///
    /// # Arguments
    /// - `repository` - Card persistence implementation
    /// - `validator` - Form validator run before create and update
    ///
    /// # Returns
    /// - `CardService` - New service instance
    pub fn new(repository: Arc<dyn CardRepository>, validator: Arc<dyn Validator>) -> Self {
        Self {
            repository,
            validator,
        }
    }

    /// Creates a new card from a submitted form.
    ///
    /// # Arguments
    /// - `form` - The submitted card fields
    ///
    /// # Returns
    /// - `Ok(Card)` - The stored card with its assigned ID
    /// - `Err(AppError::Validation)` - The form was rejected; nothing was stored
    /// - `Err(AppError::Repository)` - Database error during insert
    pub async fn create(&self, form: CardForm) -> Result<Card, AppError> {
        self.validator.validate(&form)?;

        let card = self
            .repository
            .create(CreateCardParam::from(form))
            .await
            .map_err(AppError::repository("create"))?;

        tracing::debug!(card_id = card.id, "Created card");

        Ok(card)
    }

    /// Finds a card by ID.
    ///
    /// # Returns
    /// - `Ok(Card)` - The stored card
    /// - `Err(AppError::NotFound)` - No card exists with the ID
    /// - `Err(AppError::Repository)` - Database error during lookup
    pub async fn find(&self, id: i32) -> Result<Card, AppError> {
        self.repository
            .find(id)
            .await
            .map_err(not_found_or(id, "find"))
    }

    /// Replaces the mutable fields of an existing card.
    ///
    /// Reads the current card, overwrites its fields from the form and writes it back.
    /// The read and write are not wrapped in a transaction, so concurrent updates of
    /// the same card resolve as last writer wins.
    ///
    /// # Arguments
    /// - `id` - ID of the card to update
    /// - `form` - The complete replacement field set
    ///
    /// # Returns
    /// - `Ok(Card)` - The card as stored after the update
    /// - `Err(AppError::Validation)` - The form was rejected; nothing was read or stored
    /// - `Err(AppError::NotFound)` - No card exists with the ID
    /// - `Err(AppError::Repository)` - Database error during lookup or update
    pub async fn update(&self, id: i32, form: CardForm) -> Result<Card, AppError> {
        self.validator.validate(&form)?;

        let mut card = self
            .repository
            .find(id)
            .await
            .map_err(not_found_or(id, "find"))?;

        card.apply_form(form);

        let card = self
            .repository
            .update(id, &card)
            .await
            .map_err(not_found_or(id, "update"))?;

        tracing::debug!(card_id = card.id, "Updated card");

        Ok(card)
    }

    /// Deletes a card by ID.
    ///
    /// # Returns
    /// - `Ok(())` - The card was deleted
    /// - `Err(AppError::NotFound)` - No card exists with the ID
    /// - `Err(AppError::Repository)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.repository
            .delete(id)
            .await
            .map_err(not_found_or(id, "delete"))?;

        tracing::debug!(card_id = id, "Deleted card");

        Ok(())
    }
}

/// Maps `DbErr::RecordNotFound` to `AppError::NotFound` and wraps anything else
/// with the failing repository operation.
fn not_found_or(id: i32, operation: &'static str) -> impl FnOnce(DbErr) -> AppError {
    move |err| match err {
        DbErr::RecordNotFound(_) => AppError::NotFound(id.into()),
        source => AppError::repository(operation)(source),
    }
}
