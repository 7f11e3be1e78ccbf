//! Card factory for creating test card entities.
//!
//! Provides a builder with sensible defaults so tests only spell out the
//! fields they care about.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test cards with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::card::CardFactory;
///
/// let card = CardFactory::new(&db)
///     .word("do")
///     .translation("делать")
///     .build()
///     .await?;
/// ```
pub struct CardFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    word: String,
    transcription: String,
    translation: String,
    created_at: DateTime<Utc>,
}

impl<'a> CardFactory<'a> {
    /// Creates a new CardFactory with default values.
    ///
    /// Defaults:
    /// - user_id: `1`
    /// - word: `"word {n}"` where n is auto-incremented
    /// - transcription: `"transcription {n}"`
    /// - translation: `"translation {n}"`
    /// - created_at: current time
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: 1,
            word: format!("word {}", id),
            transcription: format!("transcription {}", id),
            translation: format!("translation {}", id),
            created_at: Utc::now(),
        }
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn word(mut self, word: impl Into<String>) -> Self {
        self.word = word.into();
        self
    }

    pub fn transcription(mut self, transcription: impl Into<String>) -> Self {
        self.transcription = transcription.into();
        self
    }

    pub fn translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = translation.into();
        self
    }

    /// Sets both `created_at` and `updated_at`.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the card entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::card::Model)` - Created card entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::card::Model, DbErr> {
        entity::card::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            word: ActiveValue::Set(self.word),
            transcription: ActiveValue::Set(self.transcription),
            translation: ActiveValue::Set(self.translation),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a card with default values.
///
/// Shorthand for `CardFactory::new(db).build().await`.
pub async fn create_card(db: &DatabaseConnection) -> Result<entity::card::Model, DbErr> {
    CardFactory::new(db).build().await
}
