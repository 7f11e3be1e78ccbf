//! Domain models for card operations.
//!
//! These types sit between the controller DTOs and the SeaORM entity. Conversions
//! to and from the entity happen at the repository boundary so entity models never
//! leak into the service or controller layers.

use chrono::{DateTime, Utc};

use crate::model::card::{CardDto, CardFormDto};

/// A persisted flashcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Identifier assigned by the store on creation.
    pub id: i32,
    /// Owning user, not checked against any user table.
    pub user_id: i32,
    pub word: String,
    pub transcription: String,
    pub translation: String,
    /// Set once on creation.
    pub created_at: DateTime<Utc>,
    /// Advanced on every successful update.
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Overwrites the client-mutable fields with the values from `form`.
    ///
    /// `id` and both timestamps are left untouched.
    pub fn apply_form(&mut self, form: CardForm) {
        self.user_id = form.user_id;
        self.word = form.word;
        self.transcription = form.transcription;
        self.translation = form.translation;
    }

    pub fn into_dto(self) -> CardDto {
        CardDto {
            id: self.id,
            user_id: self.user_id,
            word: self.word,
            transcription: self.transcription,
            translation: self.translation,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a domain card.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    pub fn from_entity(entity: entity::card::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            word: entity.word,
            transcription: entity.transcription,
            translation: entity.translation,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// The client-mutable card fields, submitted on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardForm {
    pub user_id: i32,
    pub word: String,
    pub transcription: String,
    pub translation: String,
}

impl From<CardFormDto> for CardForm {
    fn from(dto: CardFormDto) -> Self {
        Self {
            user_id: dto.user_id,
            word: dto.word,
            transcription: dto.transcription,
            translation: dto.translation,
        }
    }
}

/// Parameters for inserting a new card.
///
/// Carries no id or timestamps; the repository assigns those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCardParam {
    pub user_id: i32,
    pub word: String,
    pub transcription: String,
    pub translation: String,
}

impl From<CardForm> for CreateCardParam {
    fn from(form: CardForm) -> Self {
        Self {
            user_id: form.user_id,
            word: form.word,
            transcription: form.transcription,
            translation: form.translation,
        }
    }
}
