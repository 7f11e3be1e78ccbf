//! Card data repository for database operations.
//!
//! Defines the `CardRepository` port used by the service layer and its SeaORM
//! implementation. Every operation reports a missing row as
//! `DbErr::RecordNotFound` so callers can tell it apart from other failures.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::card::{Card, CreateCardParam};

/// Persistence operations for cards, keyed by card ID.
#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Inserts a new card, returning it with its assigned ID and timestamps.
    async fn create(&self, param: CreateCardParam) -> Result<Card, DbErr>;

    /// Finds a card by ID.
    ///
    /// # Returns
    /// - `Ok(Card)` - The stored card
    /// - `Err(DbErr::RecordNotFound)` - No card exists with the ID
    /// - `Err(DbErr)` - Any other database failure
    async fn find(&self, id: i32) -> Result<Card, DbErr>;

    /// Persists the mutable fields of `card` under `id` and advances `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Card)` - The card as stored after the update
    /// - `Err(DbErr::RecordNotFound)` - No card exists with the ID
    /// - `Err(DbErr)` - Any other database failure
    async fn update(&self, id: i32, card: &Card) -> Result<Card, DbErr>;

    /// Deletes a card by ID.
    ///
    /// # Returns
    /// - `Ok(())` - The card was deleted
    /// - `Err(DbErr::RecordNotFound)` - No card exists with the ID
    /// - `Err(DbErr)` - Any other database failure
    async fn delete(&self, id: i32) -> Result<(), DbErr>;
}

/// Builds the error every repository operation returns for a missing card.
pub fn card_not_found(id: i32) -> DbErr {
    DbErr::RecordNotFound(format!("Card with id {} not found", id))
}

/// Returns the timestamp to store on update.
///
/// Wall clock time unless the clock has not moved past the previous value, in
/// which case the previous value plus one microsecond.
pub fn next_updated_at(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    let floor = previous + Duration::microseconds(1);

    if now > floor {
        now
    } else {
        floor
    }
}

/// SeaORM-backed card repository.
///
/// Holds a clone of the connection pool, so it can be shared between request tasks.
#[derive(Clone)]
pub struct SeaOrmCardRepository {
    db: DatabaseConnection,
}

impl SeaOrmCardRepository {
    /// Creates a new SeaOrmCardRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CardRepository for SeaOrmCardRepository {
    async fn create(&self, param: CreateCardParam) -> Result<Card, DbErr> {
        let now = Utc::now();

        let entity = entity::card::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            word: ActiveValue::Set(param.word),
            transcription: ActiveValue::Set(param.transcription),
            translation: ActiveValue::Set(param.translation),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(Card::from_entity(entity))
    }

    async fn find(&self, id: i32) -> Result<Card, DbErr> {
        entity::prelude::Card::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Card::from_entity)
            .ok_or_else(|| card_not_found(id))
    }

    async fn update(&self, id: i32, card: &Card) -> Result<Card, DbErr> {
        let active_model = entity::card::ActiveModel {
            id: ActiveValue::Unchanged(id),
            user_id: ActiveValue::Set(card.user_id),
            word: ActiveValue::Set(card.word.clone()),
            transcription: ActiveValue::Set(card.transcription.clone()),
            translation: ActiveValue::Set(card.translation.clone()),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::Set(next_updated_at(card.updated_at)),
        };

        match active_model.update(&self.db).await {
            Ok(entity) => Ok(Card::from_entity(entity)),
            Err(DbErr::RecordNotUpdated) => Err(card_not_found(id)),
            Err(err) => Err(err),
        }
    }

    async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let result = entity::prelude::Card::delete_by_id(id)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(card_not_found(id));
        }

        Ok(())
    }
}
