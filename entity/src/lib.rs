//! SeaORM entities for the cards database.

pub mod card;
pub mod prelude;
