pub use super::card::Entity as Card;
