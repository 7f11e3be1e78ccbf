//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let card = factory::card::create_card(&db).await?;
//!
//! let card = factory::card::CardFactory::new(&db)
//!     .word("pitfall")
//!     .user_id(3)
//!     .build()
//!     .await?;
//! ```

pub mod card;
pub mod helpers;

pub use card::create_card;
