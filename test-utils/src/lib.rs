//! Cards Test Utils
//!
//! Provides shared testing utilities for building unit and integration tests for the cards
//! service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and factories for inserting card rows.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn finds_card() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_card_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let card = factory::card::create_card(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
