//! Test factories for Serenity model objects.
//!
//! Serenity models have private or non-exhaustive constructors, so these factories
//! deserialize JSON shaped like Discord's API payloads.
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects

pub mod user;

pub use user::create_test_user;
