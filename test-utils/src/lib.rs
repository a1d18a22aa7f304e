//! Scrollbot Test Utils
//!
//! Shared helpers for unit tests across the scrollbot workspace. Tests that touch the
//! scroll simulator need equip definitions with precise stats, reproducible randomness,
//! and now and then a Discord model object; this crate provides all three.
//!
//! # Overview
//!
//! - **builder**: Fluent `EquipBuilder` for one-off equip definitions
//! - **fixture**: Ready-made definitions covering the interesting equip shapes
//! - **rng**: Seeded random number generators
//! - **serenity**: Serenity model factories built from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use equip::prelude::Stat;
//! use test_utils::{builder::EquipBuilder, rng};
//!
//! #[test]
//! fn upgrades_weapon_attack() {
//!     let definition = EquipBuilder::new("cape")
//!         .slots(7)
//!         .stat(Stat::WeaponAttack, 5)
//!         .build();
//!     let mut rng = rng::seeded(7);
//!     // Construct a session and scroll it...
//! }
//! ```

pub mod builder;
pub mod fixture;
pub mod rng;
pub mod serenity;
