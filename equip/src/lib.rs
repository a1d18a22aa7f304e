//! Equip catalog data model.
//!
//! Static definitions for every equip the scroll simulator supports. A definition
//! is never mutated once the process has started; sessions copy the base stats
//! out of it and work on their own [`StatBlock`].
//!
//! # Modules
//!
//! - `stat` - The eight stat kinds and the fixed-size block holding their values
//! - `definition` - Equip definitions, level-up tables and crafting crystals
//! - `catalog` - The built-in equip table

pub mod catalog;
pub mod definition;
pub mod prelude;
pub mod stat;
