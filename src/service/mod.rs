//! Business logic of the scroll simulator.
//!
//! Services sit between the Discord glue in `bot/` and the domain models in
//! `model/`. None of them talk to Discord directly: the collector loop drives a
//! `SessionFrontend` the bot layer implements, which keeps the whole session
//! lifecycle testable without a gateway connection.
//!
//! - `catalog` - Read-only lookup over the equip definitions
//! - `session` - Equip instances, the session registry and the collector loop

pub mod catalog;
pub mod session;
