//! Domain models for the scroll simulator.
//!
//! - `session` - Session state, upgrade outcomes and the per-session scoreboard
//! - `action` - The closed set of button actions a session reacts to

pub mod action;
pub mod session;
