//! Scroll session engine.
//!
//! A session starts when a user runs `/cs`: the registry reserves the user's single
//! session slot, an `EquipInstance` is built from the catalog definition, and the
//! collector loop then feeds button presses into the instance until the user stops
//! or goes idle. The loop always releases the registry entry on its way out.

pub mod collector;
pub mod instance;
pub mod registry;

#[cfg(test)]
mod test;

pub use collector::{
    spawn_session, CollectorSettings, EndReason, SessionEnd, SessionFrame, SessionFrontend,
};
pub use instance::EquipInstance;
pub use registry::{SessionHandle, SessionKey, SessionRegistry};
