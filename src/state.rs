//! Application state shared across all event handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources the
//! Discord handlers need. The state is built once during startup and cloned into the
//! event handler and every spawned session task.
//!
//! The state includes:
//! - Equip catalog offered by `/cs`
//! - Session registry enforcing one live session per user
//! - Session idle timeout and log channel from configuration

use serenity::all::ChannelId;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::service::catalog::EquipCatalog;
use crate::service::session::SessionRegistry;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `Arc<EquipCatalog>` is a reference-counted pointer to immutable data
/// - `SessionRegistry` wraps an `Arc` internally
/// - `Duration` and `Option<ChannelId>` are `Copy`
#[derive(Clone)]
pub struct AppState {
    /// Equip definitions users can scroll.
    pub catalog: Arc<EquipCatalog>,

    /// Live scroll sessions keyed by Discord user ID.
    ///
    /// The only mutable state shared between sessions.
    pub sessions: SessionRegistry,

    /// Time without a button press after which a session ends.
    pub session_idle_timeout: Duration,

    /// Channel receiving command and guild-join audit messages, if configured.
    pub log_channel_id: Option<ChannelId>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `catalog` - Equip catalog
    /// - `sessions` - Session registry, usually empty at startup
    /// - `config` - Application configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(catalog: EquipCatalog, sessions: SessionRegistry, config: &Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions,
            session_idle_timeout: config.session_idle_timeout,
            log_channel_id: config.log_channel_id.map(ChannelId::new),
        }
    }
}
