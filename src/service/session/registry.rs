//! Process-wide registry of live scroll sessions.
//!
//! Each user owns at most one session at a time. The registry is the only state
//! shared between sessions; it lives in `AppState` and is cloned into every
//! handler, so tests can create isolated registries.

use chrono::{DateTime, Utc};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::session::SessionError;

/// Identifies one registered session of one user.
///
/// Returned by `SessionRegistry::start`. Releasing through the key only removes
/// the entry it was issued for, never a later session of the same user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub user_id: u64,
    pub session_id: u64,
}

/// Registry entry describing a user's live session.
///
/// The equip instance itself is owned by the session's collector task; the entry
/// refers to it through `session_id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionHandle {
    pub session_id: u64,
    /// Catalog code of the equip being scrolled.
    pub equip_code: String,
    /// Link to the message hosting the session.
    ///
    /// `None` between reserving the entry and posting the first reply.
    pub location: Option<String>,
    pub started_at: DateTime<Utc>,
}

/// Registry mapping Discord user IDs to their live session.
///
/// Cheap to clone; clones share the same map. Every operation takes the lock once,
/// so checking for an existing entry and inserting a new one is a single atomic
/// step and two simultaneous starts for one user cannot both succeed.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<u64, SessionHandle>>>,
    next_session_id: Arc<AtomicU64>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new session for `user_id`.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the session owner
    /// - `equip_code` - Catalog code of the equip being scrolled
    ///
    /// # Returns
    /// - `Ok(SessionKey)` - The entry was inserted; the key releases it
    /// - `Err(SessionError::DuplicateSession)` - The user already has a session; the
    ///   existing entry is untouched and its location is returned
    pub async fn start(
        &self,
        user_id: u64,
        equip_code: impl Into<String>,
    ) -> Result<SessionKey, SessionError> {
        let equip_code = equip_code.into();
        let mut sessions = self.sessions.write().await;

        match sessions.entry(user_id) {
            Entry::Occupied(existing) => {
                tracing::warn!(
                    "Prevented user {} from starting a new session ({} already active)",
                    user_id,
                    existing.get().equip_code
                );
                Err(SessionError::DuplicateSession {
                    location: existing.get().location.clone(),
                })
            }
            Entry::Vacant(slot) => {
                let session_id = self.next_session_id.fetch_add(1, Ordering::Relaxed);
                tracing::info!("User {} started a {} session", user_id, equip_code);
                slot.insert(SessionHandle {
                    session_id,
                    equip_code,
                    location: None,
                    started_at: Utc::now(),
                });
                Ok(SessionKey {
                    user_id,
                    session_id,
                })
            }
        }
    }

    /// Records where a registered session is displayed.
    ///
    /// # Returns
    /// - `true` - The user's entry was updated
    /// - `false` - The user has no entry (the session already ended)
    pub async fn attach_location(&self, user_id: u64, location: String) -> bool {
        match self.sessions.write().await.get_mut(&user_id) {
            Some(handle) => {
                handle.location = Some(location);
                true
            }
            None => false,
        }
    }

    /// Removes the entry issued for `key`.
    ///
    /// Releasing twice, or after the user has moved on to a newer session, is not
    /// an error and leaves the registry unchanged; the return value tells the cases
    /// apart for logging.
    ///
    /// # Returns
    /// - `Some(SessionHandle)` - The removed entry
    /// - `None` - No entry for this session remained
    pub async fn release(&self, key: SessionKey) -> Option<SessionHandle> {
        let mut sessions = self.sessions.write().await;

        match sessions.entry(key.user_id) {
            Entry::Occupied(entry) if entry.get().session_id == key.session_id => {
                Some(entry.remove())
            }
            _ => None,
        }
    }

    pub async fn lookup(&self, user_id: u64) -> Option<SessionHandle> {
        self.sessions.read().await.get(&user_id).cloned()
    }

    /// Number of live sessions across all users.
    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
