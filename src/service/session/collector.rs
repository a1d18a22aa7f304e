//! Collector loop driving one scroll session.
//!
//! The loop waits for the owner's next button press or the idle timeout, applies the
//! pressed action to the equip instance, asks the frontend to redraw, and repeats.
//! Actions are handled strictly one at a time: the next press is not read until the
//! previous one has been applied and rendered.
//!
//! Whatever ends the loop (stop, timeout, a closed event stream or a failed render),
//! the registry entry is removed exactly once and the frontend gets a chance to
//! draw the final state. `spawn_session` additionally releases the entry when the
//! loop panics.

use rand::Rng;
use serenity::async_trait;
use std::fmt;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::error::AppError;
use crate::model::action::ScrollAction;
use crate::model::session::{ActionOutcome, ScrollRates, ScrollTally};
use crate::service::session::{EquipInstance, SessionKey, SessionRegistry};

/// Snapshot of a session handed to the frontend for drawing.
#[derive(Clone, Copy)]
pub struct SessionFrame<'a> {
    pub instance: &'a EquipInstance,
    pub tally: &'a ScrollTally,
    /// What the last action did; `None` when drawing the final state.
    pub outcome: Option<&'a ActionOutcome>,
}

/// Source of button presses and sink for redraws of one session.
///
/// The Discord implementation reads component interactions scoped to the session
/// message and owner; tests use scripted implementations.
#[async_trait]
pub trait SessionFrontend: Send {
    /// Whatever the frontend needs to answer a press (e.g. the interaction).
    type Event: Send;

    /// Waits for the owner's next action.
    ///
    /// # Returns
    /// - `Some((action, event))` - The owner pressed a session button
    /// - `None` - No further actions can arrive
    async fn next_action(&mut self) -> Option<(ScrollAction, Self::Event)>;

    /// Redraws the session in answer to `event`.
    async fn render(&mut self, event: Self::Event, frame: SessionFrame<'_>)
        -> Result<(), AppError>;

    /// Draws the final, non-interactive state once the session has ended.
    async fn finish(&mut self, frame: SessionFrame<'_>) -> Result<(), AppError>;
}

/// Settings shared by every session the bot runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectorSettings {
    pub rates: ScrollRates,
    /// Time without a button press after which the session ends.
    pub idle_timeout: Duration,
}

/// Why a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    Stopped,
    TimedOut,
    /// The frontend stopped delivering actions.
    Closed,
    /// Redrawing after an action failed.
    RenderFailed,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Stopped => "stopped",
            Self::TimedOut => "timed out",
            Self::Closed => "closed",
            Self::RenderFailed => "render failed",
        };
        f.write_str(reason)
    }
}

/// Final state of a finished session.
#[derive(Debug)]
pub struct SessionEnd {
    pub reason: EndReason,
    pub tally: ScrollTally,
    pub instance: EquipInstance,
}

/// Runs a session until it stops, times out or fails, then releases it.
///
/// The caller must already hold the registry entry for `key`; this function
/// removes it before returning, on every exit path that returns. Use
/// `spawn_session` to also cover a panicking frontend.
///
/// # Arguments
/// - `registry` - Registry holding the user's session entry
/// - `key` - Key issued when the session was registered
/// - `instance` - Equip being scrolled
/// - `settings` - Pass rates, roll mode and idle timeout
/// - `frontend` - Source of actions and target of redraws
/// - `rng` - Source of every random draw
///
/// # Returns
/// - `SessionEnd` - Why the session ended, its scoreboard and the final instance
pub async fn run_session<F, R>(
    registry: &SessionRegistry,
    key: SessionKey,
    mut instance: EquipInstance,
    settings: CollectorSettings,
    frontend: &mut F,
    rng: &mut R,
) -> SessionEnd
where
    F: SessionFrontend,
    R: Rng + Send,
{
    let user_id = key.user_id;
    let mut tally = ScrollTally::default();

    let reason = loop {
        let (action, event) =
            match tokio::time::timeout(settings.idle_timeout, frontend.next_action()).await {
                Ok(Some(next)) => next,
                Ok(None) => break EndReason::Closed,
                Err(_) => break EndReason::TimedOut,
            };

        let outcome = apply_action(&mut instance, action, &settings.rates, &mut tally, rng);

        let frame = SessionFrame {
            instance: &instance,
            tally: &tally,
            outcome: Some(&outcome),
        };
        if let Err(e) = frontend.render(event, frame).await {
            tracing::error!("Failed to render session of user {}: {}", user_id, e);
            break EndReason::RenderFailed;
        }

        if action == ScrollAction::Stop {
            break EndReason::Stopped;
        }
    };

    match registry.release(key).await {
        Some(handle) => {
            let duration = chrono::Utc::now() - handle.started_at;
            tracing::info!(
                "User {} ended {} session ({}) after {}s",
                user_id,
                handle.equip_code,
                reason,
                duration.num_seconds()
            );
        }
        None => tracing::warn!(
            "User {} ended a session ({}) with no registry entry",
            user_id,
            reason
        ),
    }

    let frame = SessionFrame {
        instance: &instance,
        tally: &tally,
        outcome: None,
    };
    if let Err(e) = frontend.finish(frame).await {
        tracing::error!("Failed to close session of user {}: {}", user_id, e);
    }

    SessionEnd {
        reason,
        tally,
        instance,
    }
}

/// Runs a session in a detached task.
///
/// The session loop runs in its own inner task supervised by an outer one. If the
/// loop panics (a frontend or renderer bug), the outer task still releases the
/// registry entry so the user is not locked out of new sessions.
///
/// # Returns
/// - `JoinHandle` resolving to `Some(SessionEnd)` when the loop returned, or `None`
///   when it panicked or was cancelled
pub fn spawn_session<F, R>(
    registry: SessionRegistry,
    key: SessionKey,
    instance: EquipInstance,
    settings: CollectorSettings,
    mut frontend: F,
    mut rng: R,
) -> JoinHandle<Option<SessionEnd>>
where
    F: SessionFrontend + 'static,
    R: Rng + Send + 'static,
{
    tokio::spawn(async move {
        let session_registry = registry.clone();
        let session = tokio::spawn(async move {
            run_session(
                &session_registry,
                key,
                instance,
                settings,
                &mut frontend,
                &mut rng,
            )
            .await
        });

        match session.await {
            Ok(end) => {
                tracing::debug!(
                    "Session of user {} finished: {} upgrades, {} restores, {} rerolls",
                    key.user_id,
                    end.tally.upgrade_scrolls,
                    end.tally.restore_scrolls,
                    end.tally.rerolls()
                );
                Some(end)
            }
            Err(e) => {
                tracing::error!("Session task of user {} aborted: {}", key.user_id, e);
                if registry.release(key).await.is_some() {
                    tracing::warn!(
                        "Released session of user {} left behind by aborted task",
                        key.user_id
                    );
                }
                None
            }
        }
    })
}

/// Applies one action to the instance and updates the scoreboard.
///
/// Scroll counters only move for attempts that actually run.
pub fn apply_action<R: Rng>(
    instance: &mut EquipInstance,
    action: ScrollAction,
    rates: &ScrollRates,
    tally: &mut ScrollTally,
    rng: &mut R,
) -> ActionOutcome {
    match action {
        ScrollAction::Upgrade => {
            if instance.can_upgrade() {
                tally.upgrade_scrolls += 1;
            }
            ActionOutcome::Upgrade(instance.attempt_upgrade(
                rates.upgrade_pass_rate,
                rates.mode,
                rng,
            ))
        }
        ScrollAction::Restore => {
            if instance.is_restorable() {
                tally.restore_scrolls += 1;
            }
            ActionOutcome::Restore {
                passed: instance.attempt_restore(rates.restore_pass_rate, rng),
            }
        }
        ScrollAction::Restart => {
            instance.restart(rng);
            tally.restarts += 1;
            ActionOutcome::Restarted
        }
        ScrollAction::Stop => ActionOutcome::Stopped,
    }
}
