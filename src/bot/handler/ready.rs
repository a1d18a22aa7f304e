//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway. The handler:
//! - Logs connection information
//! - Registers the global slash commands
//! - Starts rotating the bot's presence

use rand::Rng;
use serenity::all::{ActivityData, Command, Context, Ready};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::bot::command;
use crate::state::AppState;

/// Time between presence changes.
const ACTIVITY_ROTATION_INTERVAL: Duration = Duration::from_secs(30);

/// Presence shown under the bot's name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Playing(&'static str),
    Listening(&'static str),
    Watching(&'static str),
}

impl Presence {
    fn activity(self) -> ActivityData {
        match self {
            Self::Playing(name) => ActivityData::playing(name),
            Self::Listening(name) => ActivityData::listening(name),
            Self::Watching(name) => ActivityData::watching(name),
        }
    }
}

pub const PRESENCES: &[Presence] = &[
    Presence::Playing("/cs"),
    Presence::Playing("with Chaos Scrolls"),
    Presence::Watching("/help"),
    Presence::Watching("all of you slam"),
    Presence::Listening("/help"),
    Presence::Listening("scrolls boom"),
];

/// Picks the next presence uniformly at random.
pub fn pick_presence<R: Rng>(rng: &mut R) -> Presence {
    PRESENCES[rng.random_range(0..PRESENCES.len())]
}

/// Handles the ready event when the bot connects to Discord.
///
/// This event fires on every gateway connection, including reconnects. Commands are
/// re-registered each time; the presence rotation is only started once per process.
///
/// # Arguments
/// - `state` - Application state providing the equip catalog for `/cs` choices
/// - `activity_started` - Whether the presence rotation already runs
/// - `ctx` - Discord context for registering commands and setting presence
/// - `ready` - Ready event data containing bot user and guild information
pub async fn handle_ready(
    state: &AppState,
    activity_started: &AtomicBool,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!("{} is connected to Discord", ready.user.name);
    tracing::info!("Currently active in {} guilds", ready.guilds.len());
    for guild in &ready.guilds {
        tracing::debug!("Active in guild {}", guild.id);
    }

    match Command::set_global_commands(&ctx.http, command::register(&state.catalog)).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }

    if activity_started.swap(true, Ordering::SeqCst) {
        return;
    }

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(ACTIVITY_ROTATION_INTERVAL);
        loop {
            interval.tick().await;
            let presence = pick_presence(&mut rand::rng());
            ctx.set_activity(Some(presence.activity()));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::rng;

    #[test]
    fn picked_presence_comes_from_list() {
        let mut rng = rng::seeded(5);

        for _ in 0..50 {
            assert!(PRESENCES.contains(&pick_presence(&mut rng)));
        }
    }
}
