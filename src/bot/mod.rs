//! Discord bot integration: gateway client, event handlers and slash commands.
//!
//! The bot answers three slash commands (`/cs`, `/roll`, `/help`). `/cs` starts an
//! interactive scroll session whose buttons are collected by a detached task per
//! session; the session logic itself lives in `service::session` and only reaches
//! Discord through the `SessionFrontend` implemented in `frontend`.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability and join events, cache guild names
//! - `GUILD_MESSAGES` - Receive component interactions on session messages
//!
//! Interactions arrive regardless of intents; no privileged intent is needed.

pub mod audit;
pub mod command;
pub mod frontend;
pub mod handler;
pub mod render;
pub mod start;
