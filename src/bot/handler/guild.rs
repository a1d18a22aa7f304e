//! Guild event handler.
//!
//! `guild_create` fires on startup for every guild the bot is already in, after
//! outages, and when the bot joins a new guild. Only the last case is acted on:
//! the join is logged and the guild's system channel gets a welcome message.

use serenity::all::{
    Context, CreateEmbed, CreateEmbedFooter, CreateMessage, Guild, GuildId, Timestamp,
};

use crate::bot::audit;
use crate::bot::command::help;
use crate::state::AppState;

/// Welcome card posted to a newly joined guild.
pub fn welcome_embed(guild_name: &str, guild_id: GuildId) -> CreateEmbed {
    CreateEmbed::new()
        .color(help::EMBED_COLOR)
        .title("ScrollBot")
        .description(help::ABOUT)
        .footer(CreateEmbedFooter::new(format!(
            "Added to {} (id: {})",
            guild_name, guild_id
        )))
        .timestamp(Timestamp::now())
}

/// Handles the guild_create event.
///
/// # Arguments
/// - `state` - Application state providing the log channel
/// - `ctx` - Discord context for sending messages
/// - `guild` - Guild data from Discord
/// - `is_new` - `Some(true)` when the bot just joined this guild
pub async fn handle_guild_create(
    state: &AppState,
    ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    if is_new != Some(true) {
        tracing::debug!("Guild available: {} ({})", guild.name, guild.id);
        return;
    }

    let log = format!("Added to new guild: {} ({})", guild.name, guild.id);
    tracing::info!("{}", log);
    audit::post(&ctx.http, state.log_channel_id, log);

    let Some(channel_id) = guild.system_channel_id else {
        return;
    };

    let message = CreateMessage::new().embed(welcome_embed(&guild.name, guild.id));
    if let Err(e) = channel_id.send_message(&ctx.http, message).await {
        tracing::error!(
            "Failed to send welcome message to guild {} ({}): {}",
            guild.name,
            guild.id,
            e
        );
    }
}
