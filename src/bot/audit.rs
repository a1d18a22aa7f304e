//! Command and guild audit trail.
//!
//! Every command invocation is logged locally; successful ones and guild joins are
//! also mirrored to the configured log channel. Posting is fire-and-forget so a slow
//! or missing log channel never delays a reply.

use serenity::all::{
    ChannelId, CommandDataOptionValue, CommandInteraction, Context, CreateAllowedMentions,
    CreateMessage, Http,
};
use std::sync::Arc;

/// Posts `content` to the log channel in a detached task.
///
/// Does nothing when no log channel is configured. Mentions in `content` are not
/// resolved so logged user input can't ping anyone.
///
/// # Arguments
/// - `http` - Discord HTTP client
/// - `channel_id` - Configured log channel, if any
/// - `content` - Message text
pub fn post(http: &Arc<Http>, channel_id: Option<ChannelId>, content: String) {
    let Some(channel_id) = channel_id else {
        return;
    };

    let http = Arc::clone(http);
    tokio::spawn(async move {
        let message = CreateMessage::new()
            .content(content)
            .allowed_mentions(CreateAllowedMentions::new());

        if let Err(e) = channel_id.send_message(&http, message).await {
            tracing::error!("Failed to post to log channel {}: {}", channel_id, e);
        }
    });
}

/// Who ran which command where, for log lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// `guild #channel`, or `DM`.
    pub location: String,
    pub user: String,
    pub command: String,
    /// Option name and rendered value pairs, in the order they were sent.
    pub options: Vec<(String, String)>,
}

impl Invocation {
    /// Captures the invocation details of a slash command.
    ///
    /// Guild names come from the cache; the guild ID is used when the guild is not
    /// cached.
    pub fn from_command(ctx: &Context, command: &CommandInteraction) -> Self {
        let location = match command.guild_id {
            Some(guild_id) => {
                let guild = guild_id
                    .name(&ctx.cache)
                    .unwrap_or_else(|| guild_id.to_string());
                let channel = command
                    .channel
                    .as_ref()
                    .and_then(|channel| channel.name.clone())
                    .unwrap_or_else(|| command.channel_id.to_string());
                format!("{} #{}", guild, channel)
            }
            None => "DM".to_string(),
        };

        let options = command
            .data
            .options
            .iter()
            .map(|option| (option.name.clone(), render_option_value(&option.value)))
            .collect();

        Self {
            location,
            user: command.user.tag(),
            command: command.data.name.clone(),
            options,
        }
    }

    /// `[location] user: /command`
    pub fn summary(&self) -> String {
        format!("[{}] {}: /{}", self.location, self.user, self.command)
    }

    /// `[location] user: /command name:value ...`
    pub fn detailed(&self) -> String {
        self.options
            .iter()
            .fold(self.summary(), |line, (name, value)| {
                format!("{} {}:{}", line, name, value)
            })
    }
}

fn render_option_value(value: &CommandDataOptionValue) -> String {
    match value {
        CommandDataOptionValue::String(value) => value.clone(),
        CommandDataOptionValue::Integer(value) => value.to_string(),
        CommandDataOptionValue::Boolean(value) => value.to_string(),
        CommandDataOptionValue::Number(value) => value.to_string(),
        _ => "?".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(options: Vec<(&str, &str)>) -> Invocation {
        Invocation {
            location: "Scroll Hall #bot-spam".to_string(),
            user: "slammer".to_string(),
            command: "cs".to_string(),
            options: options
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }

    /// Tests the run log line.
    ///
    /// Expected: location, user and command only
    #[test]
    fn summary_omits_options() {
        let invocation = invocation(vec![("equip", "bfc")]);

        assert_eq!(invocation.summary(), "[Scroll Hall #bot-spam] slammer: /cs");
    }

    /// Tests the success log line.
    ///
    /// Expected: options appended as name:value in order
    #[test]
    fn detailed_lists_options_in_order() {
        let invocation = invocation(vec![("equip", "bfc"), ("pass", "true")]);

        assert_eq!(
            invocation.detailed(),
            "[Scroll Hall #bot-spam] slammer: /cs equip:bfc pass:true"
        );
    }

    /// Tests the success log line of a command without options.
    ///
    /// Expected: same as summary
    #[test]
    fn detailed_without_options_matches_summary() {
        let invocation = invocation(Vec::new());

        assert_eq!(invocation.detailed(), invocation.summary());
    }
}
