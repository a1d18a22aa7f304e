//! `/help`: command overview and per-command details.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::bot::command::{self, string_option, COMMANDS};
use crate::error::AppError;
use crate::service::catalog::EquipCatalog;
use crate::state::AppState;

pub const NAME: &str = "help";
pub const DESCRIPTION: &str = "Show more information about this bot.";

/// Introduction shown by `/help` and in the guild welcome message.
pub const ABOUT: &str = "ScrollBot simulates Chaos Scrolling your favourite equips. \
    Start a session with `/cs`, then slam, clean slate and restart with the buttons \
    until you hit the perfect item.\n\nUse `/help <command>` to learn more about a command.";

pub const EMBED_COLOR: u32 = 0xEDABFF;

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description(DESCRIPTION).add_option(
        CreateCommandOption::new(
            CommandOptionType::String,
            "command",
            "Which command do you need help with?",
        )
        .required(false),
    )
}

pub fn detailed_description() -> String {
    "**Name**: `help`\n\
     **Syntax:** `/help [command]`\n\n\
     **Example usage:**\n`/help`\n`/help cs`\n\n\
     **Description:**\n\
     Shows more information about ScrollBot.\n\n\
     **Arguments:**\n\
     `[command]`: *(optional)* Show a detailed description for any particular command."
        .to_string()
}

/// Reply for `/help command:<name>`.
///
/// Unknown names get a list of the commands that do exist.
pub fn command_help(name: &str, catalog: &EquipCatalog) -> String {
    command::detailed_description(name, catalog).unwrap_or_else(|| {
        format!(
            "`{}` command doesn't exist!\n\nTry searching for one of the following:\n`{}`",
            name,
            command_names().join("`, `")
        )
    })
}

/// Description of the overview embed listing every command.
pub fn overview() -> String {
    let commands = COMMANDS
        .iter()
        .map(|(name, description)| format!("`/{}` - {}", name, description))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n\n**Commands**\n{}", ABOUT, commands)
}

fn command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|(name, _)| *name).collect()
}

pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let options = command.data.options();

    let message = match string_option(&options, "command") {
        Some(name) => {
            CreateInteractionResponseMessage::new().content(command_help(name, &state.catalog))
        }
        None => CreateInteractionResponseMessage::new().embed(
            CreateEmbed::new()
                .color(EMBED_COLOR)
                .title("ScrollBot")
                .description(overview()),
        ),
    };

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests help for a known command.
    ///
    /// Expected: the command's detailed description
    #[test]
    fn known_command_shows_details() {
        let catalog = EquipCatalog::builtin();

        let reply = command_help("roll", &catalog);

        assert!(reply.starts_with("**Name**: `roll`"));
    }

    /// Tests help for an unknown command.
    ///
    /// Expected: not-found text listing existing commands
    #[test]
    fn unknown_command_lists_alternatives() {
        let catalog = EquipCatalog::builtin();

        let reply = command_help("rank", &catalog);

        assert!(reply.starts_with("`rank` command doesn't exist!"));
        assert!(reply.ends_with("`cs`, `help`, `roll`"));
    }

    #[test]
    fn overview_lists_every_command() {
        let text = overview();

        for (name, description) in COMMANDS {
            assert!(text.contains(&format!("`/{}` - {}", name, description)));
        }
    }
}
