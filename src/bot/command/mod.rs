//! Slash commands.
//!
//! Each command module exposes its `NAME`, a `register` builder used when syncing
//! global commands, a detailed description for `/help`, and a `run` entry point.

pub mod cs;
pub mod help;
pub mod roll;

use serenity::all::{CommandInteraction, Context, CreateCommand, ResolvedOption, ResolvedValue};

use crate::error::AppError;
use crate::service::catalog::EquipCatalog;
use crate::state::AppState;

/// Name and short description of every command, sorted by name.
pub const COMMANDS: &[(&str, &str)] = &[
    (cs::NAME, cs::DESCRIPTION),
    (help::NAME, help::DESCRIPTION),
    (roll::NAME, roll::DESCRIPTION),
];

/// Builds the global command list.
///
/// # Arguments
/// - `catalog` - Equip catalog providing the `/cs` equip choices
pub fn register(catalog: &EquipCatalog) -> Vec<CreateCommand> {
    vec![cs::register(catalog), help::register(), roll::register()]
}

/// Detailed `/help` text for a command.
///
/// # Returns
/// - `Some(String)` - Description of the named command
/// - `None` - No command has this name
pub fn detailed_description(name: &str, catalog: &EquipCatalog) -> Option<String> {
    match name.trim_start_matches('/') {
        cs::NAME => Some(cs::detailed_description(catalog)),
        help::NAME => Some(help::detailed_description()),
        roll::NAME => Some(roll::detailed_description()),
        _ => None,
    }
}

/// Runs the slash command named in the interaction.
///
/// # Returns
/// - `Ok(())` - The command replied to the user
/// - `Err(AppError)` - The command failed; the caller replies with the error
pub async fn dispatch(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    match command.data.name.as_str() {
        cs::NAME => cs::run(state, ctx, command).await,
        help::NAME => help::run(state, ctx, command).await,
        roll::NAME => roll::run(ctx, command).await,
        other => Err(AppError::BadRequest(format!(
            "`/{}` is not a command I know.",
            other
        ))),
    }
}

fn string_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::String(value) if option.name == name => Some(value),
        _ => None,
    })
}

fn bool_option(options: &[ResolvedOption<'_>], name: &str) -> Option<bool> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::Boolean(value) if option.name == name => Some(value),
        _ => None,
    })
}

fn integer_option(options: &[ResolvedOption<'_>], name: &str) -> Option<i64> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::Integer(value) if option.name == name => Some(value),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the help table stays sorted by name.
    ///
    /// Expected: names in ascending order
    #[test]
    fn command_table_is_sorted() {
        let names: Vec<&str> = COMMANDS.iter().map(|(name, _)| *name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();

        assert_eq!(names, sorted);
    }

    /// Tests detailed description lookup.
    ///
    /// Expected: known names resolve with or without a leading slash
    #[test]
    fn detailed_description_accepts_slash_prefix() {
        let catalog = EquipCatalog::builtin();

        assert!(detailed_description("roll", &catalog).is_some());
        assert!(detailed_description("/cs", &catalog).is_some());
        assert!(detailed_description("rank", &catalog).is_none());
    }
}
