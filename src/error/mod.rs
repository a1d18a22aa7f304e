//! Error types and user-facing reply mapping.
//!
//! This module provides the bot's error hierarchy. The `AppError` enum is the
//! top-level error type that wraps domain-specific errors; `AppError::user_message`
//! turns any of them into the text shown to the user who ran the command, keeping
//! internal details in the logs.

pub mod config;
pub mod internal;
pub mod session;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, session::SessionError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants
/// use `#[from]` for automatic conversion so handlers can propagate with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Scroll session could not be started.
    ///
    /// Unknown equips are explained to the user; see `user_message`.
    #[error(transparent)]
    SessionErr(#[from] SessionError),

    /// Unexpected internal failure.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Raised when sending or editing a message, or
    /// answering an interaction, fails.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Invalid command input.
    ///
    /// # Fields
    /// - Message describing what was invalid about the input
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// Generic reply for errors whose details must stay server-side.
pub const GENERIC_ERROR_MESSAGE: &str =
    "Something went wrong while running this command. Please try again later.";

impl AppError {
    /// Converts the error into the message shown to the user.
    ///
    /// Validation errors and unknown equips describe themselves. Duplicate sessions
    /// are answered by `/cs` itself with a public reply. Every other error is logged
    /// with full details and replaced by a generic message.
    ///
    /// # Returns
    /// - `String` - Reply text for the invoking user
    pub fn user_message(&self) -> String {
        match self {
            Self::SessionErr(SessionError::UnknownEquipCode(code)) => {
                format!("`{}` is not a supported equip.", code)
            }
            Self::BadRequest(msg) => msg.clone(),
            err => {
                tracing::error!("{}", err);
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_equip_names_the_code() {
        let err = AppError::from(SessionError::UnknownEquipCode("nope".to_string()));
        assert_eq!(err.user_message(), "`nope` is not a supported equip.");
    }

    #[test]
    fn config_errors_are_hidden_from_users() {
        let err = AppError::from(ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()));
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }
}
