use std::time::Duration;

use crate::error::{config::ConfigError, AppError};
use crate::util::parse::{parse_snowflake_from_string, parse_u64_from_string};

/// Idle time after which a scroll session ends on its own.
const DEFAULT_SESSION_IDLE_TIMEOUT_SECS: u64 = 600;

pub struct Config {
    pub discord_bot_token: String,

    /// Channel receiving command and guild-join audit messages.
    pub log_channel_id: Option<u64>,

    pub session_idle_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let log_channel_id = match std::env::var("LOG_CHANNEL_ID") {
            Ok(value) if !value.trim().is_empty() => Some(parse_snowflake_from_string(value)?),
            _ => None,
        };

        let session_idle_timeout = match std::env::var("SESSION_IDLE_TIMEOUT_SECS") {
            Ok(value) if !value.trim().is_empty() => parse_u64_from_string(value)?,
            _ => DEFAULT_SESSION_IDLE_TIMEOUT_SECS,
        };

        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            log_channel_id,
            session_idle_timeout: Duration::from_secs(session_idle_timeout),
        })
    }
}
