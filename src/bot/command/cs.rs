//! `/cs`: interactive Chaos Scroll session on a catalog equip.
//!
//! The command reserves the user's registry entry before replying, so two
//! simultaneous `/cs` calls from one user can't both open a session. The session
//! itself runs in a detached task started by `spawn_session`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseMessage, UserId,
};

use crate::bot::command::{bool_option, string_option};
use crate::bot::frontend::DiscordFrontend;
use crate::bot::render::{self, SessionOwner};
use crate::error::{session::SessionError, AppError};
use crate::model::session::{
    ScrollRates, UpgradeMode, DEFAULT_UPGRADE_PASS_RATE, GUARANTEED_PASS_RATE, RESTORE_PASS_RATE,
};
use crate::service::catalog::EquipCatalog;
use crate::service::session::{spawn_session, CollectorSettings, EquipInstance};
use crate::state::AppState;

pub const NAME: &str = "cs";
pub const DESCRIPTION: &str = "Chaos Scroll simulator; only selected equips supported.";

pub fn register(catalog: &EquipCatalog) -> CreateCommand {
    let equip = catalog.choices().fold(
        CreateCommandOption::new(
            CommandOptionType::String,
            "equip",
            "Choose an equipment to scroll",
        )
        .required(true),
        |option, choice| option.add_string_choice(choice.name, choice.code),
    );

    CreateCommand::new(NAME)
        .description(DESCRIPTION)
        .add_option(equip)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Boolean,
                "pass",
                "set success rate to 100%",
            )
            .required(false),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Boolean,
                "goodness",
                "use Chaos Scrolls of Goodness (stats never go down)",
            )
            .required(false),
        )
}

pub fn detailed_description(catalog: &EquipCatalog) -> String {
    let equips = catalog
        .choices()
        .map(|choice| format!("{} {}", choice.emoji, choice.name))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "**Name**: `/cs`\n\
         **Syntax:** `/cs <equip> [pass] [goodness]`\n\n\
         **Example usage:**\n`/cs Blackfist Cloak True`\n`/cs Angelic Blessing`\n\n\
         **Description:**\n\
         Simulate a Chaos Scroll session. By default, CS is simulated to have {upgrade}% success rate; \
         you will need to CSS {restore}% the failed slots. You can skip this check by setting `pass` to `True`.\n\n\
         **Arguments:**\n\
         `<equip>`: *(required)* Any of the following preset equips.\n{equips}\n\n\
         `[pass]`: *(optional)* If set to true, the **{upgrade}% check will be ignored**. Useful if you want to \
         simulate only the stat-rolling aspect of Chaos Scrolls and ignore the passing RNG.\n\n\
         `[goodness]`: *(optional)* If set to true, every passed scroll adds 1 to 5 to each stat instead of -5 to 5.",
        upgrade = DEFAULT_UPGRADE_PASS_RATE,
        restore = RESTORE_PASS_RATE,
        equips = equips,
    )
}

/// Validated `/cs` options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsRequest {
    pub equip_code: String,
    pub rates: ScrollRates,
}

impl CsRequest {
    /// Builds the session rates from the command options.
    ///
    /// # Returns
    /// - `Ok(CsRequest)` - Equip code present
    /// - `Err(AppError::BadRequest)` - The required `equip` option is missing
    pub fn new(
        equip: Option<&str>,
        pass: Option<bool>,
        goodness: Option<bool>,
    ) -> Result<Self, AppError> {
        let equip_code = equip.map(str::to_string).ok_or_else(|| {
            AppError::BadRequest("Please choose an equip to scroll.".to_string())
        })?;

        let rates = ScrollRates {
            upgrade_pass_rate: if pass.unwrap_or(false) {
                GUARANTEED_PASS_RATE
            } else {
                DEFAULT_UPGRADE_PASS_RATE
            },
            restore_pass_rate: RESTORE_PASS_RATE,
            mode: if goodness.unwrap_or(false) {
                UpgradeMode::Aggressive
            } else {
                UpgradeMode::Standard
            },
        };

        Ok(Self { equip_code, rates })
    }
}

/// Public reply for a user who already has a live session.
pub fn duplicate_session_reply(user_id: UserId, location: Option<&str>) -> String {
    match location {
        Some(url) => format!(
            "<@{}>, you have an active session [here](<{}>).\nPlease click **Stop** to end it before starting a new **/cs** session.",
            user_id, url
        ),
        None => format!(
            "<@{}>, your previous session is still starting.\nPlease click **Stop** on it before starting a new **/cs** session.",
            user_id
        ),
    }
}

pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let options = command.data.options();
    let request = CsRequest::new(
        string_option(&options, "equip"),
        bool_option(&options, "pass"),
        bool_option(&options, "goodness"),
    )?;

    let definition = state.catalog.get(&request.equip_code)?.clone();
    let user_id = command.user.id;

    let key = match state.sessions.start(user_id.get(), definition.code).await {
        Ok(key) => key,
        Err(SessionError::DuplicateSession { location }) => {
            let reply = CreateInteractionResponseMessage::new()
                .content(duplicate_session_reply(user_id, location.as_deref()));
            command
                .create_response(&ctx.http, CreateInteractionResponse::Message(reply))
                .await?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let mut rng = StdRng::from_os_rng();
    let instance = EquipInstance::new(definition, &mut rng);

    let nick = command
        .member
        .as_ref()
        .and_then(|member| member.nick.as_deref());
    let owner = SessionOwner::new(&command.user, nick);

    let opening = CreateInteractionResponse::Message(render::opening_message(&instance, &owner));
    let message = match command.create_response(&ctx.http, opening).await {
        Ok(()) => command.get_response(&ctx.http).await,
        Err(e) => Err(e),
    };
    let message = match message {
        Ok(message) => message,
        Err(e) => {
            state.sessions.release(key).await;
            return Err(e.into());
        }
    };

    state
        .sessions
        .attach_location(user_id.get(), message.link())
        .await;

    let settings = CollectorSettings {
        rates: request.rates,
        idle_timeout: state.session_idle_timeout,
    };
    let frontend = DiscordFrontend::new(ctx.clone(), command.clone(), message.id, owner);

    spawn_session(
        state.sessions.clone(),
        key,
        instance,
        settings,
        frontend,
        rng,
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests default session rates.
    ///
    /// Expected: 60% upgrades, 20% restores, standard rolls
    #[test]
    fn defaults_use_standard_rates() {
        let request = CsRequest::new(Some("bfc"), None, None).unwrap();

        assert_eq!(request.equip_code, "bfc");
        assert_eq!(request.rates, ScrollRates::default());
        assert_eq!(request.rates.upgrade_pass_rate, 60);
        assert_eq!(request.rates.restore_pass_rate, 20);
        assert_eq!(request.rates.mode, UpgradeMode::Standard);
    }

    /// Tests the pass and goodness options.
    ///
    /// Expected: guaranteed upgrades and aggressive rolls, restore rate unchanged
    #[test]
    fn options_raise_pass_rate_and_switch_mode() {
        let request = CsRequest::new(Some("fs"), Some(true), Some(true)).unwrap();

        assert_eq!(request.rates.upgrade_pass_rate, 100);
        assert_eq!(request.rates.restore_pass_rate, 20);
        assert_eq!(request.rates.mode, UpgradeMode::Aggressive);
    }

    /// Tests a missing equip option.
    ///
    /// Expected: BadRequest
    #[test]
    fn missing_equip_is_rejected() {
        let result = CsRequest::new(None, Some(true), None);

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests the duplicate session reply.
    ///
    /// Expected: mention and link to the live session
    #[test]
    fn duplicate_reply_links_existing_session() {
        let reply = duplicate_session_reply(
            UserId::new(42),
            Some("https://discord.com/channels/1/2/3"),
        );

        assert!(reply.starts_with(
            "<@42>, you have an active session [here](<https://discord.com/channels/1/2/3>)."
        ));
    }

    #[test]
    fn duplicate_reply_without_location_still_mentions_user() {
        let reply = duplicate_session_reply(UserId::new(42), None);

        assert!(reply.starts_with("<@42>,"));
    }

    #[test]
    fn detailed_description_lists_every_equip() {
        let catalog = EquipCatalog::builtin();

        let text = detailed_description(&catalog);

        for choice in catalog.choices() {
            assert!(text.contains(choice.name));
        }
    }
}
