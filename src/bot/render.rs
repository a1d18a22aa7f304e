//! Discord rendering of scroll sessions.
//!
//! Turns an equip instance, its scoreboard and the last action outcome into embeds
//! and buttons. Text is built by plain functions so formatting can be tested
//! without going through Serenity's builders.

use equip::prelude::StatBlock;
use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedAuthor,
    CreateEmbedFooter, CreateInteractionResponseMessage, EditInteractionResponse, EmojiId,
    ReactionType, User,
};

use crate::model::action::custom_id;
use crate::model::session::{ActionOutcome, ScrollTally, StatChanges, UpgradeOutcome};
use crate::service::session::{EquipInstance, SessionFrame};

const UPGRADE_SCROLL_EMOJI: &str = "<:scrollcs:894418262526398485>";
const UPGRADE_SCROLL_EMOJI_ID: u64 = 894418262526398485;
const RESTORE_SCROLL_EMOJI: &str = "<:css:969445345950064671>";
const RESTORE_SCROLL_EMOJI_ID: u64 = 969445345950064671;

const COLOR_PASSED: u32 = 0x84FC87;
const COLOR_FAILED: u32 = 0xFF0000;
const COLOR_SUMMARY: u32 = 0x000000;

/// Display identity of the user owning a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOwner {
    pub name: String,
    pub avatar_url: String,
}

impl SessionOwner {
    /// Builds the owner from the invoking user, preferring their guild nickname.
    ///
    /// # Arguments
    /// - `user` - User who ran the command
    /// - `nick` - Guild nickname, if the command ran in a guild and one is set
    pub fn new(user: &User, nick: Option<&str>) -> Self {
        Self {
            name: nick.unwrap_or_else(|| user.display_name()).to_string(),
            avatar_url: user.face(),
        }
    }
}

/// Title of the equip card, with the upgrade count once there is one.
pub fn equip_title(instance: &EquipInstance) -> String {
    let name = instance.definition().name;
    match instance.session().upgrades {
        0 => name.to_string(),
        upgrades => format!("{} (+{})", name, upgrades),
    }
}

/// Stat lines of the equip card, followed by the remaining slot count.
///
/// Zero stats are omitted. Attack stats are shown as plain values, every other
/// stat as a bonus.
pub fn describe_stats(stats: &StatBlock, slots: u32) -> String {
    let mut lines: Vec<String> = stats
        .iter()
        .filter(|&(_, value)| value > 0)
        .map(|(stat, value)| {
            if stat.is_attack() {
                format!("{} : **{}**", stat.label(), value)
            } else {
                format!("{} : +**{}**", stat.label(), value)
            }
        })
        .collect();
    lines.push(format!("NUMBER OF UPGRADES AVAILABLE : **{}**", slots));
    lines.join("\n")
}

/// Signed deltas of a passed upgrade, e.g. `**+3** WA, **-1** STR`.
pub fn describe_changes(changes: &StatChanges) -> String {
    changes
        .iter()
        .map(|(stat, delta)| format!("**{:+}** {}", delta, stat.key().to_uppercase()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Scroll counters shown under every result.
pub fn describe_tally(tally: &ScrollTally) -> String {
    format!(
        "Scrolls used:\n{} x**{}**\n{} x**{}**",
        UPGRADE_SCROLL_EMOJI, tally.upgrade_scrolls, RESTORE_SCROLL_EMOJI, tally.restore_scrolls
    )
}

/// Message content line tracking how many equip copies were scrolled.
pub fn status_line(tally: &ScrollTally) -> String {
    format!("Total rerolls: **{}**", tally.rerolls())
}

/// Custom IDs of the session buttons, in display order.
///
/// Upgrade and restore switch to their disabled variants when the equip has no
/// slot left or nothing to restore.
pub fn button_ids(instance: &EquipInstance) -> [&'static str; 4] {
    [
        if instance.can_upgrade() {
            custom_id::UPGRADE
        } else {
            custom_id::UPGRADE_DISABLED
        },
        custom_id::RESTART,
        custom_id::STOP,
        if instance.is_restorable() {
            custom_id::RESTORE
        } else {
            custom_id::RESTORE_DISABLED
        },
    ]
}

fn custom_emoji(id: u64, name: &str) -> ReactionType {
    ReactionType::Custom {
        animated: false,
        id: EmojiId::new(id),
        name: Some(name.to_string()),
    }
}

fn button(id: &'static str) -> CreateButton {
    match id {
        custom_id::UPGRADE | custom_id::UPGRADE_DISABLED => CreateButton::new(id)
            .label("Slam!")
            .emoji(custom_emoji(UPGRADE_SCROLL_EMOJI_ID, "scrollcs"))
            .style(ButtonStyle::Secondary)
            .disabled(id == custom_id::UPGRADE_DISABLED),
        custom_id::RESTORE | custom_id::RESTORE_DISABLED => CreateButton::new(id)
            .label("CSS 20%")
            .emoji(custom_emoji(RESTORE_SCROLL_EMOJI_ID, "css"))
            .style(ButtonStyle::Secondary)
            .disabled(id == custom_id::RESTORE_DISABLED),
        custom_id::RESTART => CreateButton::new(id)
            .label("Restart")
            .style(ButtonStyle::Success),
        _ => CreateButton::new(id).label("Stop").style(ButtonStyle::Danger),
    }
}

/// Session buttons reflecting what the equip currently allows.
pub fn scroll_buttons(instance: &EquipInstance) -> Vec<CreateActionRow> {
    let buttons = button_ids(instance).into_iter().map(button).collect();
    vec![CreateActionRow::Buttons(buttons)]
}

/// Equip card showing the owner, current stats and slots.
pub fn equip_embed(instance: &EquipInstance, owner: &SessionOwner) -> CreateEmbed {
    let definition = instance.definition();
    let session = instance.session();

    CreateEmbed::new()
        .author(CreateEmbedAuthor::new(format!("{}'s", owner.name)).icon_url(&owner.avatar_url))
        .title(equip_title(instance))
        .color(definition.color)
        .thumbnail(definition.thumbnail)
        .description(describe_stats(&session.stats, session.slots))
}

fn upgrade_embed(outcome: &UpgradeOutcome, tally: &ScrollTally) -> CreateEmbed {
    let result = if outcome.passed {
        describe_changes(&outcome.changes)
    } else {
        format!("The {} Chaos Scroll **failed**!", UPGRADE_SCROLL_EMOJI)
    };

    CreateEmbed::new()
        .color(if outcome.passed {
            COLOR_PASSED
        } else {
            COLOR_FAILED
        })
        .title(if outcome.passed { "✅ Passed" } else { "❌ Failed" })
        .description(format!("{}\n\n{}", result, describe_tally(tally)))
}

fn restore_embed(passed: bool, tally: &ScrollTally) -> CreateEmbed {
    CreateEmbed::new()
        .color(if passed { COLOR_PASSED } else { COLOR_FAILED })
        .title(if passed { "✅ Passed" } else { "❌ Failed" })
        .description(format!(
            "The {} Clean Slate Scroll 20% **{}**!\n\n{}",
            RESTORE_SCROLL_EMOJI,
            if passed { "passed" } else { "failed" },
            describe_tally(tally)
        ))
        .footer(CreateEmbedFooter::new(
            "💡 Tip: Set the `pass` option to `True` to use 100% pass rate Chaos Scrolls!",
        ))
}

/// Result card for the last action; restarts have none.
pub fn outcome_embed(outcome: &ActionOutcome, tally: &ScrollTally) -> Option<CreateEmbed> {
    match outcome {
        ActionOutcome::Upgrade(upgrade) => Some(upgrade_embed(upgrade, tally)),
        ActionOutcome::Restore { passed } => Some(restore_embed(*passed, tally)),
        ActionOutcome::Restarted => None,
        ActionOutcome::Stopped => Some(
            CreateEmbed::new()
                .color(COLOR_SUMMARY)
                .description(describe_tally(tally)),
        ),
    }
}

/// First reply of a new session.
pub fn opening_message(
    instance: &EquipInstance,
    owner: &SessionOwner,
) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .embed(equip_embed(instance, owner))
        .components(scroll_buttons(instance))
}

/// Update of the session message after an action.
///
/// Buttons are removed once the session is stopped.
pub fn session_update(
    frame: &SessionFrame<'_>,
    owner: &SessionOwner,
) -> CreateInteractionResponseMessage {
    let mut embeds = Vec::with_capacity(2);
    if let Some(embed) = frame.outcome.and_then(|outcome| outcome_embed(outcome, frame.tally)) {
        embeds.push(embed);
    }
    embeds.push(equip_embed(frame.instance, owner));

    let components = match frame.outcome {
        Some(ActionOutcome::Stopped) => Vec::new(),
        _ => scroll_buttons(frame.instance),
    };

    CreateInteractionResponseMessage::new()
        .content(status_line(frame.tally))
        .embeds(embeds)
        .components(components)
}

/// Edit applied to the session message once the session has ended.
pub fn closing_edit(frame: &SessionFrame<'_>) -> EditInteractionResponse {
    EditInteractionResponse::new()
        .content(status_line(frame.tally))
        .components(Vec::new())
}
