//! Interaction event handler.
//!
//! Slash commands are dispatched here and wrapped with run/success/error logging.
//! Component interactions (session buttons) are consumed by the per-session
//! collectors and ignored by this handler.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, Interaction,
};

use crate::bot::audit::{self, Invocation};
use crate::bot::command;
use crate::error::AppError;
use crate::state::AppState;

/// Handles the interaction_create event.
///
/// # Arguments
/// - `state` - Application state handed to the command
/// - `ctx` - Discord context
/// - `interaction` - The received interaction
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let invocation = Invocation::from_command(&ctx, &command);
    tracing::info!("    run - {}", invocation.summary());

    match command::dispatch(state, &ctx, &command).await {
        Ok(()) => {
            let log = invocation.detailed();
            tracing::info!("success - {}", log);
            audit::post(&ctx.http, state.log_channel_id, log);
        }
        Err(e) => {
            tracing::error!("  error - {}: {}", invocation.detailed(), e);
            reply_with_error(&ctx, &command, &e).await;
        }
    }
}

/// Tells the user their command failed.
///
/// Answers the interaction ephemerally; if it was already answered, sends an
/// ephemeral follow-up instead.
async fn reply_with_error(ctx: &Context, command: &CommandInteraction, error: &AppError) {
    let content = error.user_message();

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(&content)
            .ephemeral(true),
    );
    if command.create_response(&ctx.http, response).await.is_ok() {
        return;
    }

    let followup = CreateInteractionResponseFollowup::new()
        .content(content)
        .ephemeral(true);
    if let Err(e) = command.create_followup(&ctx.http, followup).await {
        tracing::error!(
            "Failed to report error of /{} to user {}: {}",
            command.data.name,
            command.user.id,
            e
        );
    }
}
