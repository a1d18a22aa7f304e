//! Discord implementation of the session frontend.
//!
//! Button presses come from a component collector scoped to the session message
//! and its owner, so presses by other users never reach the session. Every press is
//! answered by updating the session message in place.

use serenity::all::{
    CommandInteraction, ComponentInteraction, ComponentInteractionCollector, Context,
    CreateInteractionResponse, MessageId,
};
use serenity::async_trait;
use serenity::futures::{Stream, StreamExt};
use std::pin::Pin;

use crate::bot::render::{self, SessionOwner};
use crate::error::AppError;
use crate::model::action::ScrollAction;
use crate::service::session::{SessionFrame, SessionFrontend};

type PressStream = Pin<Box<dyn Stream<Item = ComponentInteraction> + Send>>;

/// Session frontend backed by the `/cs` reply message.
pub struct DiscordFrontend {
    ctx: Context,
    /// The `/cs` invocation whose reply hosts the session.
    command: CommandInteraction,
    owner: SessionOwner,
    presses: PressStream,
}

impl DiscordFrontend {
    /// Starts collecting the owner's presses on the session message.
    ///
    /// # Arguments
    /// - `ctx` - Discord context
    /// - `command` - The `/cs` interaction that posted the session message
    /// - `message_id` - ID of the session message
    /// - `owner` - Display identity used when redrawing the equip card
    pub fn new(
        ctx: Context,
        command: CommandInteraction,
        message_id: MessageId,
        owner: SessionOwner,
    ) -> Self {
        let presses = ComponentInteractionCollector::new(&ctx.shard)
            .message_id(message_id)
            .author_id(command.user.id)
            .filter(|press| ScrollAction::from_custom_id(&press.data.custom_id).is_some())
            .stream();

        Self {
            ctx,
            command,
            owner,
            presses: Box::pin(presses),
        }
    }
}

#[async_trait]
impl SessionFrontend for DiscordFrontend {
    type Event = ComponentInteraction;

    async fn next_action(&mut self) -> Option<(ScrollAction, ComponentInteraction)> {
        while let Some(press) = self.presses.next().await {
            if let Some(action) = ScrollAction::from_custom_id(&press.data.custom_id) {
                return Some((action, press));
            }
        }
        None
    }

    async fn render(
        &mut self,
        press: ComponentInteraction,
        frame: SessionFrame<'_>,
    ) -> Result<(), AppError> {
        let update = render::session_update(&frame, &self.owner);
        press
            .create_response(&self.ctx.http, CreateInteractionResponse::UpdateMessage(update))
            .await?;
        Ok(())
    }

    async fn finish(&mut self, frame: SessionFrame<'_>) -> Result<(), AppError> {
        self.command
            .edit_response(&self.ctx.http, render::closing_edit(&frame))
            .await?;
        Ok(())
    }
}
