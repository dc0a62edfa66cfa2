//! Maps `/command` names to fixed replies. Every name resolves to a reply.

use async_trait::async_trait;
use cmcbot_core::{
    ButtonMenu, ChatReply, Handler, HandlerResponse, InboundEvent, OutboundReply, Replies, Result,
};
use std::sync::Arc;
use tracing::{info, instrument};

pub const CHECK_COMMAND: &str = "check";
pub const START_COMMAND: &str = "start";
pub const HELP_COMMAND: &str = "help";

/// Answers commands: `check` with the limit keyboard, `start`/`help` with fixed texts,
/// anything else with the unknown-command text.
pub struct CommandHandler {
    replies: Arc<Replies>,
    menu: ButtonMenu,
}

impl CommandHandler {
    pub fn new(replies: Arc<Replies>, menu: ButtonMenu) -> Self {
        Self { replies, menu }
    }

    /// Reply for one command name in the given chat.
    pub fn reply_for(&self, name: &str, chat_id: i64) -> ChatReply {
        match name {
            CHECK_COMMAND => {
                ChatReply::new(chat_id, &self.replies.check).with_keyboard(self.menu.keyboard())
            }
            START_COMMAND => ChatReply::new(chat_id, &self.replies.start),
            HELP_COMMAND => ChatReply::new(chat_id, &self.replies.help),
            _ => ChatReply::new(chat_id, &self.replies.unknown_command),
        }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, event))]
    async fn handle(&self, event: &InboundEvent) -> Result<HandlerResponse> {
        let InboundEvent::Command { name, chat_id } = event else {
            return Ok(HandlerResponse::Continue);
        };
        info!(command = %name, chat_id = chat_id, "step: CommandHandler routing command");
        Ok(HandlerResponse::Reply(OutboundReply::Message(
            self.reply_for(name, *chat_id),
        )))
    }
}
