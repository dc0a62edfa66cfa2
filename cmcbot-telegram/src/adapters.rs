//! Adapters from Telegram (teloxide) types to cmcbot_core types.
//! Depends only on teloxide and cmcbot_core type definitions.

use cmcbot_core::{CallbackPayload, InlineQueryPayload, MessagePayload, RawUpdate, ToRawUpdate};
use teloxide::types::UpdateKind;

/// Wraps a teloxide Update for conversion to core [`RawUpdate`].
/// Update kinds the bot does not handle (edited messages, channel posts, ...) become an empty update.
pub struct TelegramUpdateWrapper<'a>(pub &'a teloxide::types::Update);

impl<'a> ToRawUpdate for TelegramUpdateWrapper<'a> {
    fn to_raw(&self) -> RawUpdate {
        match &self.0.kind {
            UpdateKind::Message(msg) => RawUpdate {
                message: Some(MessagePayload {
                    chat_id: msg.chat.id.0,
                    text: msg.text().map(|s| s.to_string()),
                }),
                ..RawUpdate::default()
            },
            UpdateKind::InlineQuery(query) => RawUpdate {
                inline_query: Some(InlineQueryPayload {
                    id: query.id.to_string(),
                    query: query.query.clone(),
                }),
                ..RawUpdate::default()
            },
            UpdateKind::CallbackQuery(callback) => RawUpdate {
                callback: Some(CallbackPayload {
                    chat_id: callback.message.as_ref().map(|m| m.chat().id.0),
                    data: callback.data.clone(),
                }),
                ..RawUpdate::default()
            },
            _ => RawUpdate::default(),
        }
    }
}
