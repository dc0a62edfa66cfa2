//! Interaction classifier: turns a [`RawUpdate`] into exactly one [`InboundEvent`] or nothing.
//!
//! Priority: command message, other message, inline query, button callback. An update matching
//! none of them (non-text message, callback from an inline message, empty update) yields `None`
//! and is dropped without a reply.

use crate::types::{InboundEvent, RawUpdate};

/// Prefix that marks a chat message as a command.
pub const COMMAND_MARKER: char = '/';

/// Classifies one update. Pure; no side effects.
pub fn classify(update: &RawUpdate) -> Option<InboundEvent> {
    if let Some(message) = &update.message {
        let text = message.text.as_deref()?;
        if let Some(name) = parse_command(text) {
            return Some(InboundEvent::Command {
                name,
                chat_id: message.chat_id,
            });
        }
        return Some(InboundEvent::FreeText {
            text: text.to_string(),
            chat_id: message.chat_id,
        });
    }

    if let Some(query) = &update.inline_query {
        return Some(InboundEvent::InlineQuery {
            id: query.id.clone(),
            query: query.query.clone(),
        });
    }

    if let Some(callback) = &update.callback {
        return Some(InboundEvent::ButtonCallback {
            payload: callback.data.clone()?,
            chat_id: callback.chat_id?,
        });
    }

    None
}

/// Extracts the command name from `/name@BotName args`. Returns `None` when the text is not a
/// command or the name is empty (a lone `/`).
pub fn parse_command(text: &str) -> Option<String> {
    let rest = text.strip_prefix(COMMAND_MARKER)?;
    let token = rest.split(char::is_whitespace).next().unwrap_or("");
    let name = token.split('@').next().unwrap_or("");
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
