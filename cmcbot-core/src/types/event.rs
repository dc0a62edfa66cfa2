//! Inbound events: the platform-shaped [`RawUpdate`] and the classified [`InboundEvent`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Chat message part of a raw update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    pub chat_id: i64,
    /// `None` for non-text messages (stickers, photos, service messages).
    pub text: Option<String>,
}

/// Inline-query part of a raw update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineQueryPayload {
    pub id: String,
    pub query: String,
}

/// Button-press part of a raw update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackPayload {
    /// Chat of the message carrying the keyboard; `None` for inline-message buttons.
    pub chat_id: Option<i64>,
    pub data: Option<String>,
}

/// One update as delivered by the messaging platform: a record of optional parts.
/// The classifier turns it into an [`InboundEvent`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUpdate {
    pub message: Option<MessagePayload>,
    pub inline_query: Option<InlineQueryPayload>,
    pub callback: Option<CallbackPayload>,
}

impl RawUpdate {
    /// Update carrying a text message in the given chat.
    pub fn text(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            message: Some(MessagePayload {
                chat_id,
                text: Some(text.into()),
            }),
            ..Self::default()
        }
    }

    /// Update carrying an inline query.
    pub fn inline_query(id: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            inline_query: Some(InlineQueryPayload {
                id: id.into(),
                query: query.into(),
            }),
            ..Self::default()
        }
    }

    /// Update carrying a button press from a message in the given chat.
    pub fn callback(chat_id: i64, data: impl Into<String>) -> Self {
        Self {
            callback: Some(CallbackPayload {
                chat_id: Some(chat_id),
                data: Some(data.into()),
            }),
            ..Self::default()
        }
    }
}

/// Converts a transport-specific update type to core [`RawUpdate`].
pub trait ToRawUpdate: Send + Sync {
    fn to_raw(&self) -> RawUpdate;
}

/// A classified inbound event. Exactly one interaction kind per event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InboundEvent {
    /// `/name` typed in a chat; the marker is stripped, the name is case-sensitive.
    Command { name: String, chat_id: i64 },
    /// Any other chat text; treated as a ticker lookup.
    FreeText { text: String, chat_id: i64 },
    /// A keyboard button press; `payload` is the button's callback data.
    ButtonCallback { payload: String, chat_id: i64 },
    /// A query typed in the inline input field.
    InlineQuery { id: String, query: String },
}

/// Interaction kind of an [`InboundEvent`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    Command,
    FreeText,
    ButtonCallback,
    InlineQuery,
}

impl InboundEvent {
    pub fn kind(&self) -> InteractionKind {
        match self {
            InboundEvent::Command { .. } => InteractionKind::Command,
            InboundEvent::FreeText { .. } => InteractionKind::FreeText,
            InboundEvent::ButtonCallback { .. } => InteractionKind::ButtonCallback,
            InboundEvent::InlineQuery { .. } => InteractionKind::InlineQuery,
        }
    }

    /// Chat the reply goes to; `None` for inline queries, which are answered by query id.
    pub fn chat_id(&self) -> Option<i64> {
        match self {
            InboundEvent::Command { chat_id, .. }
            | InboundEvent::FreeText { chat_id, .. }
            | InboundEvent::ButtonCallback { chat_id, .. } => Some(*chat_id),
            InboundEvent::InlineQuery { .. } => None,
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InteractionKind::Command => "command",
            InteractionKind::FreeText => "free_text",
            InteractionKind::ButtonCallback => "button_callback",
            InteractionKind::InlineQuery => "inline_query",
        };
        f.write_str(name)
    }
}
