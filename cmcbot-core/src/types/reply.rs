//! Outbound replies: chat messages (with optional inline keyboard) and inline-query answers.
//!
//! The formatting mode is not part of the reply; the transport applies one markup dialect to every
//! message it sends.

use serde::{Deserialize, Serialize};

/// A button of an inline keyboard: visible label and the callback payload sent back on press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardButton {
    pub label: String,
    pub payload: String,
}

/// Inline keyboard as rows of buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyboard {
    pub rows: Vec<Vec<KeyboardButton>>,
}

/// Chat message reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub chat_id: i64,
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

impl ChatReply {
    pub fn new(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

/// Answer to an inline query: a single article result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineAnswer {
    pub query_id: String,
    pub title: String,
    pub body: String,
}

/// Exactly one of these is produced for every event that gets a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutboundReply {
    Message(ChatReply),
    Inline(InlineAnswer),
}

impl OutboundReply {
    /// Reply body text (message text or inline article body).
    pub fn text(&self) -> &str {
        match self {
            OutboundReply::Message(m) => &m.text,
            OutboundReply::Inline(a) => &a.body,
        }
    }
}
