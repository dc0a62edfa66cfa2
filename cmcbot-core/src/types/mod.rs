//! Core types: raw and classified events, outbound replies, market data, handler response, and Handler trait.
//!
//! Types are split into one file per main type for easier navigation.

mod event;
mod handler;
mod market;
mod reply;
mod response;

pub use event::{
    CallbackPayload, InboundEvent, InlineQueryPayload, InteractionKind, MessagePayload, RawUpdate,
    ToRawUpdate,
};
pub use handler::Handler;
pub use market::{RankedEntry, RankedList, TickerSnapshot};
pub use reply::{ChatReply, InlineAnswer, Keyboard, KeyboardButton, OutboundReply};
pub use response::HandlerResponse;
