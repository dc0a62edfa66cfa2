//! # cmcbot-core
//!
//! Core types and traits for the CoinMarketCap bot: [`InboundEvent`], [`OutboundReply`], the
//! [`Bot`] reply sink, the [`UpdateSource`] event feed, [`Handler`], the interaction classifier,
//! the button menu, reply formatting and the [`MarketDataGateway`]. Transport-agnostic; used by
//! cmcbot-telegram, handler-chain and the cmcbot application.

pub mod bot;
pub mod classify;
pub mod error;
pub mod format;
pub mod gateway;
pub mod logger;
pub mod menu;
pub mod replies;
pub mod types;

pub use bot::{Bot, UpdateSource};
pub use classify::classify;
pub use error::{BotError, ProviderError, Result};
pub use gateway::{
    ListingsRequest, MarketDataGateway, MarketDataProvider, QuoteRequest, QUOTE_CURRENCY,
};
pub use logger::init_tracing;
pub use menu::ButtonMenu;
pub use replies::Replies;
pub use types::{
    CallbackPayload, ChatReply, Handler, HandlerResponse, InboundEvent, InlineAnswer,
    InlineQueryPayload, InteractionKind, Keyboard, KeyboardButton, MessagePayload, OutboundReply,
    RankedEntry, RankedList, RawUpdate, TickerSnapshot, ToRawUpdate,
};
