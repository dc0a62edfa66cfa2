//! Wraps teloxide::Bot and implements [`cmcbot_core::Bot`]. Production code replies via Telegram; tests can substitute another Bot impl.
//!
//! Every message and inline article is sent with legacy Markdown parse mode.

use async_trait::async_trait;
use cmcbot_core::{Bot as CoreBot, BotError, ChatReply, InlineAnswer, Keyboard, Result};
use teloxide::{
    prelude::*,
    types::{
        ChatId, InlineKeyboardButton, InlineKeyboardMarkup, InlineQueryId, InlineQueryResult,
        InlineQueryResultArticle, InputMessageContent, InputMessageContentText, ParseMode, ReplyMarkup,
    },
};
use tracing::debug;

#[allow(deprecated)]
const PARSE_MODE: ParseMode = ParseMode::Markdown;

/// Converts a core keyboard to a Telegram inline keyboard of callback buttons.
pub fn to_inline_keyboard(keyboard: &Keyboard) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = keyboard
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.payload.clone()))
                .collect()
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, reply: &ChatReply) -> Result<()> {
        let mut request = self
            .bot
            .send_message(ChatId(reply.chat_id), reply.text.clone());
        request.parse_mode = Some(PARSE_MODE);
        if let Some(keyboard) = &reply.keyboard {
            request.reply_markup = Some(ReplyMarkup::InlineKeyboard(to_inline_keyboard(keyboard)));
        }
        request
            .await
            .map_err(|e| BotError::Delivery(e.to_string()))?;
        debug!(chat_id = reply.chat_id, "step: message sent");
        Ok(())
    }

    async fn answer_inline_query(&self, answer: &InlineAnswer) -> Result<()> {
        let mut text = InputMessageContentText::new(answer.body.clone());
        text.parse_mode = Some(PARSE_MODE);
        let article = InlineQueryResultArticle::new(
            answer.query_id.clone(),
            answer.title.clone(),
            InputMessageContent::Text(text),
        );

        let mut request = self.bot.answer_inline_query(
            InlineQueryId(answer.query_id.clone()),
            vec![InlineQueryResult::Article(article)],
        );
        request.is_personal = Some(true);
        request.cache_time = Some(0);
        request
            .await
            .map_err(|e| BotError::Delivery(e.to_string()))?;
        debug!(query_id = %answer.query_id, "step: inline query answered");
        Ok(())
    }
}
