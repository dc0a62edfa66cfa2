//! Transport seams: [`Bot`] delivers replies, [`UpdateSource`] yields incoming updates.

use crate::error::Result;
use crate::types::{ChatReply, InlineAnswer, OutboundReply, RawUpdate};
use async_trait::async_trait;

/// Reply sink. Implementations map to a transport (e.g. Telegram) and apply its single markup mode.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a chat message, with its inline keyboard when present.
    async fn send_message(&self, reply: &ChatReply) -> Result<()>;
    /// Answers an inline query with one article.
    async fn answer_inline_query(&self, answer: &InlineAnswer) -> Result<()>;

    /// Delivers either kind of reply.
    async fn deliver(&self, reply: &OutboundReply) -> Result<()> {
        match reply {
            OutboundReply::Message(m) => self.send_message(m).await,
            OutboundReply::Inline(a) => self.answer_inline_query(a).await,
        }
    }
}

/// Ordered feed of updates (long poll or push).
#[async_trait]
pub trait UpdateSource: Send {
    /// Waits for the next batch. `Ok(None)` means the source is closed and no more updates follow.
    async fn next_batch(&mut self) -> Result<Option<Vec<RawUpdate>>>;
}
