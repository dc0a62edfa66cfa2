//! Long-poll update source over Telegram `getUpdates`.

use async_trait::async_trait;
use cmcbot_core::{RawUpdate, Result, ToRawUpdate, UpdateSource};
use std::time::Duration;
use teloxide::prelude::*;
use tracing::{debug, error, info};

use crate::adapters::TelegramUpdateWrapper;

/// Long-poll timeout passed to `getUpdates`.
pub const POLL_TIMEOUT_SECS: u32 = 10;

/// Pause after a failed poll before the next attempt.
const POLL_ERROR_DELAY: Duration = Duration::from_secs(1);

/// Polls Telegram for updates, tracking the offset so each update is delivered once.
/// Ctrl-C closes the source.
pub struct TelegramPolling {
    bot: teloxide::Bot,
    offset: i32,
    timeout_secs: u32,
}

impl TelegramPolling {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self {
            bot,
            offset: 0,
            timeout_secs: POLL_TIMEOUT_SECS,
        }
    }

    /// Offset sent with the next `getUpdates` (id of the last seen update + 1).
    pub fn offset(&self) -> i32 {
        self.offset
    }
}

#[async_trait]
impl UpdateSource for TelegramPolling {
    async fn next_batch(&mut self) -> Result<Option<Vec<RawUpdate>>> {
        let mut request = self.bot.get_updates();
        request.offset = Some(self.offset);
        request.timeout = Some(self.timeout_secs);

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl-C received, closing update source");
                Ok(None)
            }
            result = request.send() => match result {
                Ok(updates) => {
                    if let Some(last) = updates.last() {
                        self.offset = last.id.as_offset();
                    }
                    debug!(count = updates.len(), offset = self.offset, "step: updates received");
                    Ok(Some(
                        updates
                            .iter()
                            .map(|u| TelegramUpdateWrapper(u).to_raw())
                            .collect(),
                    ))
                }
                Err(e) => {
                    error!(error = %e, "getUpdates failed");
                    tokio::time::sleep(POLL_ERROR_DELAY).await;
                    Ok(Some(Vec::new()))
                }
            }
        }
    }
}
