use async_trait::async_trait;
use sig_core::SignalSink;
use sig_core::SinkError;
use teloxide::prelude::*;

/// Delivers rendered signals to the configured Telegram group.
///
/// The destination chat is fixed at construction; the emitter loop never
/// learns it. Failures map into `SinkError` for the loop to log, nothing
/// more: no retry, no queueing.
#[derive(Clone)]
pub struct TelegramSink {
    bot: Bot,
    chat: ChatId,
}

impl TelegramSink {
    pub fn new(bot: Bot, chat: ChatId) -> Self {
        Self { bot, chat }
    }
}

#[async_trait]
impl SignalSink for TelegramSink {
    async fn deliver(&self, text: &str) -> Result<(), SinkError> {
        self.bot
            .send_message(self.chat, text)
            .await
            .map(|_| ())
            .map_err(|err| SinkError::SendFailed(err.to_string()))
    }
}
