// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram delivery adapter implementing [`Notifier`].
//!
//! Sends notification texts to a single configured chat. The chat can be
//! addressed by numeric id (including negative supergroup ids) or by
//! `@channelusername`.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId, Recipient};
use tracing::debug;

use hwbot_config::model::TelegramConfig;
use hwbot_core::{HealthStatus, HwbotError, Notifier};

/// Telegram notifier bound to one bot token and one chat.
#[derive(Debug)]
pub struct TelegramNotifier {
    bot: Bot,
    recipient: Recipient,
}

impl TelegramNotifier {
    /// Creates a new Telegram notifier.
    ///
    /// Requires `config.bot_token` and `config.chat_id` to be set.
    pub fn new(config: &TelegramConfig) -> Result<Self, HwbotError> {
        let token = config.bot_token.as_deref().ok_or_else(|| {
            HwbotError::Config("telegram.bot_token is required for Telegram delivery".into())
        })?;

        if token.is_empty() {
            return Err(HwbotError::Config(
                "telegram.bot_token cannot be empty".into(),
            ));
        }

        let chat_id = config.chat_id.as_deref().ok_or_else(|| {
            HwbotError::Config("telegram.chat_id is required for Telegram delivery".into())
        })?;
        let recipient = parse_recipient(chat_id)?;

        Ok(Self {
            bot: Bot::new(token),
            recipient,
        })
    }
}

/// Parse a configured chat id into a teloxide [`Recipient`].
fn parse_recipient(raw: &str) -> Result<Recipient, HwbotError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(HwbotError::Config("telegram.chat_id cannot be empty".into()));
    }

    if trimmed.starts_with('@') {
        return Ok(Recipient::ChannelUsername(trimmed.to_string()));
    }

    trimmed
        .parse::<i64>()
        .map(|id| Recipient::Id(ChatId(id)))
        .map_err(|e| {
            HwbotError::Config(format!(
                "telegram.chat_id `{trimmed}` is neither a numeric id nor an @channelusername: {e}"
            ))
        })
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<(), HwbotError> {
        debug!(chars = text.chars().count(), "sending Telegram message");
        self.bot
            .send_message(self.recipient.clone(), text)
            .await
            .map_err(|e| HwbotError::DeliveryFailed {
                message: format!("failed to send message: {e}"),
                source: Some(Box::new(e)),
            })?;
        Ok(())
    }

    async fn health_check(&self) -> Result<HealthStatus, HwbotError> {
        // Check if the bot token is valid by calling getMe.
        match self.bot.get_me().await {
            Ok(_) => Ok(HealthStatus::Healthy),
            Err(e) => Ok(HealthStatus::Unhealthy(format!(
                "Telegram bot unreachable: {e}"
            ))),
        }
    }
}
