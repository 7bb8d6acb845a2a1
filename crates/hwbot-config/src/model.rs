// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model for hwbot.

use serde::{Deserialize, Serialize};

/// Root configuration for hwbot.
///
/// All sections are optional and default to sensible values; only the
/// three secrets have no defaults and must come from a file or the
/// environment.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HwbotConfig {
    /// General bot settings.
    #[serde(default)]
    pub bot: BotConfig,

    /// Homework status API settings.
    #[serde(default)]
    pub practicum: PracticumConfig,

    /// Telegram delivery settings.
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Poll loop settings.
    #[serde(default)]
    pub poll: PollConfig,
}

/// General bot settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BotConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Homework status API settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PracticumConfig {
    /// OAuth token for the status API. Usually supplied via the
    /// PRACTICUM_TOKEN environment variable.
    #[serde(default)]
    pub token: Option<String>,

    /// Status endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for PracticumConfig {
    fn default() -> Self {
        Self {
            token: None,
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".to_string()
}

/// Telegram delivery settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TelegramConfig {
    /// Bot API token. Usually supplied via the TELEGRAM_TOKEN
    /// environment variable.
    #[serde(default)]
    pub bot_token: Option<String>,

    /// Chat to deliver notifications to. A numeric chat id or an
    /// @channelusername. Usually supplied via TELEGRAM_CHAT_ID.
    #[serde(default, deserialize_with = "chat_id_from_string_or_int")]
    pub chat_id: Option<String>,
}

/// Env var values parse as TOML, so a numeric chat id arrives as an
/// integer. Accept both forms and normalize to a string.
fn chat_id_from_string_or_int<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Str(String),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Int(id) => id.to_string(),
        Raw::Str(s) => s,
    }))
}

/// Poll loop settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PollConfig {
    /// Seconds to wait between poll cycles.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

fn default_interval_secs() -> u64 {
    600 // 10 minutes
}
