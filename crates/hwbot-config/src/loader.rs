// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./hwbot.toml` > `~/.config/hwbot/hwbot.toml` > `/etc/hwbot/hwbot.toml`
//! with overrides from the PRACTICUM_TOKEN, TELEGRAM_TOKEN, and
//! TELEGRAM_CHAT_ID environment variables.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::HwbotConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/hwbot/hwbot.toml` (system-wide)
/// 3. `~/.config/hwbot/hwbot.toml` (user XDG config)
/// 4. `./hwbot.toml` (local directory)
/// 5. PRACTICUM_TOKEN / TELEGRAM_TOKEN / TELEGRAM_CHAT_ID environment variables
pub fn load_config() -> Result<HwbotConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HwbotConfig::default()))
        .merge(Toml::file("/etc/hwbot/hwbot.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("hwbot/hwbot.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("hwbot.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and for callers that already hold the config text.
pub fn load_config_from_str(toml_content: &str) -> Result<HwbotConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HwbotConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<HwbotConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HwbotConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider for the three secret variables.
///
/// The variable names are a de-facto contract with existing deployments, so
/// they are matched verbatim rather than behind an `HWBOT_` prefix. The
/// `filter` is what keeps every other process variable from colliding with
/// `deny_unknown_fields` during extraction.
fn env_provider() -> Env {
    Env::raw()
        .filter(|key| {
            key == "PRACTICUM_TOKEN" || key == "TELEGRAM_TOKEN" || key == "TELEGRAM_CHAT_ID"
        })
        .map(|key| {
            if key == "PRACTICUM_TOKEN" {
                "practicum.token".into()
            } else if key == "TELEGRAM_TOKEN" {
                "telegram.bot_token".into()
            } else {
                "telegram.chat_id".into()
            }
        })
}
