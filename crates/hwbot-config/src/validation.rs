// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes: the presence of the three required secrets, a usable
//! endpoint, and a nonzero poll interval.

use crate::diagnostic::ConfigError;
use crate::model::HwbotConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast). Collecting every
/// missing secret lets an operator fix the whole environment in one pass
/// instead of replaying a failure per variable.
pub fn validate_config(config: &HwbotConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if secret_missing(&config.practicum.token) {
        errors.push(ConfigError::MissingSecret {
            key: "practicum.token",
            env_var: "PRACTICUM_TOKEN",
        });
    }

    if secret_missing(&config.telegram.bot_token) {
        errors.push(ConfigError::MissingSecret {
            key: "telegram.bot_token",
            env_var: "TELEGRAM_TOKEN",
        });
    }

    if secret_missing(&config.telegram.chat_id) {
        errors.push(ConfigError::MissingSecret {
            key: "telegram.chat_id",
            env_var: "TELEGRAM_CHAT_ID",
        });
    }

    if config.practicum.endpoint.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "practicum.endpoint must not be empty".to_string(),
        });
    }

    if config.poll.interval_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "poll.interval_secs must be at least 1".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A secret is missing when it is unset or blank after trimming.
fn secret_missing(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).unwrap_or("").is_empty()
}
