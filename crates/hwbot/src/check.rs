// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `hwbot check` command implementation.
//!
//! Runs diagnostic checks against the hwbot environment to identify
//! configuration and connectivity problems before the poller is left
//! running unattended.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use chrono::Utc;

use hwbot_config::model::HwbotConfig;
use hwbot_core::{HealthStatus, HwbotError, Notifier};
use hwbot_practicum::validate_response;
use hwbot_telegram::TelegramNotifier;

/// Status of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed successfully.
    Pass,
    /// Check passed with a warning.
    Warn,
    /// Check failed.
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check.
    pub name: String,
    /// Check status.
    pub status: CheckStatus,
    /// Human-readable message.
    pub message: String,
    /// Duration the check took.
    pub duration: Duration,
}

/// Run the `hwbot check` command.
///
/// Verifies the configuration, the status API and the Telegram bot.
/// With `--plain`, disables colored output.
pub async fn run_check(config: &HwbotConfig, plain: bool) -> Result<(), HwbotError> {
    let use_color = !plain && std::io::stdout().is_terminal();
    let mut results = Vec::new();

    results.push(check_config().await);
    results.push(check_practicum(config).await);
    results.push(check_telegram(config).await);

    // Print results
    println!();
    println!("  hwbot check");
    println!("  {}", "-".repeat(50));

    let mut fail_count = 0;
    let mut warn_count = 0;

    for result in &results {
        let duration_ms = result.duration.as_millis();
        let status_symbol;
        let line;

        match result.status {
            CheckStatus::Pass => {
                if use_color {
                    use colored::Colorize;
                    status_symbol = "✓".green().to_string();
                    line = format!(
                        "    {status_symbol} {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    );
                } else {
                    line = format!(
                        "    [OK]   {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    );
                }
            }
            CheckStatus::Warn => {
                warn_count += 1;
                if use_color {
                    use colored::Colorize;
                    status_symbol = "!".yellow().to_string();
                    line = format!(
                        "    {status_symbol} {:<20} {} ({duration_ms}ms)",
                        result.name,
                        result.message.yellow()
                    );
                } else {
                    line = format!(
                        "    [WARN] {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    );
                }
            }
            CheckStatus::Fail => {
                fail_count += 1;
                if use_color {
                    use colored::Colorize;
                    status_symbol = "✗".red().to_string();
                    line = format!(
                        "    {status_symbol} {:<20} {} ({duration_ms}ms)",
                        result.name,
                        result.message.red()
                    );
                } else {
                    line = format!(
                        "    [FAIL] {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    );
                }
            }
        }

        println!("{line}");
    }

    println!();

    if fail_count > 0 || warn_count > 0 {
        let issues = fail_count + warn_count;
        let issue_word = if issues == 1 { "issue" } else { "issues" };
        println!("  {issues} {issue_word} found.");
    } else {
        println!("  All checks passed.");
    }

    println!();

    Ok(())
}

/// Check configuration loads without errors.
async fn check_config() -> CheckResult {
    let start = Instant::now();
    match hwbot_config::load_and_validate() {
        Ok(_) => CheckResult {
            name: "Configuration".to_string(),
            status: CheckStatus::Pass,
            message: "valid".to_string(),
            duration: start.elapsed(),
        },
        Err(errors) => CheckResult {
            name: "Configuration".to_string(),
            status: CheckStatus::Fail,
            message: format!("{} error(s)", errors.len()),
            duration: start.elapsed(),
        },
    }
}

/// Check the status API answers with a well-formed payload.
///
/// Uses its own short-timeout client instead of the polling client, so a
/// dead endpoint fails the check in seconds rather than after the
/// poller's 30-second request timeout.
async fn check_practicum(config: &HwbotConfig) -> CheckResult {
    let start = Instant::now();

    let token = config
        .practicum
        .token
        .as_deref()
        .map(str::trim)
        .unwrap_or("");
    if token.is_empty() {
        return CheckResult {
            name: "Status API".to_string(),
            status: CheckStatus::Warn,
            message: "no token configured".to_string(),
            duration: start.elapsed(),
        };
    }

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            return CheckResult {
                name: "Status API".to_string(),
                status: CheckStatus::Fail,
                message: format!("HTTP client error: {e}"),
                duration: start.elapsed(),
            };
        }
    };

    let response = client
        .get(&config.practicum.endpoint)
        .header(reqwest::header::AUTHORIZATION, format!("OAuth {token}"))
        .query(&[("from_date", Utc::now().timestamp())])
        .send()
        .await;

    match response {
        Ok(resp) if resp.status() == reqwest::StatusCode::OK => {
            match resp.json::<serde_json::Value>().await {
                Ok(raw) => match validate_response(&raw) {
                    Ok(_) => CheckResult {
                        name: "Status API".to_string(),
                        status: CheckStatus::Pass,
                        message: "reachable".to_string(),
                        duration: start.elapsed(),
                    },
                    Err(e) => CheckResult {
                        name: "Status API".to_string(),
                        status: CheckStatus::Warn,
                        message: format!("reachable, but: {e}"),
                        duration: start.elapsed(),
                    },
                },
                Err(e) => CheckResult {
                    name: "Status API".to_string(),
                    status: CheckStatus::Warn,
                    message: format!("reachable, but not JSON: {e}"),
                    duration: start.elapsed(),
                },
            }
        }
        Ok(resp) => CheckResult {
            name: "Status API".to_string(),
            status: CheckStatus::Fail,
            message: format!("status {}", resp.status()),
            duration: start.elapsed(),
        },
        Err(e) => {
            let msg = if e.is_timeout() {
                "timeout (5s)".to_string()
            } else if e.is_connect() {
                "connection refused".to_string()
            } else {
                format!("error: {e}")
            };
            CheckResult {
                name: "Status API".to_string(),
                status: CheckStatus::Fail,
                message: msg,
                duration: start.elapsed(),
            }
        }
    }
}

/// Check the Telegram bot token by calling `getMe`.
async fn check_telegram(config: &HwbotConfig) -> CheckResult {
    let start = Instant::now();

    let has_token = config
        .telegram
        .bot_token
        .as_deref()
        .is_some_and(|t| !t.trim().is_empty());
    if !has_token {
        return CheckResult {
            name: "Telegram".to_string(),
            status: CheckStatus::Warn,
            message: "no bot token configured".to_string(),
            duration: start.elapsed(),
        };
    }

    let notifier = match TelegramNotifier::new(&config.telegram) {
        Ok(n) => n,
        Err(e) => {
            return CheckResult {
                name: "Telegram".to_string(),
                status: CheckStatus::Fail,
                message: format!("{e}"),
                duration: start.elapsed(),
            };
        }
    };

    match notifier.health_check().await {
        Ok(HealthStatus::Healthy) => CheckResult {
            name: "Telegram".to_string(),
            status: CheckStatus::Pass,
            message: "bot reachable".to_string(),
            duration: start.elapsed(),
        },
        Ok(HealthStatus::Degraded(msg)) => CheckResult {
            name: "Telegram".to_string(),
            status: CheckStatus::Warn,
            message: msg,
            duration: start.elapsed(),
        },
        Ok(HealthStatus::Unhealthy(msg)) => CheckResult {
            name: "Telegram".to_string(),
            status: CheckStatus::Fail,
            message: msg,
            duration: start.elapsed(),
        },
        Err(e) => CheckResult {
            name: "Telegram".to_string(),
            status: CheckStatus::Fail,
            message: format!("{e}"),
            duration: start.elapsed(),
        },
    }
}
