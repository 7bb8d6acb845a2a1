// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `hwbot run` command implementation.
//!
//! Wires the validated configuration into the status API client, the
//! Telegram notifier and the watcher loop, then polls until a shutdown
//! signal arrives.

use tracing::info;
use tracing_subscriber::EnvFilter;

use hwbot_config::model::HwbotConfig;
use hwbot_core::HwbotError;
use hwbot_practicum::PracticumClient;
use hwbot_telegram::TelegramNotifier;
use hwbot_watcher::{shutdown, StatusWatcher};

/// Run the `hwbot run` command.
///
/// Blocks until SIGTERM or Ctrl-C. Construction errors (bad endpoint,
/// unusable chat id) surface here; everything after that is handled
/// inside the watcher loop.
pub async fn run_watch(config: HwbotConfig) -> Result<(), HwbotError> {
    init_tracing(&config.bot.log_level);

    info!(version = env!("CARGO_PKG_VERSION"), "starting hwbot");

    let client = PracticumClient::new(&config.practicum)?;
    let notifier = TelegramNotifier::new(&config.telegram)?;
    let mut watcher = StatusWatcher::new(client, Box::new(notifier), &config.poll);

    let cancel = shutdown::install_signal_handler();
    watcher.run(cancel).await;

    info!("hwbot stopped");
    Ok(())
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured `bot.log_level`
/// applies to hwbot crates and everything else stays at `warn`.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hwbot={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
