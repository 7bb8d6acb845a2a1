// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Poll loop that watches the newest homework submission and notifies on
//! status changes.
//!
//! The loop owns two pieces of state. The *cursor* is the `from_date`
//! window start sent to the status API; it only moves forward, and only
//! after a fully notified cycle, so nothing is lost across failures. The
//! *last notified message* deduplicates deliveries: a record whose
//! formatted text matches it is not resent, and repeated identical failure
//! reports collapse into one.

pub mod shutdown;

use std::time::Duration;

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use hwbot_config::model::PollConfig;
use hwbot_core::{HwbotError, Notifier};
use hwbot_practicum::{format_status_change, validate_response, PracticumClient};

/// What a single poll cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A status change was formatted and delivered.
    Notified,
    /// The newest record formats to the text already delivered last time.
    Duplicate,
    /// The API reported no records for the window.
    Unchanged,
    /// The cycle failed; the error was handled at the loop boundary.
    Skipped,
}

/// Long-running watcher over the homework status API.
///
/// One watcher polls one account and delivers to one notifier. All cycle
/// errors are contained here: a failed cycle reports to the operator chat
/// (deduplicated) and the loop keeps running.
pub struct StatusWatcher {
    client: PracticumClient,
    notifier: Box<dyn Notifier>,
    interval: Duration,
    cursor: i64,
    last_notified: Option<String>,
}

impl StatusWatcher {
    /// Creates a watcher whose window starts now.
    ///
    /// Only changes that happen after startup get reported; history is
    /// not replayed.
    pub fn new(client: PracticumClient, notifier: Box<dyn Notifier>, poll: &PollConfig) -> Self {
        Self {
            client,
            notifier,
            interval: Duration::from_secs(poll.interval_secs),
            cursor: Utc::now().timestamp(),
            last_notified: None,
        }
    }

    /// Replaces the window start, for replaying from a past moment.
    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.cursor = cursor;
        self
    }

    /// Runs poll cycles until the token is cancelled.
    ///
    /// The first cycle runs immediately; after that the loop sleeps for
    /// the configured interval between cycles. Cancellation is observed
    /// at the sleep, so a cycle in flight completes first.
    pub async fn run(&mut self, cancel: CancellationToken) {
        info!(
            interval_secs = self.interval.as_secs(),
            "status watcher running"
        );

        loop {
            let outcome = self.run_cycle().await;
            debug!(outcome = ?outcome, "poll cycle finished");

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = cancel.cancelled() => {
                    info!("shutdown signal received, stopping status watcher");
                    break;
                }
            }
        }
    }

    /// Executes one poll cycle, reporting any failure to the operator.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll_once().await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(error = %err, cursor = self.cursor, "poll cycle failed");
                self.report_failure(&err).await;
                CycleOutcome::Skipped
            }
        }
    }

    async fn poll_once(&mut self) -> Result<CycleOutcome, HwbotError> {
        let raw = self.client.fetch_statuses(self.cursor).await?;
        let response = validate_response(&raw)?;

        let Some(newest) = response.homeworks.first() else {
            info!("no homework status changes");
            return Ok(CycleOutcome::Unchanged);
        };

        let message = format_status_change(newest)?;
        if self.last_notified.as_deref() == Some(message.as_str()) {
            debug!("newest status already notified, skipping");
            return Ok(CycleOutcome::Duplicate);
        }

        self.notifier.notify(&message).await?;
        info!(homework = %newest.name, status = %newest.status, "status change delivered");

        self.last_notified = Some(message);
        self.advance_cursor(response.current_date);
        Ok(CycleOutcome::Notified)
    }

    /// Reports a cycle failure to the operator chat.
    ///
    /// Delivery failures are only logged: when the channel itself is
    /// broken, a report about it cannot get through either, and the next
    /// cycle retries the original delivery anyway. Repeated identical
    /// failures are reported once. The dedup state updates only when the
    /// report actually got through.
    async fn report_failure(&mut self, err: &HwbotError) {
        if matches!(err, HwbotError::DeliveryFailed { .. }) {
            return;
        }

        let report = format!("Сбой в работе программы: {err}");
        if self.last_notified.as_deref() == Some(report.as_str()) {
            debug!("failure already reported, skipping");
            return;
        }

        match self.notifier.notify(&report).await {
            Ok(()) => self.last_notified = Some(report),
            Err(notify_err) => {
                warn!(error = %notify_err, "failed to deliver failure report");
            }
        }
    }

    /// Moves the window start forward, never backwards.
    ///
    /// Prefers the server's own timestamp so client clock skew cannot
    /// open a gap; falls back to the local clock when the server sent
    /// nothing usable.
    fn advance_cursor(&mut self, server_date: Option<i64>) {
        let next = server_date.unwrap_or_else(|| Utc::now().timestamp());
        self.cursor = self.cursor.max(next);
    }
}
