// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock notifier for deterministic testing.
//!
//! `MockNotifier` implements `Notifier` with captured deliveries and a
//! switchable failing mode for exercising delivery-failure paths.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use hwbot_core::{HealthStatus, HwbotError, Notifier};

/// A mock delivery channel for testing.
///
/// Every text passed to `notify()` is captured and retrievable via
/// `sent_messages()`. While failing mode is on, `notify()` returns
/// `DeliveryFailed` and captures nothing. Clones share the same buffer,
/// so a test can keep a handle while the watcher owns the notifier.
#[derive(Clone)]
pub struct MockNotifier {
    sent: Arc<Mutex<Vec<String>>>,
    failing: Arc<AtomicBool>,
}

impl MockNotifier {
    /// Create a new mock notifier with an empty buffer.
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get all texts that were delivered through `notify()`.
    pub async fn sent_messages(&self) -> Vec<String> {
        self.sent.lock().await.clone()
    }

    /// Get the count of delivered texts.
    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }

    /// Clear all captured texts.
    pub async fn clear_sent(&self) {
        self.sent.lock().await.clear();
    }

    /// Switch failing mode on or off.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(&self, text: &str) -> Result<(), HwbotError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(HwbotError::DeliveryFailed {
                message: "mock notifier is failing".into(),
                source: None,
            });
        }
        self.sent.lock().await.push(text.to_string());
        Ok(())
    }

    async fn health_check(&self) -> Result<HealthStatus, HwbotError> {
        Ok(HealthStatus::Healthy)
    }
}
