// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notifier trait for message delivery backends.

use async_trait::async_trait;

use crate::error::HwbotError;
use crate::types::HealthStatus;

/// Delivery seam for outbound notifications.
///
/// The poll loop talks to the operator chat exclusively through this trait,
/// which keeps delivery mockable in tests.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers `text` to the configured chat.
    async fn notify(&self, text: &str) -> Result<(), HwbotError>;

    /// Probes the delivery backend for reachability.
    async fn health_check(&self) -> Result<HealthStatus, HwbotError>;
}
