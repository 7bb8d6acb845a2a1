// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the hwbot status watcher.
//!
//! This crate provides the error taxonomy and the notifier trait shared by
//! the status API client, the Telegram adapter, and the poll loop.

pub mod error;
pub mod notifier;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::HwbotError;
pub use notifier::Notifier;
pub use types::HealthStatus;
