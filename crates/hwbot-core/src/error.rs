// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the hwbot status watcher.

use thiserror::Error;

/// The primary error type used across all hwbot components.
///
/// Only [`HwbotError::Config`] is fatal, and only at startup. Every other
/// variant is a recoverable cycle failure handled at the poll loop boundary.
#[derive(Debug, Error)]
pub enum HwbotError {
    /// Configuration errors (missing secrets, invalid values).
    #[error("configuration error: {0}")]
    Config(String),

    /// The status API could not be reached, or answered with a non-200 status.
    #[error("status API unavailable: {message}")]
    ApiUnavailable {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The API answered 200 but the JSON body violates the documented shape.
    #[error("malformed API response: {reason}")]
    MalformedResponse { reason: String },

    /// A homework record carries an empty name or status.
    #[error("incomplete homework record: empty `{field}`")]
    IncompleteRecord { field: &'static str },

    /// The server reported a review status outside the documented set.
    #[error("unknown review status `{status}`")]
    UnknownStatus { status: String },

    /// A notification could not be delivered to the chat.
    #[error("delivery failed: {message}")]
    DeliveryFailed {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}
