// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client for the homework review status API.
//!
//! Split into three layers the poll loop composes: [`client`] fetches raw
//! JSON, [`validate`] turns it into typed records or rejects it, and
//! [`status`] renders a record into the notification text.

pub mod client;
pub mod status;
pub mod types;
pub mod validate;

pub use client::PracticumClient;
pub use status::{format_status_change, ReviewStatus};
pub use types::{Homework, StatusResponse};
pub use validate::validate_response;
