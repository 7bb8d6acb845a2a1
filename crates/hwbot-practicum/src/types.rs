// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validated shapes for status API responses.

/// A single homework record from the status API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    /// Title of the homework, e.g. `hw05_final`.
    pub name: String,
    /// Raw review status code, e.g. `approved`.
    pub status: String,
}

/// A validated status API response.
///
/// The server returns records most-recent-first, so `homeworks[0]` is the
/// submission whose status changed last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusResponse {
    /// Homework records in server order.
    pub homeworks: Vec<Homework>,
    /// Server-side timestamp of the response, when the server sent a
    /// usable one.
    pub current_date: Option<i64>,
}
