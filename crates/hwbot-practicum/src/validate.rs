// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structural validation of raw status API responses.
//!
//! The API is not versioned and has historically drifted, so nothing about
//! the payload shape is taken on faith: the top level must be an object,
//! `homeworks` must be an array, and every record must carry string
//! `homework_name` and `status` fields. A single bad record rejects the
//! whole response rather than silently skipping it.

use serde_json::Value;

use hwbot_core::HwbotError;

use crate::types::{Homework, StatusResponse};

/// Validate a raw API response into a [`StatusResponse`].
///
/// Record order is preserved. `current_date` is optional: a missing or
/// non-integer value is treated as absent, and the poll loop falls back
/// to its local clock.
pub fn validate_response(raw: &Value) -> Result<StatusResponse, HwbotError> {
    let object = raw.as_object().ok_or_else(|| HwbotError::MalformedResponse {
        reason: format!("expected a JSON object, got {}", json_type_name(raw)),
    })?;

    let homeworks_value = object
        .get("homeworks")
        .ok_or_else(|| HwbotError::MalformedResponse {
            reason: "response has no `homeworks` key".to_string(),
        })?;

    let records = homeworks_value
        .as_array()
        .ok_or_else(|| HwbotError::MalformedResponse {
            reason: format!(
                "`homeworks` must be an array, got {}",
                json_type_name(homeworks_value)
            ),
        })?;

    let mut homeworks = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        if !record.is_object() {
            return Err(HwbotError::MalformedResponse {
                reason: format!(
                    "homeworks[{i}] must be an object, got {}",
                    json_type_name(record)
                ),
            });
        }

        let name = record
            .get("homework_name")
            .and_then(Value::as_str)
            .ok_or_else(|| HwbotError::MalformedResponse {
                reason: format!("homeworks[{i}] is missing a string `homework_name`"),
            })?;

        let status = record
            .get("status")
            .and_then(Value::as_str)
            .ok_or_else(|| HwbotError::MalformedResponse {
                reason: format!("homeworks[{i}] is missing a string `status`"),
            })?;

        homeworks.push(Homework {
            name: name.to_string(),
            status: status.to_string(),
        });
    }

    let current_date = object.get("current_date").and_then(Value::as_i64);

    Ok(StatusResponse {
        homeworks,
        current_date,
    })
}

/// Human-readable JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
