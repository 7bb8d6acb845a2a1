// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Review status codes and notification text.

use std::str::FromStr;

use strum::{Display, EnumString};

use hwbot_core::HwbotError;

use crate::types::Homework;

/// The review states a homework can be in.
///
/// The API sends these as lowercase strings. Anything else is an unknown
/// status and is surfaced as an error instead of being guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    /// The human-readable verdict sentence for this status.
    ///
    /// The wording is load-bearing: subscribers and downstream chat
    /// automation match on these exact sentences.
    pub fn verdict(self) -> &'static str {
        match self {
            ReviewStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            ReviewStatus::Reviewing => "Работа взята на проверку ревьюером.",
            ReviewStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Build the notification text for a homework record.
///
/// Fails with [`HwbotError::IncompleteRecord`] when the status or name is
/// empty (status is checked first) and [`HwbotError::UnknownStatus`] when
/// the status is not a known review state. Pure function: no I/O, no
/// clock, no global state.
pub fn format_status_change(homework: &Homework) -> Result<String, HwbotError> {
    if homework.status.is_empty() {
        return Err(HwbotError::IncompleteRecord { field: "status" });
    }
    if homework.name.is_empty() {
        return Err(HwbotError::IncompleteRecord {
            field: "homework_name",
        });
    }

    let status = ReviewStatus::from_str(&homework.status).map_err(|_| {
        HwbotError::UnknownStatus {
            status: homework.status.clone(),
        }
    })?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework.name,
        status.verdict()
    ))
}
