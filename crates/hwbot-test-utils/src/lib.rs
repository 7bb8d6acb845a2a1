// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared test doubles for hwbot crates.

pub mod mock_notifier;

pub use mock_notifier::MockNotifier;
