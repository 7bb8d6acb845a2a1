// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across hwbot components.

/// Health status reported by connectivity probes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// The dependency is fully operational.
    Healthy,
    /// The dependency is reachable but misbehaving.
    Degraded(String),
    /// The dependency is not operational.
    Unhealthy(String),
}
