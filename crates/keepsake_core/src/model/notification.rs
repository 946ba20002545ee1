//! Notification payload model.
//!
//! # Responsibility
//! - Define the output-only shape consumed by the external notification
//!   scheduler.
//!
//! # Invariants
//! - `days_before` is non-negative by construction (`u32`).
//! - Core never interprets this payload; it only produces it.

use serde::{Deserialize, Serialize};

/// Identifier of the single reminder produced per event today.
///
/// Multi-reminder schedules ("N days before") are an explicit extension
/// point the current behavior does not implement.
pub const DEFAULT_NOTIFICATION_ID: &str = "default";

/// One scheduled reminder for an event occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSpec {
    /// Distinguishes reminders for the same event; `"default"` today.
    pub id: String,
    /// Display title, supplied by the external person/display layer.
    pub title: String,
    /// Human-readable countdown message.
    pub message: String,
    /// Days before the occurrence to fire; zero means on the day.
    pub days_before: u32,
}
