//! Domain model for recurring personal events.
//!
//! # Responsibility
//! - Define the canonical event record and its recurrence rule.
//! - Define the notification payload handed to external schedulers.
//!
//! # Invariants
//! - Every event is identified by a stable `EventId`.
//! - An occasion is validated before any recurrence resolution runs on it.

pub mod event;
pub mod notification;
