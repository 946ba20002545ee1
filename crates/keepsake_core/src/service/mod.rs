//! Use-case services composing the recurrence engine.
//!
//! # Responsibility
//! - Provide event-level entry points for display and scheduling callers.
//!
//! # Invariants
//! - Services stay pure over their inputs; callers own "now".

pub mod event_service;
