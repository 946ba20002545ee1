//! Holiday catalogue seam.
//!
//! # Responsibility
//! - Define the injected contract for resolving holiday recurrence dates.
//! - Provide an in-memory catalogue for tests and embedding callers.
//!
//! # Invariants
//! - Catalogue data (which holidays exist, per region) is owned externally;
//!   core ships no region tables.
//! - Resolution failures are surfaced to the caller, never swallowed.

pub mod catalog;
