//! Recurrence engine: next-occurrence resolution and countdown formatting.
//!
//! # Responsibility
//! - Resolve the next calendar date matching an occasion's recurrence rule.
//! - Render the friendly distance-to-date string for that occurrence.
//!
//! # Invariants
//! - Both halves are pure functions over their inputs; "now" is sampled once
//!   by the caller and threaded through as `today`.
//! - The soon threshold is shared between `Countdown::is_soon` and the
//!   "N days" display branch through one constant.

pub mod countdown;
pub mod resolver;

/// Upper bound, in days, for an occurrence to count as "soon".
///
/// Also the upper bound of the "N days" countdown branch; the two must
/// stay in sync, so both read this constant.
pub const SOON_DAYS_AWAY: i64 = 20;
