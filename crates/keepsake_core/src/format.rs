//! Ordinal number formatting.
//!
//! # Responsibility
//! - Render English ordinal suffixes for milestone display ("30th", "1st").
//!
//! # Invariants
//! - Follows the standard English rule: 11/12/13 take "th", otherwise the
//!   last digit decides.
//! - Month and weekday names are locale data and stay outside this crate.

/// Returns the English ordinal suffix for `n`.
pub fn ordinal_suffix(n: u32) -> &'static str {
    if matches!(n % 100, 11 | 12 | 13) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Renders `n` with its ordinal suffix, e.g. `21` -> `"21st"`.
pub fn ordinal(n: u32) -> String {
    format!("{n}{}", ordinal_suffix(n))
}
