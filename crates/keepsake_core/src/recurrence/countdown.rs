//! Countdown formatter.
//!
//! # Responsibility
//! - Compute day/week/month distances between today and an occurrence.
//! - Select the display string by tiered precedence.
//!
//! # Invariants
//! - `days_away`, `weeks_away` and `months_away` are each computed from the
//!   two dates directly; months use calendar boundaries, not 30-day buckets.
//! - The "N days" branch and `is_soon` share `SOON_DAYS_AWAY`.

use crate::recurrence::SOON_DAYS_AWAY;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Distance from today to a resolved occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    /// Whole days between today and the occurrence.
    pub days_away: i64,
    /// `days_away / 7` rounded to the nearest week, halves up.
    pub weeks_away: i64,
    /// Whole calendar months between today and the occurrence.
    pub months_away: i64,
}

impl Countdown {
    /// Computes all three distances between `today` and `next_occurrence`.
    pub fn between(today: NaiveDate, next_occurrence: NaiveDate) -> Self {
        let days_away = (next_occurrence - today).num_days();
        Self {
            days_away,
            weeks_away: round_weeks(days_away),
            months_away: whole_months_between(today, next_occurrence),
        }
    }

    /// Whether the occurrence falls within the soon threshold.
    pub fn is_soon(&self) -> bool {
        self.days_away <= SOON_DAYS_AWAY
    }

    /// Renders the friendly distance string.
    ///
    /// Precedence is evaluated top to bottom, first match wins; the seams
    /// between day, week and month granularity are part of the contract.
    pub fn display(&self) -> String {
        match (self.days_away, self.weeks_away, self.months_away) {
            (0, _, _) => "today".to_string(),
            (1, _, _) => "tomorrow".to_string(),
            (days, _, _) if (2..=SOON_DAYS_AWAY).contains(&days) => format!("{days} days"),
            (_, 1, _) => "1 week".to_string(),
            (_, weeks, _) if (2..=3).contains(&weeks) => format!("{weeks} weeks"),
            (_, _, 1) => "1 month".to_string(),
            (_, _, months) if months < 12 => format!("{months} months"),
            _ => "a year".to_string(),
        }
    }
}

/// Rounds a day count to the nearest number of weeks, halves rounding up.
fn round_weeks(days: i64) -> i64 {
    (days + 3).div_euclid(7)
}

/// Calendar months from `start` to `end`, counted as month-boundary
/// crossings rather than elapsed 30-day blocks.
///
/// A same-month/day pair a year apart therefore measures 12 months even
/// when the day span is 364 days, which is what lets a rolled-over
/// anniversary render as "a year".
fn whole_months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    i64::from(end.year() - start.year()) * 12 + i64::from(end.month()) - i64::from(start.month())
}
