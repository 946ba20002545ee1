//! Next-occurrence resolver.
//!
//! # Responsibility
//! - Find the earliest future date matching a month/day recurrence rule.
//! - Extract recurrence components from an occasion, delegating holidays
//!   to the injected catalogue.
//!
//! # Invariants
//! - The search floor is the start of yesterday, so a rule matching today's
//!   date resolves to today rather than skipping a year.
//! - Results land within roughly one year of the floor (366 days across a
//!   leap span); an unsatisfiable rule is an error, never a crash.

use crate::holiday::catalog::{HolidayCatalog, HolidayResolutionError, DEFAULT_REGION};
use crate::model::event::{validate_month_day, Occasion, OccasionValidationError};
use chrono::{Datelike, Days, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failures while resolving a recurrence rule to a concrete date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    /// Month/day components are outside calendar bounds (e.g. Feb 30).
    InvalidComponents(OccasionValidationError),
    /// Components are in bounds but no candidate year within the search
    /// horizon contains the date (Feb 29 outside a leap span).
    Unresolvable { month: u32, day: u32 },
    /// The external catalogue could not resolve the holiday.
    Holiday(HolidayResolutionError),
}

impl Display for RecurrenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidComponents(err) => write!(f, "{err}"),
            Self::Unresolvable { month, day } => {
                write!(
                    f,
                    "no upcoming date matches month {month} day {day} within one year"
                )
            }
            Self::Holiday(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RecurrenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidComponents(err) => Some(err),
            Self::Unresolvable { .. } => None,
            Self::Holiday(err) => Some(err),
        }
    }
}

impl From<OccasionValidationError> for RecurrenceError {
    fn from(value: OccasionValidationError) -> Self {
        Self::InvalidComponents(value)
    }
}

impl From<HolidayResolutionError> for RecurrenceError {
    fn from(value: HolidayResolutionError) -> Self {
        Self::Holiday(value)
    }
}

/// Returns the day before `today`.
///
/// Date values already sit at start-of-day granularity, so "start of
/// yesterday" is simply yesterday's date.
pub fn start_of_yesterday(today: NaiveDate) -> NaiveDate {
    // NaiveDate::MIN is centuries away from any reminder input.
    today.checked_sub_days(Days::new(1)).unwrap_or(NaiveDate::MIN)
}

/// Finds the earliest date strictly after the start of yesterday whose
/// month and day match the rule.
///
/// A rule matching today's date resolves to today; a rule whose date for
/// the current year has already passed rolls to next year.
///
/// # Errors
/// - `InvalidComponents` when month/day are outside calendar bounds.
/// - `Unresolvable` when neither candidate year contains the date, which
///   only happens for Feb 29 outside a leap span. Callers decide whether
///   to hide such events or report them as bad data.
pub fn next_occurrence(
    month: u32,
    day: u32,
    today: NaiveDate,
) -> Result<NaiveDate, RecurrenceError> {
    validate_month_day(month, day)?;

    let floor = start_of_yesterday(today);
    for year in [floor.year(), floor.year() + 1] {
        if let Some(candidate) = NaiveDate::from_ymd_opt(year, month, day) {
            if candidate > floor {
                return Ok(candidate);
            }
        }
    }
    Err(RecurrenceError::Unresolvable { month, day })
}

/// Resolves an occasion to its next occurrence.
///
/// Fixed-date occasions carry month/day directly; holidays are delegated
/// to the catalogue with the default region. A year pinned on the resolved
/// recurrence is display metadata and does not constrain the search.
pub fn resolve_occasion<C: HolidayCatalog>(
    occasion: &Occasion,
    catalog: &C,
    today: NaiveDate,
) -> Result<NaiveDate, RecurrenceError> {
    occasion.validate()?;
    let (month, day) = match occasion {
        Occasion::Birthday { month, day, .. } => (*month, *day),
        Occasion::Anniversary { month, day, .. } => (*month, *day),
        Occasion::Holiday { holiday_id } => {
            let date = catalog.resolve(holiday_id, DEFAULT_REGION)?;
            date.validate()?;
            (date.month, date.day)
        }
    };
    next_occurrence(month, day, today)
}
