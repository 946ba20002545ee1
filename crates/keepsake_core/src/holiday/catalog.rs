//! Holiday catalogue contract and in-memory implementation.
//!
//! # Responsibility
//! - Define `HolidayCatalog`, the injected collaborator that maps a holiday
//!   id and region code to a recurrence date.
//! - Keep core testable without real calendar data via a static registry.
//!
//! # Invariants
//! - Region codes are opaque; core never enumerates or validates them.
//! - A resolved `RecurrenceDate` must satisfy the same month/day bounds as
//!   fixed-date occasions.

use crate::model::event::{validate_month_day, OccasionValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Region code used by current callers when none is specified.
pub const DEFAULT_REGION: &str = "usa";

/// A recurring month/day, optionally pinned to a year.
///
/// Derived on every query and never cached; callers must treat values as
/// relative to "now" at call time. The `year` is set for dated observances
/// (a holiday already computed for a specific year) and for anchored
/// birthdays/anniversaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceDate {
    pub month: u32,
    pub day: u32,
    pub year: Option<i32>,
}

impl RecurrenceDate {
    /// Builds a yearly-recurring month/day with no year pin.
    pub fn yearly(month: u32, day: u32) -> Self {
        Self {
            month,
            day,
            year: None,
        }
    }

    /// Checks month/day against calendar bounds.
    pub fn validate(&self) -> Result<(), OccasionValidationError> {
        validate_month_day(self.month, self.day)
    }
}

/// Failure to resolve a holiday id within a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HolidayResolutionError {
    /// The catalogue has no entry for this id/region pair.
    UnknownHoliday { holiday_id: String, region: String },
}

impl Display for HolidayResolutionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownHoliday { holiday_id, region } => {
                write!(f, "unknown holiday `{holiday_id}` in region `{region}`")
            }
        }
    }
}

impl Error for HolidayResolutionError {}

/// Injected collaborator resolving holiday recurrence dates per region.
///
/// Implementations own the catalogue data; core only consumes the resolved
/// month/day (and optional year) shape.
pub trait HolidayCatalog {
    /// Resolves the recurrence date for `holiday_id` within `region`.
    ///
    /// # Errors
    /// - `UnknownHoliday` when the id/region pair has no catalogue entry.
    fn resolve(
        &self,
        holiday_id: &str,
        region: &str,
    ) -> Result<RecurrenceDate, HolidayResolutionError>;
}

/// In-memory holiday catalogue keyed by `(holiday_id, region)`.
///
/// Intended for tests and embedding callers that load their own tables;
/// production catalogue data lives outside this crate.
#[derive(Debug, Default)]
pub struct StaticHolidayCatalog {
    entries: BTreeMap<(String, String), RecurrenceDate>,
}

impl StaticHolidayCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one holiday date for a region, replacing any prior entry.
    pub fn insert(
        &mut self,
        holiday_id: impl Into<String>,
        region: impl Into<String>,
        date: RecurrenceDate,
    ) {
        self.entries.insert((holiday_id.into(), region.into()), date);
    }
}

impl HolidayCatalog for StaticHolidayCatalog {
    fn resolve(
        &self,
        holiday_id: &str,
        region: &str,
    ) -> Result<RecurrenceDate, HolidayResolutionError> {
        self.entries
            .get(&(holiday_id.to_string(), region.to_string()))
            .copied()
            .ok_or_else(|| HolidayResolutionError::UnknownHoliday {
                holiday_id: holiday_id.to_string(),
                region: region.to_string(),
            })
    }
}
