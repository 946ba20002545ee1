//! Event domain model.
//!
//! # Responsibility
//! - Define the canonical record for a calendar-bound personal event.
//! - Validate recurrence components before they reach the resolver.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another event.
//! - `person` is an opaque reference; the person record is owned elsewhere.
//! - A validated occasion always carries month in [1, 12] and a day that
//!   exists in that month (February admits 29; leap handling is resolved
//!   at occurrence time, not here).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for an event.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EventId = Uuid;

/// Opaque reference to a person record owned by an external store.
pub type PersonId = Uuid;

/// Longest day number each month can carry, February counted as 29.
///
/// A Feb 29 recurrence is legal data; whether it resolves in a given year
/// is the recurrence resolver's concern.
const MAX_DAY_OF_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Recurrence rule attached to an event.
///
/// Closed sum type; resolver code matches it exhaustively with no default
/// arm so a new variant cannot be silently mishandled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Occasion {
    /// Recurs every year on `month`/`day`; `year` anchors the birth year
    /// for age display when known.
    Birthday {
        month: u32,
        day: u32,
        year: Option<i32>,
    },
    /// Recurs every year on `month`/`day`; `year` anchors the origin year
    /// when known.
    Anniversary {
        month: u32,
        day: u32,
        year: Option<i32>,
    },
    /// Resolution delegated to an external holiday catalogue keyed by
    /// holiday id and region.
    Holiday { holiday_id: String },
}

/// Validation failures for occasion recurrence components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OccasionValidationError {
    /// Month outside [1, 12].
    MonthOutOfRange(u32),
    /// Day does not exist in the given month.
    DayOutOfRange { month: u32, day: u32 },
    /// Holiday occasions must reference a catalogue entry.
    EmptyHolidayId,
}

impl Display for OccasionValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MonthOutOfRange(month) => {
                write!(f, "month must be in 1..=12, got {month}")
            }
            Self::DayOutOfRange { month, day } => {
                write!(f, "day {day} does not exist in month {month}")
            }
            Self::EmptyHolidayId => write!(f, "holiday id cannot be empty"),
        }
    }
}

impl Error for OccasionValidationError {}

impl Occasion {
    /// Checks recurrence components against the static calendar bounds.
    ///
    /// # Contract
    /// - `Birthday`/`Anniversary`: month in [1, 12], day exists in month.
    /// - `Holiday`: id must be non-empty; the catalogue owns everything else.
    pub fn validate(&self) -> Result<(), OccasionValidationError> {
        match self {
            Self::Birthday { month, day, .. } | Self::Anniversary { month, day, .. } => {
                validate_month_day(*month, *day)
            }
            Self::Holiday { holiday_id } => {
                if holiday_id.trim().is_empty() {
                    Err(OccasionValidationError::EmptyHolidayId)
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Returns the anchored origin year for birthdays and anniversaries.
    pub fn origin_year(&self) -> Option<i32> {
        match self {
            Self::Birthday { year, .. } | Self::Anniversary { year, .. } => *year,
            Self::Holiday { .. } => None,
        }
    }
}

/// Validates a month/day recurrence pair against calendar bounds.
pub(crate) fn validate_month_day(month: u32, day: u32) -> Result<(), OccasionValidationError> {
    if !(1..=12).contains(&month) {
        return Err(OccasionValidationError::MonthOutOfRange(month));
    }
    let max_day = MAX_DAY_OF_MONTH[(month - 1) as usize];
    if day == 0 || day > max_day {
        return Err(OccasionValidationError::DayOutOfRange { month, day });
    }
    Ok(())
}

/// Canonical record for a recurring personal event.
///
/// Immutable value constructed by the owning store; this crate only reads
/// it to derive occurrences and countdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Stable global ID used for linking and notification identity.
    pub uuid: EventId,
    /// Reference to the person the event belongs to.
    pub person: PersonId,
    /// Recurrence rule for this event.
    pub occasion: Occasion,
}

impl Event {
    /// Creates a new event with a generated stable ID.
    pub fn new(person: PersonId, occasion: Occasion) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            person,
            occasion,
        }
    }

    /// Creates an event with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    ///
    /// # Errors
    /// - Rejects the nil UUID; a nil event id breaks notification identity.
    pub fn with_id(
        uuid: EventId,
        person: PersonId,
        occasion: Occasion,
    ) -> Result<Self, EventValidationError> {
        if uuid.is_nil() {
            return Err(EventValidationError::NilUuid);
        }
        Ok(Self {
            uuid,
            person,
            occasion,
        })
    }
}

/// Validation failures for event identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    /// The nil UUID is reserved and never a valid event id.
    NilUuid,
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "event uuid cannot be nil"),
        }
    }
}

impl Error for EventValidationError {}
