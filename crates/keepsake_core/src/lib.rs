//! Core recurrence and countdown logic for Keepsake.
//! This crate is the single source of truth for occurrence arithmetic.

pub mod format;
pub mod holiday;
pub mod logging;
pub mod model;
pub mod recurrence;
pub mod service;

pub use format::{ordinal, ordinal_suffix};
pub use holiday::catalog::{
    HolidayCatalog, HolidayResolutionError, RecurrenceDate, StaticHolidayCatalog, DEFAULT_REGION,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{
    Event, EventId, EventValidationError, Occasion, OccasionValidationError, PersonId,
};
pub use model::notification::{NotificationSpec, DEFAULT_NOTIFICATION_ID};
pub use recurrence::countdown::Countdown;
pub use recurrence::resolver::{
    next_occurrence, resolve_occasion, start_of_yesterday, RecurrenceError,
};
pub use recurrence::SOON_DAYS_AWAY;
pub use service::event_service::{EventService, UpcomingEvent};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
