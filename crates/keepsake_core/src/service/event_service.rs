//! Event use-case service.
//!
//! # Responsibility
//! - Compose occasion resolution and countdown formatting per event.
//! - Produce the notification payloads handed to the external scheduler.
//!
//! # Invariants
//! - "Now" is sampled once by the caller and held fixed across the
//!   resolver and formatter of one query.
//! - Holiday resolution goes through the injected catalogue; the service
//!   never hard-codes calendar data.

use crate::holiday::catalog::HolidayCatalog;
use crate::model::event::{Event, EventId, PersonId};
use crate::model::notification::{NotificationSpec, DEFAULT_NOTIFICATION_ID};
use crate::recurrence::countdown::Countdown;
use crate::recurrence::resolver::{resolve_occasion, RecurrenceError};
use chrono::{Datelike, NaiveDate};

/// Use-case service computing upcoming occurrences for events.
pub struct EventService<C: HolidayCatalog> {
    catalog: C,
}

/// Resolved view of one event's next occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingEvent {
    /// Event this view was derived from.
    pub event_id: EventId,
    /// Opaque reference for the external person/display layer.
    pub person: PersonId,
    /// Next calendar date matching the event's recurrence rule.
    pub next_occurrence: NaiveDate,
    /// Distance from the queried "today" to `next_occurrence`.
    pub countdown: Countdown,
    /// Anchored origin year, when the occasion carries one.
    pub origin_year: Option<i32>,
}

impl<C: HolidayCatalog> EventService<C> {
    /// Creates a service using the provided holiday catalogue.
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Resolves the next occurrence and countdown for one event.
    ///
    /// Derived values are recomputed on every call; nothing is cached, so
    /// results are always relative to the supplied `today`.
    ///
    /// # Errors
    /// - Propagates validation, resolution and catalogue failures from the
    ///   recurrence engine unchanged.
    pub fn upcoming(&self, event: &Event, today: NaiveDate) -> Result<UpcomingEvent, RecurrenceError> {
        let next_occurrence = resolve_occasion(&event.occasion, &self.catalog, today)?;
        Ok(UpcomingEvent {
            event_id: event.uuid,
            person: event.person,
            next_occurrence,
            countdown: Countdown::between(today, next_occurrence),
            origin_year: event.occasion.origin_year(),
        })
    }
}

impl UpcomingEvent {
    /// Plain distance description used as the notification message.
    pub fn description(&self) -> String {
        format!("{} days away", self.countdown.days_away)
    }

    /// Whether the occurrence falls within the soon threshold.
    pub fn is_soon(&self) -> bool {
        self.countdown.is_soon()
    }

    /// Which anniversary the next occurrence is, counted from the anchored
    /// origin year.
    ///
    /// `None` when the occasion has no origin year or the occurrence does
    /// not lie after it. Pairs with `format::ordinal` for "30th" rendering.
    pub fn anniversary_count(&self) -> Option<u32> {
        let origin = self.origin_year?;
        u32::try_from(self.next_occurrence.year() - origin)
            .ok()
            .filter(|count| *count > 0)
    }

    /// Builds the notification payloads for this occurrence.
    ///
    /// Exactly one `default` spec firing on the day; the title comes from
    /// the external person/display layer since core does not format names.
    pub fn notifications(&self, title: impl Into<String>) -> Vec<NotificationSpec> {
        vec![NotificationSpec {
            id: DEFAULT_NOTIFICATION_ID.to_string(),
            title: title.into(),
            message: self.description(),
            days_before: 0,
        }]
    }
}
