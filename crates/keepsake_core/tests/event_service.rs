use chrono::NaiveDate;
use keepsake_core::{
    ordinal, Event, EventService, HolidayResolutionError, Occasion, RecurrenceDate,
    RecurrenceError, StaticHolidayCatalog, DEFAULT_NOTIFICATION_ID, DEFAULT_REGION,
};
use uuid::Uuid;

fn nd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn service_with_independence_day() -> EventService<StaticHolidayCatalog> {
    let mut catalog = StaticHolidayCatalog::new();
    catalog.insert("independence_day", DEFAULT_REGION, RecurrenceDate::yearly(7, 4));
    EventService::new(catalog)
}

#[test]
fn birthday_event_resolves_and_counts_down() {
    let service = EventService::new(StaticHolidayCatalog::new());
    let event = Event::new(
        Uuid::new_v4(),
        Occasion::Birthday {
            month: 3,
            day: 10,
            year: Some(1994),
        },
    );

    let upcoming = service.upcoming(&event, nd(2024, 3, 10)).unwrap();
    assert_eq!(upcoming.next_occurrence, nd(2024, 3, 10));
    assert_eq!(upcoming.countdown.display(), "today");
    assert!(upcoming.is_soon());
    assert_eq!(upcoming.event_id, event.uuid);
    assert_eq!(upcoming.person, event.person);
}

#[test]
fn holiday_event_goes_through_the_catalog() {
    let service = service_with_independence_day();
    let event = Event::new(
        Uuid::new_v4(),
        Occasion::Holiday {
            holiday_id: "independence_day".to_string(),
        },
    );

    let upcoming = service.upcoming(&event, nd(2024, 6, 20)).unwrap();
    assert_eq!(upcoming.next_occurrence, nd(2024, 7, 4));
    assert_eq!(upcoming.countdown.days_away, 14);
    assert_eq!(upcoming.countdown.display(), "14 days");
}

#[test]
fn unknown_holiday_propagates_the_catalog_error() {
    let service = service_with_independence_day();
    let event = Event::new(
        Uuid::new_v4(),
        Occasion::Holiday {
            holiday_id: "arbor_day".to_string(),
        },
    );

    let err = service.upcoming(&event, nd(2024, 6, 20)).unwrap_err();
    assert_eq!(
        err,
        RecurrenceError::Holiday(HolidayResolutionError::UnknownHoliday {
            holiday_id: "arbor_day".to_string(),
            region: DEFAULT_REGION.to_string(),
        })
    );
}

#[test]
fn notifications_produce_one_default_spec() {
    let service = EventService::new(StaticHolidayCatalog::new());
    let event = Event::new(
        Uuid::new_v4(),
        Occasion::Anniversary {
            month: 1,
            day: 15,
            year: None,
        },
    );

    let upcoming = service.upcoming(&event, nd(2024, 1, 1)).unwrap();
    let specs = upcoming.notifications("Ada's anniversary");
    assert_eq!(specs.len(), 1);
    assert_eq!(specs[0].id, DEFAULT_NOTIFICATION_ID);
    assert_eq!(specs[0].title, "Ada's anniversary");
    assert_eq!(specs[0].message, "14 days away");
    assert_eq!(specs[0].days_before, 0);
}

#[test]
fn anniversary_count_uses_the_anchored_year() {
    let service = EventService::new(StaticHolidayCatalog::new());
    let event = Event::new(
        Uuid::new_v4(),
        Occasion::Birthday {
            month: 3,
            day: 10,
            year: Some(1994),
        },
    );

    let upcoming = service.upcoming(&event, nd(2024, 3, 1)).unwrap();
    let count = upcoming.anniversary_count().unwrap();
    assert_eq!(count, 30);
    assert_eq!(ordinal(count), "30th");
}

#[test]
fn anniversary_count_absent_without_anchor_year() {
    let service = service_with_independence_day();
    let holiday = Event::new(
        Uuid::new_v4(),
        Occasion::Holiday {
            holiday_id: "independence_day".to_string(),
        },
    );
    let unanchored = Event::new(
        Uuid::new_v4(),
        Occasion::Anniversary {
            month: 6,
            day: 21,
            year: None,
        },
    );

    let today = nd(2024, 6, 1);
    assert_eq!(
        service.upcoming(&holiday, today).unwrap().anniversary_count(),
        None
    );
    assert_eq!(
        service
            .upcoming(&unanchored, today)
            .unwrap()
            .anniversary_count(),
        None
    );
}

#[test]
fn invalid_occasion_is_rejected_before_resolution() {
    let service = EventService::new(StaticHolidayCatalog::new());
    let event = Event::new(
        Uuid::new_v4(),
        Occasion::Birthday {
            month: 2,
            day: 30,
            year: None,
        },
    );

    let err = service.upcoming(&event, nd(2024, 1, 1)).unwrap_err();
    assert!(matches!(err, RecurrenceError::InvalidComponents(_)));
}
