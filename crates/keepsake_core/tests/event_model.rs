use keepsake_core::{
    Event, EventValidationError, NotificationSpec, Occasion, OccasionValidationError,
};
use uuid::Uuid;

#[test]
fn event_new_generates_identity() {
    let person = Uuid::new_v4();
    let event = Event::new(
        person,
        Occasion::Birthday {
            month: 3,
            day: 10,
            year: Some(1994),
        },
    );

    assert!(!event.uuid.is_nil());
    assert_eq!(event.person, person);
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Event::with_id(
        Uuid::nil(),
        Uuid::new_v4(),
        Occasion::Holiday {
            holiday_id: "new_years_day".to_string(),
        },
    )
    .unwrap_err();
    assert_eq!(err, EventValidationError::NilUuid);
}

#[test]
fn occasion_serialization_uses_expected_wire_fields() {
    let occasion = Occasion::Birthday {
        month: 3,
        day: 10,
        year: Some(1994),
    };
    let json = serde_json::to_value(&occasion).unwrap();
    assert_eq!(json["kind"], "birthday");
    assert_eq!(json["month"], 3);
    assert_eq!(json["day"], 10);
    assert_eq!(json["year"], 1994);

    let decoded: Occasion = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, occasion);
}

#[test]
fn holiday_occasion_round_trips() {
    let occasion = Occasion::Holiday {
        holiday_id: "thanksgiving".to_string(),
    };
    let json = serde_json::to_value(&occasion).unwrap();
    assert_eq!(json["kind"], "holiday");
    assert_eq!(json["holiday_id"], "thanksgiving");

    let decoded: Occasion = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, occasion);
}

#[test]
fn event_serialization_round_trips() {
    let event_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let person_id = Uuid::parse_str("99999999-8888-4777-a666-555555555555").unwrap();
    let event = Event::with_id(
        event_id,
        person_id,
        Occasion::Anniversary {
            month: 6,
            day: 21,
            year: None,
        },
    )
    .unwrap();

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["uuid"], event_id.to_string());
    assert_eq!(json["person"], person_id.to_string());
    assert_eq!(json["occasion"]["kind"], "anniversary");
    assert_eq!(json["occasion"]["year"], serde_json::Value::Null);

    let decoded: Event = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, event);
}

#[test]
fn validation_covers_every_variant() {
    let cases = [
        (
            Occasion::Birthday {
                month: 0,
                day: 1,
                year: None,
            },
            OccasionValidationError::MonthOutOfRange(0),
        ),
        (
            Occasion::Anniversary {
                month: 4,
                day: 31,
                year: None,
            },
            OccasionValidationError::DayOutOfRange { month: 4, day: 31 },
        ),
        (
            Occasion::Holiday {
                holiday_id: String::new(),
            },
            OccasionValidationError::EmptyHolidayId,
        ),
    ];
    for (occasion, expected) in cases {
        assert_eq!(occasion.validate().unwrap_err(), expected);
    }
}

#[test]
fn notification_spec_serializes_all_fields() {
    let spec = NotificationSpec {
        id: "default".to_string(),
        title: "Ada's birthday".to_string(),
        message: "3 days away".to_string(),
        days_before: 0,
    };
    let json = serde_json::to_value(&spec).unwrap();
    assert_eq!(json["id"], "default");
    assert_eq!(json["title"], "Ada's birthday");
    assert_eq!(json["message"], "3 days away");
    assert_eq!(json["days_before"], 0);
}
