// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CalendarDate, DomainError, ScheduleTime};

#[test]
fn test_schedule_time_parses_and_round_trips_storage_form() {
    let parsed: ScheduleTime = ScheduleTime::parse("departure_time", " 2026-03-01 08:00 ").unwrap();
    assert_eq!(parsed.to_storage(), "2026-03-01 08:00");
    assert_eq!(parsed.to_string(), "2026-03-01 08:00");
}

#[test]
fn test_schedule_time_rejects_blank_as_missing() {
    let result: Result<ScheduleTime, DomainError> = ScheduleTime::parse("departure_time", "  ");
    assert_eq!(
        result,
        Err(DomainError::MissingField {
            field: "departure_time"
        })
    );
}

#[test]
fn test_schedule_time_rejects_seconds_and_garbage() {
    for value in ["2026-03-01 08:00:00", "01/03/2026 08:00", "tomorrow", "2026-13-01 08:00"] {
        let result = ScheduleTime::parse("arrival_time", value);
        assert!(
            matches!(result, Err(DomainError::InvalidTimestamp { field: "arrival_time", .. })),
            "{value} should be rejected"
        );
    }
}

#[test]
fn test_schedule_times_order_chronologically() {
    let early: ScheduleTime = ScheduleTime::parse("t", "2026-03-01 08:00").unwrap();
    let late: ScheduleTime = ScheduleTime::parse("t", "2026-03-01 18:30").unwrap();
    assert!(early < late);
    assert!(early.to_storage() < late.to_storage());
}

#[test]
fn test_now_has_minute_precision() {
    let now: String = ScheduleTime::now().to_storage();
    assert_eq!(now.len(), "YYYY-MM-DD HH:MM".len());
    assert!(ScheduleTime::parse("sold_at", &now).is_ok());
}

#[test]
fn test_calendar_date_parsing() {
    let date: CalendarDate = CalendarDate::parse("hire_date", "2020-02-29").unwrap();
    assert_eq!(date.to_storage(), "2020-02-29");

    let invalid = CalendarDate::parse("hire_date", "2021-02-29");
    assert!(matches!(invalid, Err(DomainError::InvalidDate { .. })));
}
