use chrono::TimeZone;
use chrono_tz::Europe::Paris;

use crate::{instant, iso, Instant, Unit};

#[test]
fn start_of() {
    let instant = instant!("2024-02-10T15:45:12.345Z");
    assert_eq!(iso!(instant.start_of(Unit::Day)), "2024-02-10T00:00:00.000Z");
    assert_eq!(iso!(instant.start_of(Unit::Month)), "2024-02-01T00:00:00.000Z");
    assert_eq!(iso!(instant.start_of(Unit::Year)), "2024-01-01T00:00:00.000Z");
}

#[test]
fn end_of() {
    let instant = instant!("2024-02-10T15:45:12.345Z");
    assert_eq!(iso!(instant.end_of(Unit::Day)), "2024-02-10T23:59:59.999Z");
    assert_eq!(iso!(instant.end_of(Unit::Month)), "2024-02-29T23:59:59.999Z");
    assert_eq!(iso!(instant.end_of(Unit::Year)), "2024-12-31T23:59:59.999Z");
}

#[test]
fn end_of_month_lengths() {
    let end_of_month = |raw| iso!(instant!(raw).end_of("month"));
    assert_eq!(end_of_month("2023-02-10"), "2023-02-28T23:59:59.999Z");
    assert_eq!(end_of_month("2024-04-30"), "2024-04-30T23:59:59.999Z");
    assert_eq!(end_of_month("2024-12-01"), "2024-12-31T23:59:59.999Z");
    assert_eq!(end_of_month("2100-02-01"), "2100-02-28T23:59:59.999Z");
}

#[test]
fn other_units_are_noop() {
    let instant = instant!("2024-02-10T15:45:12.345Z");

    for unit in [Unit::Millisecond, Unit::Second, Unit::Minute, Unit::Hour] {
        assert_eq!(instant.start_of(unit), instant);
        assert_eq!(instant.end_of(unit), instant);
    }

    assert_eq!(instant.start_of("week"), instant);
    assert_eq!(instant.end_of("quarter"), instant);
}

#[test]
fn boundaries_in_local_time() {
    // 02:30 on July 1st in Paris.
    let instant = instant!("2024-07-01T00:30:00Z", Paris);
    assert_eq!(iso!(instant.start_of(Unit::Day)), "2024-06-30T22:00:00.000Z");
    assert_eq!(iso!(instant.end_of(Unit::Day)), "2024-07-01T21:59:59.999Z");
    assert_eq!(iso!(instant.start_of(Unit::Month)), "2024-06-30T22:00:00.000Z");
    assert_eq!(iso!(instant.start_of(Unit::Year)), "2023-12-31T23:00:00.000Z");
}

fn check_containment<Tz: TimeZone>(instant: &Instant<Tz>) {
    for unit in [Unit::Day, Unit::Month, Unit::Year] {
        let start = instant.start_of(unit);
        let end = instant.end_of(unit);
        assert!(start <= *instant, "{start:?} > {instant:?}");
        assert!(*instant <= end, "{instant:?} > {end:?}");
        assert!(instant.is_same_by(&start, unit));
        assert!(instant.is_same_by(&end, unit));
    }
}

#[test]
fn containment() {
    check_containment(&instant!("2024-02-10T15:45:12.345Z"));
    check_containment(&instant!("2024-02-10T00:00:00.000Z"));
    check_containment(&instant!("2024-02-10T23:59:59.999Z"));
    check_containment(&instant!("2024-03-31T03:15:00", Paris));
    check_containment(&instant!("2024-10-27T02:30:00", Paris));
}

#[test]
fn boundaries_are_immutable() {
    let instant = instant!("2024-02-10T15:45:12.345Z");
    let before = instant.value_of();
    let _ = instant.start_of(Unit::Month);
    let _ = instant.end_of(Unit::Year);
    assert_eq!(instant.value_of(), before);
}
