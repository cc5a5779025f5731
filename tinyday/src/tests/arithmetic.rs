use chrono::TimeZone;
use chrono_tz::Europe::Paris;

use crate::{instant, iso, Instant, Unit};

#[test]
fn fixed_units() {
    let instant = instant!("2024-06-15T10:30:00Z");
    assert_eq!(iso!(instant.add(1500, Unit::Millisecond)), "2024-06-15T10:30:01.500Z");
    assert_eq!(iso!(instant.add(90, Unit::Second)), "2024-06-15T10:31:30.000Z");
    assert_eq!(iso!(instant.add(90, Unit::Minute)), "2024-06-15T12:00:00.000Z");
    assert_eq!(iso!(instant.add(-11, Unit::Hour)), "2024-06-14T23:30:00.000Z");
}

#[test]
fn textual_units() {
    let instant = instant!("2024-06-15T10:30:00Z");
    assert_eq!(instant.add(2, "days"), instant.add(2, Unit::Day));
    assert_eq!(instant.subtract(3, "Month"), instant.subtract(3, Unit::Month));
    assert_eq!(instant.add(1, String::from("year")), instant.add(1, Unit::Year));
}

#[test]
fn unknown_unit_is_noop() {
    let instant = instant!("2024-06-15T10:30:00Z");
    assert_eq!(instant.add(3, "fortnight"), instant);
    assert_eq!(instant.subtract(3, "week"), instant);
    assert_eq!(instant.add(3, None::<Unit>), instant);
    assert_eq!(instant.subtract(i64::MIN, "fortnight"), instant);
    assert!(instant.subtract(i64::MIN, "fortnight").is_valid());
}

#[test]
fn month_overflow() {
    assert_eq!(iso!(instant!("2024-01-31").add(1, Unit::Month)), "2024-03-02T00:00:00.000Z");
    assert_eq!(iso!(instant!("2023-01-31").add(1, Unit::Month)), "2023-03-03T00:00:00.000Z");

    assert_eq!(
        iso!(instant!("2024-03-31").subtract(1, Unit::Month)),
        "2024-03-02T00:00:00.000Z"
    );

    assert_eq!(iso!(instant!("2024-08-31").add(1, Unit::Month)), "2024-10-01T00:00:00.000Z");
}

#[test]
fn year_overflow() {
    assert_eq!(iso!(instant!("2024-02-29").add(1, Unit::Year)), "2025-03-01T00:00:00.000Z");
    assert_eq!(iso!(instant!("2024-02-29").add(4, Unit::Year)), "2028-02-29T00:00:00.000Z");
    assert_eq!(iso!(instant!("2024-06-15").subtract(30, Unit::Year)), "1994-06-15T00:00:00.000Z");
}

#[test]
fn months_across_years() {
    let instant = instant!("2024-11-15T08:00:00");
    assert_eq!(iso!(instant.add(3, Unit::Month)), "2025-02-15T08:00:00.000Z");
    assert_eq!(iso!(instant.subtract(23, Unit::Month)), "2022-12-15T08:00:00.000Z");
}

#[test]
fn days_keep_wall_clock_across_dst() {
    // Clocks go forward on 2024-03-31 in Paris.
    let instant = instant!("2024-03-30T12:00:00", Paris);
    assert_eq!(iso!(instant.add(1, Unit::Day)), "2024-03-31T10:00:00.000Z");
    assert_eq!(iso!(instant.add(24, Unit::Hour)), "2024-03-31T11:00:00.000Z");
    assert_eq!(instant.add(1, Unit::Day).format("HH:mm"), "12:00");
}

#[test]
fn days_into_skipped_time() {
    let instant = instant!("2024-03-30T02:30:00", Paris);
    assert_eq!(iso!(instant.add(1, Unit::Day)), "2024-03-31T01:30:00.000Z");
    assert_eq!(instant.add(1, Unit::Day).format("HH:mm"), "03:30");
}

fn check_add_subtract_inverse<Tz: TimeZone>(instant: &Instant<Tz>) {
    for unit in Unit::ALL {
        for amount in [-25, -1, 0, 1, 7, 11] {
            assert_eq!(
                instant.add(amount, unit).subtract(amount, unit).value_of(),
                instant.value_of(),
                "{instant:?} +/- {amount} {unit}",
            );
        }
    }
}

#[test]
fn add_subtract_inverse() {
    check_add_subtract_inverse(&instant!("2024-06-15T10:30:45.123"));
    check_add_subtract_inverse(&instant!("1999-12-15T23:59:59.999"));
    check_add_subtract_inverse(&instant!("2024-03-20T12:00:00", Paris));
}

#[test]
fn arithmetic_is_immutable() {
    let instant = instant!("2024-01-31T10:30:00");
    let before = instant.value_of();

    for unit in Unit::ALL {
        let _ = instant.add(5, unit);
        let _ = instant.subtract(5, unit);
    }

    assert_eq!(instant.value_of(), before);
}

#[test]
fn overflowing_amounts() {
    let instant = instant!("2024-06-15T10:30:00");
    assert!(!instant.add(i64::MAX, Unit::Second).is_valid());
    assert!(!instant.add(i64::MAX, Unit::Year).is_valid());
    assert!(!instant.subtract(i64::MIN, Unit::Day).is_valid());
    assert!(!instant.add(1_000_000, Unit::Year).is_valid());
}
