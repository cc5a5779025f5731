use crate::{instant, Context, Inclusivity, Unit};

#[test]
fn before_and_after() {
    let early = instant!("2024-06-15T10:00:00Z");
    let late = instant!("2024-06-15T10:00:00.001Z");
    assert!(early.is_before(&late));
    assert!(!late.is_before(&early));
    assert!(!early.is_before(&early));
    assert!(late.is_after(&early));
    assert!(!early.is_after(&early));
    assert!(early < late);
}

#[test]
fn same() {
    let instant = instant!("2024-06-15T10:00:00Z");
    assert!(instant.is_same(&instant!("2024-06-15T12:00:00+02:00")));
    assert!(!instant.is_same(&instant!("2024-06-15T10:00:00.001Z")));
    assert_eq!(instant, instant!("2024-06-15T12:00:00+02:00"));
}

#[test]
fn same_by_unit() {
    let morning = instant!("2024-06-15T01:00:00");
    let evening = instant!("2024-06-15T23:00:00");
    let next_day = instant!("2024-06-16T00:00:00");
    assert!(morning.is_same_by(&evening, Unit::Day));
    assert!(!evening.is_same_by(&next_day, Unit::Day));
    assert!(evening.is_same_by(&next_day, Unit::Month));
    assert!(morning.is_same_by(&instant!("2024-01-01"), "year"));
    assert!(!morning.is_same_by(&instant!("2023-12-31"), "year"));

    // Units without boundaries compare exact times
    assert!(!morning.is_same_by(&evening, Unit::Hour));
    assert!(!morning.is_same_by(&evening, "fortnight"));
    assert!(morning.is_same_by(&morning.clone(), Unit::Hour));
}

#[test]
fn between_reversed_bounds() {
    let instant = instant!("2024-06-15");
    let start = instant!("2024-06-01");
    let end = instant!("2024-06-20");
    assert!(instant.is_between(&end, &start, None, "[]"));
    assert!(instant.is_between(&start, &end, None, "[]"));
    assert!(instant.is_between(&end, &start, None, Inclusivity::default()));
    assert!(!start.is_between(&end, &instant, None, "[]"));
}

#[test]
fn between_inclusivity() {
    let start = instant!("2024-06-01");
    let end = instant!("2024-06-20");

    assert!(!start.is_between(&start, &end, None, "()"));
    assert!(start.is_between(&start, &end, None, "[)"));
    assert!(!start.is_between(&start, &end, None, "(]"));
    assert!(!end.is_between(&start, &end, None, "[)"));
    assert!(end.is_between(&start, &end, None, "(]"));
    assert!(end.is_between(&end, &start, None, "[]"));
    assert!(!end.is_between(&start, &end, None, ""));
}

#[test]
fn between_ignores_unit() {
    let instant = instant!("2024-06-01T10:00:00");
    let start = instant!("2024-06-01T12:00:00");
    let end = instant!("2024-06-20T12:00:00");
    assert!(!instant.is_between(&start, &end, Some(Unit::Day), "[]"));
}

#[test]
fn between_empty_interval() {
    let instant = instant!("2024-06-01");
    assert!(instant.is_between(&instant, &instant, None, "[]"));
    assert!(!instant.is_between(&instant, &instant, None, "[)"));
}

#[test]
fn invalid_comparisons() {
    let valid = instant!("2024-06-15");
    let invalid = Context::new(chrono::Utc).invalid();
    assert!(!invalid.is_before(&valid));
    assert!(!valid.is_before(&invalid));
    assert!(!invalid.is_after(&valid));
    assert!(!invalid.is_same(&invalid));
    assert!(!invalid.is_same_by(&invalid, Unit::Day));
    assert!(!valid.is_between(&invalid, &valid, None, "[]"));
    assert!(!invalid.is_between(&valid, &valid, None, "[]"));
    assert_ne!(invalid, invalid.clone());
    assert_eq!(invalid.partial_cmp(&valid), None);
}
