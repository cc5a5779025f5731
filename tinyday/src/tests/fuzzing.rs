use crate::fuzzing::{run_fuzz_instant, Data, Operation};

#[test]
fn no_fuzz_before_epoch() {
    assert!(run_fuzz_instant(Data {
        millis: -62_135_596_800_000,
        offset_minutes: -720,
        raw: "0001-01-01T00:00:00Z".to_string(),
        operation: Operation::EndOf(6),
    }));
}

#[test]
fn no_fuzz_overflowing_add() {
    assert!(run_fuzz_instant(Data {
        millis: 1_718_443_800_000,
        offset_minutes: 120,
        raw: "+275760-09-13".to_string(),
        operation: Operation::Add(i64::MAX, 5),
    }));
}

#[test]
fn no_fuzz_wrapped_offset() {
    assert!(run_fuzz_instant(Data {
        millis: 0,
        offset_minutes: i16::MIN,
        raw: "Mon, Feb 30 2024 25:61 PM".to_string(),
        operation: Operation::WithMinute(i64::MIN),
    }));
}

#[test]
fn no_fuzz_invalid_millis() {
    assert!(!run_fuzz_instant(Data {
        millis: i64::MAX,
        offset_minutes: 0,
        raw: String::new(),
        operation: Operation::StartOf(0),
    }));
}
