//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.

use arbitrary::Arbitrary;
use chrono::FixedOffset;

use std::fmt::Debug;

use crate::{Context, Instant, Unit};

const PATTERN: &str = "MMMM D, YYYY-MM-DD HH:mm";

/// What operation to perform on the input instant.
#[derive(Arbitrary, Clone, Debug)]
pub enum Operation {
    Add(i64, u8),
    Subtract(i64, u8),
    StartOf(u8),
    EndOf(u8),
    WithHour(i64),
    WithMinute(i64),
}

/// A fuzzing example
#[derive(Arbitrary, Clone, Debug)]
pub struct Data {
    pub millis: i64,
    pub offset_minutes: i16,
    pub raw: String,
    pub operation: Operation,
}

fn unit(index: u8) -> Unit {
    Unit::ALL[usize::from(index) % Unit::ALL.len()]
}

fn apply(instant: &Instant<FixedOffset>, operation: &Operation) -> Instant<FixedOffset> {
    match *operation {
        Operation::Add(amount, index) => instant.add(amount, unit(index)),
        Operation::Subtract(amount, index) => instant.subtract(amount, unit(index)),
        Operation::StartOf(index) => instant.start_of(unit(index)),
        Operation::EndOf(index) => instant.end_of(unit(index)),
        Operation::WithHour(hour) => instant.with_hour(hour),
        Operation::WithMinute(minute) => instant.with_minute(minute),
    }
}

/// Check invariants of instants built from arbitrary input, panics if one
/// doesn't hold. Returns `false` if the input was not relevant.
pub fn run_fuzz_instant(data: Data) -> bool {
    let offset_secs = i32::from(data.offset_minutes % (24 * 60)) * 60;

    let Some(offset) = FixedOffset::east_opt(offset_secs) else {
        return false;
    };

    let ctx = Context::new(offset);

    // Parsing must never panic, whatever the input.
    let parsed = ctx.parse(&data.raw);
    assert_eq!(parsed.format(PATTERN), parsed.format(PATTERN));

    let instant = ctx.from_millis(data.millis);

    if !instant.is_valid() {
        return false;
    }

    assert_eq!(instant.value_of(), Some(data.millis));

    let derived = apply(&instant, &data.operation);
    assert_eq!(instant.value_of(), Some(data.millis), "instant was mutated");

    if derived.is_valid() {
        assert_eq!(derived.format(PATTERN), derived.format(PATTERN));
    }

    for unit in [Unit::Day, Unit::Month, Unit::Year] {
        let start = instant.start_of(unit);
        let end = instant.end_of(unit);

        if start.is_valid() && end.is_valid() {
            assert!(start <= instant, "{start:?} is after {instant:?}");
            assert!(instant <= end, "{end:?} is before {instant:?}");
        }
    }

    true
}
