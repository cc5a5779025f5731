#![no_main]
use chrono::{Datelike, Timelike};
use libfuzzer_sys::fuzz_target;
use tinyday_syntax::{parse, Zone};

fuzz_target!(|data: &str| {
    let Ok(parsed) = parse(data) else {
        return;
    };

    let datetime = parsed.datetime;
    assert!((1..=12).contains(&datetime.month()), "{data:?} -> {datetime}");
    assert_eq!(datetime.nanosecond() % 1_000_000, 0, "{data:?} -> {datetime}");

    if let Zone::Fixed(secs) = parsed.zone {
        assert!(secs.abs() < 24 * 3600, "{data:?} -> offset {secs}");
    }
});
