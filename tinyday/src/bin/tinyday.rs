use std::env;

use tinyday::{Context, Unit};

const DEFAULT_PATTERN: &str = "MMMM D, YYYY HH:mm";

fn main() {
    let mut args = env::args().skip(1);
    let raw = args.next().expect("Usage: ./tinyday <DATE> [PATTERN]");
    let pattern = args.next().unwrap_or_else(|| DEFAULT_PATTERN.to_string());
    let ctx = Context::default();
    println!(" - input: {raw}");

    let instant = match ctx.try_parse(&raw) {
        Ok(val) => val,
        Err(err) => {
            panic!("{err}");
        }
    };

    println!(" - instant: {instant:?}");
    println!(" - iso: {instant}");
    println!(" - formatted: {}", instant.format(&pattern));

    if let Some(millis) = instant.value_of() {
        println!(" - epoch millis: {millis}");
    }

    for unit in [Unit::Day, Unit::Month, Unit::Year] {
        println!("---");
        println!("{unit}:");
        println!(" - start: {}", instant.start_of(unit).format(&pattern));
        println!(" - end: {}", instant.end_of(unit).format(&pattern));
    }
}
