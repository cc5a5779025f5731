use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use pest::iterators::Pair;
use pest::Parser;

use crate::error::{Error, Result};

const MIDNIGHT: NaiveTime = NaiveTime::from_hms_opt(0, 0, 0).unwrap();

const MONTH_PREFIXES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct DateParser;

/// How the wall-clock part of a parsed date must be anchored to an absolute
/// time.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Zone {
    /// The date is expressed in UTC.
    Utc,
    /// The date is expressed with an explicit offset, in seconds east of UTC.
    Fixed(i32),
    /// No zone was given: the date is a wall-clock time in the timezone of
    /// whoever evaluates it.
    Local,
}

/// Output of the date string parser.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ParsedDateTime {
    pub datetime: NaiveDateTime,
    pub zone: Zone,
}

/// Parse a date string.
///
/// ISO 8601 dates without a time component are anchored to UTC while any
/// other input with no explicit zone is a local wall-clock time.
///
/// ```
/// use tinyday_syntax::{parse, Zone};
///
/// assert_eq!(parse("2024-03-15").unwrap().zone, Zone::Utc);
/// assert_eq!(parse("2024-03-15T08:00").unwrap().zone, Zone::Local);
/// assert_eq!(parse("March 15, 2024").unwrap().zone, Zone::Local);
/// assert!(parse("2024-02-30").is_err());
/// ```
pub fn parse(data: &str) -> Result<ParsedDateTime> {
    let date_pair = DateParser::parse(Rule::input_date, data)
        .map_err(Error::from)?
        .next()
        .expect("grammar error: no date found");

    match date_pair.as_rule() {
        Rule::iso_date_time => build_iso_date_time(date_pair),
        Rule::legacy_date_time => build_legacy_date_time(date_pair),
        other => unexpected_token(other, Rule::input_date),
    }
}

fn unexpected_token<T>(token: Rule, parent: Rule) -> T {
    unreachable!("Grammar error: found `{token:?}` inside of `{parent:?}`")
}

// ---
// --- ISO 8601
// ---

fn build_iso_date_time(pair: Pair<Rule>) -> Result<ParsedDateTime> {
    assert_eq!(pair.as_rule(), Rule::iso_date_time);
    let mut pairs = pair.into_inner();
    let date = build_iso_date(pairs.next().expect("empty ISO date"))?;

    let Some(time_pair) = pairs.next() else {
        return Ok(ParsedDateTime { datetime: date.and_time(MIDNIGHT), zone: Zone::Utc });
    };

    let datetime = build_time(date, time_pair)?;
    let zone = pairs.next().map(build_zone).transpose()?.unwrap_or(Zone::Local);
    Ok(ParsedDateTime { datetime, zone })
}

fn build_iso_date(pair: Pair<Rule>) -> Result<NaiveDate> {
    assert_eq!(pair.as_rule(), Rule::iso_date);
    let mut pairs = pair.into_inner();
    let year = build_iso_year(pairs.next().expect("missing year in ISO date"))?;

    let month = pairs
        .next()
        .map(|pair| parse_digits(&pair, "month"))
        .transpose()?
        .unwrap_or(1);

    let day = pairs
        .next()
        .map(|pair| parse_digits(&pair, "day"))
        .transpose()?
        .unwrap_or(1);

    build_date(year, month, day)
}

fn build_iso_year(pair: Pair<Rule>) -> Result<i32> {
    assert_eq!(pair.as_rule(), Rule::iso_year);

    // Year zero has a single representation.
    if pair.as_str() == "-000000" {
        return Err(Error::OutOfRange { field: "year", value: 0 });
    }

    pair.as_str()
        .parse()
        .map_err(|_| Error::OutOfRange { field: "year", value: i64::MAX })
}

// ---
// --- Legacy textual dates
// ---

fn build_legacy_date_time(pair: Pair<Rule>) -> Result<ParsedDateTime> {
    assert_eq!(pair.as_rule(), Rule::legacy_date_time);
    let mut pairs = pair.into_inner().peekable();

    // The weekday is informative only, it is never checked against the date.
    pairs.next_if(|pair| pair.as_rule() == Rule::weekday);

    let date = build_legacy_date(pairs.next().expect("missing date in legacy date"))?;
    let mut datetime = date.and_time(MIDNIGHT);
    let mut zone = Zone::Local;

    for pair in pairs {
        match pair.as_rule() {
            Rule::legacy_time => datetime = build_time(date, pair)?,
            Rule::zone => zone = build_zone(pair)?,
            other => unexpected_token(other, Rule::legacy_date_time),
        }
    }

    Ok(ParsedDateTime { datetime, zone })
}

fn build_legacy_date(pair: Pair<Rule>) -> Result<NaiveDate> {
    assert_eq!(pair.as_rule(), Rule::legacy_date);
    let pair = pair.into_inner().next().expect("empty legacy date");
    let parent = pair.as_rule();
    let mut year = None;
    let mut month = None;
    let mut day = None;

    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::month_name => month = Some(build_month_name(&part)),
            Rule::loose_month => month = Some(parse_digits(&part, "month")?),
            Rule::loose_day => day = Some(parse_digits(&part, "day")?),
            Rule::loose_year => year = Some(build_loose_year(&part)?),
            other => unexpected_token(other, parent),
        }
    }

    build_date(
        year.expect("missing year in legacy date"),
        month.expect("missing month in legacy date"),
        day.expect("missing day in legacy date"),
    )
}

fn build_month_name(pair: &Pair<Rule>) -> u32 {
    assert_eq!(pair.as_rule(), Rule::month_name);
    let prefix = pair.as_str()[..3].to_ascii_lowercase();

    let index = MONTH_PREFIXES
        .iter()
        .position(|name| *name == prefix)
        .expect("grammar error: unknown month name");

    u32::try_from(index).expect("month index overflow") + 1
}

fn build_loose_year(pair: &Pair<Rule>) -> Result<i32> {
    assert_eq!(pair.as_rule(), Rule::loose_year);
    let value = parse_digits(pair, "year")?;

    let year = match (pair.as_str().len(), value) {
        (2, 0..=49) => 2000 + value,
        (2, _) => 1900 + value,
        _ => value,
    };

    Ok(year.try_into().expect("year with at most 4 digits overflowed"))
}

// ---
// --- Shared components
// ---

fn build_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    if NaiveDate::from_ymd_opt(year, 1, 1).is_none() {
        return Err(Error::OutOfRange { field: "year", value: year.into() });
    }

    if !(1..=12).contains(&month) {
        return Err(Error::OutOfRange { field: "month", value: month.into() });
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(Error::OutOfRange { field: "day", value: day.into() })
}

fn build_time(date: NaiveDate, pair: Pair<Rule>) -> Result<NaiveDateTime> {
    let parent = pair.as_rule();
    let mut hour = 0;
    let mut minute = 0;
    let mut second = 0;
    let mut milli = 0;
    let mut is_pm = None;

    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::hour | Rule::loose_hour => hour = parse_digits(&part, "hour")?,
            Rule::minute => minute = parse_digits(&part, "minute")?,
            Rule::second => second = parse_digits(&part, "second")?,
            Rule::fraction => milli = build_fraction(&part),
            Rule::meridiem => is_pm = Some(part.as_str().eq_ignore_ascii_case("pm")),
            other => unexpected_token(other, parent),
        }
    }

    if let Some(is_pm) = is_pm {
        if !(1..=12).contains(&hour) {
            return Err(Error::OutOfRange { field: "hour", value: hour.into() });
        }

        hour = hour % 12 + if is_pm { 12 } else { 0 };
    }

    if hour == 24 && minute == 0 && second == 0 && milli == 0 {
        let next_day = date
            .succ_opt()
            .ok_or(Error::OutOfRange { field: "hour", value: 24 })?;

        return Ok(next_day.and_time(MIDNIGHT));
    }

    for (field, value, max) in [("hour", hour, 23), ("minute", minute, 59), ("second", second, 59)] {
        if value > max {
            return Err(Error::OutOfRange { field, value: value.into() });
        }
    }

    let time = NaiveTime::from_hms_milli_opt(hour, minute, second, milli)
        .ok_or(Error::OutOfRange { field: "time", value: milli.into() })?;

    Ok(date.and_time(time))
}

/// Keep millisecond precision, extra digits are truncated.
fn build_fraction(pair: &Pair<Rule>) -> u32 {
    assert_eq!(pair.as_rule(), Rule::fraction);

    pair.as_str()
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(3)
        .fold(0, |acc, digit| 10 * acc + u32::from(digit - b'0'))
}

fn build_zone(pair: Pair<Rule>) -> Result<Zone> {
    assert_eq!(pair.as_rule(), Rule::zone);
    let mut zone = Zone::Utc;

    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::utc_zone => {}
            Rule::offset => zone = Zone::Fixed(build_offset(part)?),
            other => unexpected_token(other, Rule::zone),
        }
    }

    Ok(zone)
}

fn build_offset(pair: Pair<Rule>) -> Result<i32> {
    assert_eq!(pair.as_rule(), Rule::offset);
    let mut pairs = pair.into_inner();
    let sign = if pairs.next().expect("missing offset sign").as_str() == "-" { -1 } else { 1 };
    let hours = parse_digits(&pairs.next().expect("missing offset hours"), "offset hours")?;
    let minutes = parse_digits(&pairs.next().expect("missing offset minutes"), "offset minutes")?;

    if hours > 23 {
        return Err(Error::OutOfRange { field: "offset hours", value: hours.into() });
    }

    if minutes > 59 {
        return Err(Error::OutOfRange { field: "offset minutes", value: minutes.into() });
    }

    // Both components are bounded above so this cannot overflow.
    let seconds = i32::try_from(3600 * hours + 60 * minutes).expect("offset overflow");
    Ok(sign * seconds)
}

fn parse_digits(pair: &Pair<Rule>, field: &'static str) -> Result<u32> {
    pair.as_str()
        .parse()
        .map_err(|_| Error::OutOfRange { field, value: i64::MAX })
}
