use chrono::{DateTime, Datelike, Timelike, Utc};

use tinyday_syntax::Token;

/// English month names, indexed from January.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Rendering of an invalid instant.
pub const INVALID_DATE: &str = "Invalid Date";

/// Substitute all tokens in a pattern with the fields of a date.
///
/// Tokens are replaced globally one after the other, following
/// [`Token::SUBSTITUTION_ORDER`]. There is no escaping: text produced by a
/// substitution may still be matched by a later token.
///
/// ```
/// use chrono::NaiveDate;
/// use tinyday::format::format_pattern;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(7, 4, 0).unwrap();
/// assert_eq!(format_pattern("MMMM D, YYYY", &date), "March 5, 2024");
/// assert_eq!(format_pattern("DD/MM HH:mm", &date), "05/03 07:04");
/// ```
pub fn format_pattern<T: Datelike + Timelike>(pattern: &str, time: &T) -> String {
    Token::SUBSTITUTION_ORDER
        .into_iter()
        .fold(pattern.to_string(), |acc, token| {
            if acc.contains(token.as_str()) {
                acc.replace(token.as_str(), &render_token(token, time))
            } else {
                acc
            }
        })
}

fn render_token<T: Datelike + Timelike>(token: Token, time: &T) -> String {
    match token {
        Token::MonthName => MONTH_NAMES[time.month0() as usize].to_string(),
        Token::Year => time.year().to_string(),
        Token::Month => format!("{:02}", time.month()),
        Token::Day => format!("{:02}", time.day()),
        Token::Hour => format!("{:02}", time.hour()),
        Token::Minute => format!("{:02}", time.minute()),
        Token::DayUnpadded => time.day().to_string(),
    }
}

/// Render an ISO 8601 string in UTC with millisecond precision.
///
/// Years that don't fit on four digits use the expanded six digits form.
///
/// ```
/// use chrono::DateTime;
/// use tinyday::format::iso_string;
///
/// let epoch = DateTime::from_timestamp_millis(0).unwrap();
/// assert_eq!(iso_string(&epoch), "1970-01-01T00:00:00.000Z");
/// ```
pub fn iso_string(time: &DateTime<Utc>) -> String {
    let year = time.year();

    let year = if (0..=9999).contains(&year) {
        format!("{year:04}")
    } else {
        format!("{year:+07}")
    };

    format!(
        "{year}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        time.month(),
        time.day(),
        time.hour(),
        time.minute(),
        time.second(),
        time.timestamp_subsec_millis(),
    )
}
