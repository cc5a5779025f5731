use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::str::FromStr;

use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeDelta, TimeZone, Timelike, Utc};

use tinyday_syntax::{Inclusivity, IntoUnit, Unit};

use crate::error::Error;
use crate::extension::Value;
use crate::format::{format_pattern, iso_string, INVALID_DATE};
use crate::localize::localize_wall_clock;
use crate::utils::dates::{
    add_days, add_months_overflowing, last_day_of_month, with_time_overflowing, LAST_MILLISECOND,
    MIDNIGHT,
};
use crate::Context;

/// An immutable point in time with millisecond resolution.
///
/// Calendar fields are read and written as wall-clock values in the timezone
/// of the [`Context`] the instant was built from. Every operation returns a
/// new instant and leaves the receiver untouched.
///
/// An instant may also be invalid, for example when it was parsed from an
/// unsupported string. Operations on an invalid instant produce invalid
/// instants, getters return `None` and comparisons are always false.
///
/// ```
/// use chrono::Utc;
/// use tinyday::{Context, Unit};
///
/// let ctx = Context::new(Utc);
/// let instant = ctx.parse("2024-06-15T10:30:00");
///
/// assert_eq!(instant.with_hour(5).format("HH:mm"), "05:30");
/// assert_eq!(instant.add(1, Unit::Month).format("YYYY-MM-DD"), "2024-07-15");
/// assert_eq!(instant.format("HH:mm"), "10:30");
/// ```
pub struct Instant<Tz: TimeZone = Local> {
    pub(crate) time: Option<DateTime<Utc>>,
    pub(crate) ctx: Context<Tz>,
}

impl Instant<Local> {
    /// Current time of the system clock, read in the local timezone.
    pub fn now() -> Self {
        Context::default().now()
    }

    /// Parse a date string in the local timezone, see [`Context::parse`].
    pub fn parse(raw: &str) -> Self {
        Context::default().parse(raw)
    }

    /// Build an instant from milliseconds since the Unix epoch, read in the
    /// local timezone.
    pub fn from_millis(millis: i64) -> Self {
        Context::default().from_millis(millis)
    }
}

impl<Tz: TimeZone> Instant<Tz> {
    // --
    // -- Low level helpers
    // --

    fn derive(&self, time: Option<DateTime<Utc>>) -> Self {
        self.ctx.instant(time)
    }

    fn local(&self) -> Option<DateTime<Tz>> {
        Some(self.time?.with_timezone(&self.ctx.tz))
    }

    /// Edit the wall-clock representation of this instant.
    fn map_wall_clock(&self, f: impl FnOnce(NaiveDateTime) -> Option<NaiveDateTime>) -> Self {
        let time = self
            .local()
            .and_then(|local| f(local.naive_local()))
            .and_then(|naive| localize_wall_clock(naive, &self.ctx.tz))
            .map(|local| local.with_timezone(&Utc));

        self.derive(time)
    }

    fn shift_millis(&self, millis: Option<i64>) -> Self {
        let time = self
            .time
            .zip(millis.and_then(TimeDelta::try_milliseconds))
            .and_then(|(time, delta)| time.checked_add_signed(delta));

        self.derive(time)
    }

    // --
    // -- Validity
    // --

    pub fn is_valid(&self) -> bool {
        self.time.is_some()
    }

    /// Fail if this instant is invalid.
    ///
    /// ```
    /// use chrono::Utc;
    /// use tinyday::Context;
    ///
    /// let ctx = Context::new(Utc);
    /// assert!(ctx.parse("2024-06-15").validate().is_ok());
    /// assert!(ctx.parse("2024-06-31").validate().is_err());
    /// ```
    pub fn validate(self) -> Result<Self, Error> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(Error::InvalidDate)
        }
    }

    /// Context this instant was built from.
    pub fn context(&self) -> &Context<Tz> {
        &self.ctx
    }

    pub fn locale(&self) -> &str {
        self.ctx.locale()
    }

    // --
    // -- Getters
    // --

    pub fn year(&self) -> Option<i32> {
        Some(self.local()?.year())
    }

    /// Month, from 0 for January to 11 for December.
    pub fn month(&self) -> Option<u32> {
        Some(self.local()?.month0())
    }

    /// Day of month, from 1 to 31.
    pub fn date(&self) -> Option<u32> {
        Some(self.local()?.day())
    }

    /// Day of week, from 0 for Sunday to 6 for Saturday.
    pub fn day(&self) -> Option<u32> {
        Some(self.local()?.weekday().num_days_from_sunday())
    }

    pub fn hour(&self) -> Option<u32> {
        Some(self.local()?.hour())
    }

    pub fn minute(&self) -> Option<u32> {
        Some(self.local()?.minute())
    }

    pub fn second(&self) -> Option<u32> {
        Some(self.local()?.second())
    }

    pub fn millisecond(&self) -> Option<u32> {
        Some(self.local()?.timestamp_subsec_millis())
    }

    // --
    // -- Field setters
    // --

    /// Set the hour of the day, other fields are kept.
    ///
    /// Values outside of `0..24` roll over adjacent days.
    ///
    /// ```
    /// use chrono::Utc;
    /// use tinyday::Context;
    ///
    /// let instant = Context::new(Utc).parse("2024-06-15T10:30:00");
    /// assert_eq!(instant.with_hour(25).format("YYYY-MM-DD HH:mm"), "2024-06-16 01:30");
    /// ```
    pub fn with_hour(&self, hour: i64) -> Self {
        self.map_wall_clock(|naive| {
            with_time_overflowing(
                naive.date(),
                hour,
                naive.minute().into(),
                naive.second().into(),
                (naive.nanosecond() / 1_000_000).into(),
            )
        })
    }

    /// Set the minute of the hour, other fields are kept.
    ///
    /// Values outside of `0..60` roll over adjacent hours.
    pub fn with_minute(&self, minute: i64) -> Self {
        self.map_wall_clock(|naive| {
            with_time_overflowing(
                naive.date(),
                naive.hour().into(),
                minute,
                naive.second().into(),
                (naive.nanosecond() / 1_000_000).into(),
            )
        })
    }

    // --
    // -- Arithmetic
    // --

    /// Move this instant by an amount of units.
    ///
    /// Units up to hours move the absolute time, while days move the
    /// calendar date and keep the wall-clock time. Months and years move the
    /// corresponding field and keep the day of month, overflowing into the
    /// next month when it doesn't exist.
    ///
    /// An unknown unit leaves the instant unchanged.
    ///
    /// ```
    /// use chrono::Utc;
    /// use tinyday::{Context, Unit};
    ///
    /// let instant = Context::new(Utc).parse("2024-01-31");
    /// assert_eq!(instant.add(1, Unit::Month).format("YYYY-MM-DD"), "2024-03-02");
    /// assert_eq!(instant.add(36, "hours").format("YYYY-MM-DD HH:mm"), "2024-02-01 12:00");
    /// assert_eq!(instant.add(1, "fortnight"), instant);
    /// ```
    pub fn add(&self, amount: i64, unit: impl IntoUnit) -> Self {
        let Some(unit) = unit.into_unit() else {
            return self.clone();
        };

        match unit {
            Unit::Millisecond | Unit::Second | Unit::Minute | Unit::Hour => {
                let unit_millis = unit.fixed_millis();
                self.shift_millis(unit_millis.and_then(|x| x.checked_mul(amount)))
            }
            Unit::Day => self.map_wall_clock(|naive| add_days(naive, amount)),
            Unit::Month => self.map_wall_clock(|naive| add_months_overflowing(naive, amount)),
            Unit::Year => {
                self.map_wall_clock(|naive| add_months_overflowing(naive, amount.checked_mul(12)?))
            }
        }
    }

    /// Move this instant backward by an amount of units, see [`Instant::add`].
    pub fn subtract(&self, amount: i64, unit: impl IntoUnit) -> Self {
        let Some(unit) = unit.into_unit() else {
            return self.clone();
        };

        match amount.checked_neg() {
            Some(amount) => self.add(amount, unit),
            None => self.derive(None),
        }
    }

    // --
    // -- Boundaries
    // --

    /// First instant of the day, month or year containing this instant.
    ///
    /// Any other unit leaves the instant unchanged.
    ///
    /// ```
    /// use chrono::Utc;
    /// use tinyday::Context;
    ///
    /// let instant = Context::new(Utc).parse("2024-02-10T15:45:12.345Z");
    /// assert_eq!(instant.start_of("month").to_string(), "2024-02-01T00:00:00.000Z");
    /// assert_eq!(instant.start_of("hour"), instant);
    /// ```
    pub fn start_of(&self, unit: impl IntoUnit) -> Self {
        match unit.into_unit() {
            Some(Unit::Day) => self.map_wall_clock(|naive| Some(naive.date().and_time(MIDNIGHT))),
            Some(Unit::Month) => {
                self.map_wall_clock(|naive| Some(naive.date().with_day(1)?.and_time(MIDNIGHT)))
            }
            Some(Unit::Year) => {
                self.map_wall_clock(|naive| Some(naive.date().with_ordinal(1)?.and_time(MIDNIGHT)))
            }
            _ => self.clone(),
        }
    }

    /// Last millisecond of the day, month or year containing this instant.
    ///
    /// Any other unit leaves the instant unchanged.
    ///
    /// ```
    /// use chrono::Utc;
    /// use tinyday::Context;
    ///
    /// let instant = Context::new(Utc).parse("2024-02-10T15:45:12.345Z");
    /// assert_eq!(instant.end_of("month").to_string(), "2024-02-29T23:59:59.999Z");
    /// ```
    pub fn end_of(&self, unit: impl IntoUnit) -> Self {
        match unit.into_unit() {
            Some(Unit::Day) => {
                self.map_wall_clock(|naive| Some(naive.date().and_time(LAST_MILLISECOND)))
            }
            Some(Unit::Month) => self.map_wall_clock(|naive| {
                Some(last_day_of_month(naive.date())?.and_time(LAST_MILLISECOND))
            }),
            Some(Unit::Year) => self.map_wall_clock(|naive| {
                Some(naive.date().with_month(12)?.with_day(31)?.and_time(LAST_MILLISECOND))
            }),
            _ => self.clone(),
        }
    }

    // --
    // -- Formatting
    // --

    /// Render this instant following a pattern, see
    /// [`format_pattern`](crate::format::format_pattern) for supported tokens.
    pub fn format(&self, pattern: &str) -> String {
        match self.local() {
            Some(local) => format_pattern(pattern, &local),
            None => INVALID_DATE.to_string(),
        }
    }

    // --
    // -- Comparisons
    // --

    /// Check if this instant is strictly before another.
    pub fn is_before(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Less)
    }

    /// Check if this instant is strictly after another.
    pub fn is_after(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Greater)
    }

    /// Check if two instants represent the exact same time.
    pub fn is_same(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }

    /// Check if two instants fall within the same day, month or year. Other
    /// units compare exact times.
    ///
    /// ```
    /// use chrono::Utc;
    /// use tinyday::{Context, Unit};
    ///
    /// let ctx = Context::new(Utc);
    /// let morning = ctx.parse("2024-06-15T08:00");
    /// let evening = ctx.parse("2024-06-15T20:00");
    /// assert!(morning.is_same_by(&evening, Unit::Day));
    /// assert!(!morning.is_same_by(&evening, Unit::Hour));
    /// ```
    pub fn is_same_by(&self, other: &Self, unit: impl IntoUnit) -> bool {
        let unit = unit.into_unit();
        self.start_of(unit).is_same(&other.start_of(unit))
    }

    /// Check if this instant lies between two other instants, given in any
    /// order.
    ///
    /// The unit is accepted for compatibility only and doesn't truncate any
    /// of the instants.
    ///
    /// ```
    /// use chrono::Utc;
    /// use tinyday::{Context, Inclusivity};
    ///
    /// let ctx = Context::new(Utc);
    /// let start = ctx.parse("2024-06-01");
    /// let end = ctx.parse("2024-06-20");
    ///
    /// assert!(ctx.parse("2024-06-15").is_between(&end, &start, None, "[]"));
    /// assert!(!start.is_between(&start, &end, None, Inclusivity::EXCLUSIVE));
    /// ```
    pub fn is_between(
        &self,
        start: &Self,
        end: &Self,
        _unit: Option<Unit>,
        inclusivity: impl Into<Inclusivity>,
    ) -> bool {
        let (Some(value), Some(start), Some(end)) = (self.time, start.time, end.time) else {
            return false;
        };

        let (lower, upper) = if start <= end { (start, end) } else { (end, start) };
        inclusivity.into().contains(&lower, &upper, &value)
    }

    // --
    // -- Conversions
    // --

    /// Get a copy of the inner date, in the timezone of this instant's
    /// context.
    pub fn to_date(&self) -> Option<DateTime<Tz>> {
        self.local()
    }

    /// Render the ISO 8601 representation of this instant in UTC.
    ///
    /// ```
    /// use tinyday::Instant;
    ///
    /// assert_eq!(Instant::from_millis(0).to_iso_string().unwrap(), "1970-01-01T00:00:00.000Z");
    /// assert!(Instant::parse("garbage").to_iso_string().is_err());
    /// ```
    pub fn to_iso_string(&self) -> Result<String, Error> {
        self.time.as_ref().map(iso_string).ok_or(Error::InvalidDate)
    }

    /// Number of milliseconds since the Unix epoch.
    pub fn value_of(&self) -> Option<i64> {
        Some(self.time?.timestamp_millis())
    }

    // --
    // -- Extensions
    // --

    /// Call a method registered by a plugin on this instant's context.
    ///
    /// Returns `None` if no method is registered with this name.
    pub fn call(&self, name: &str, args: &[Value<Tz>]) -> Option<Value<Tz>> {
        let method = self.ctx.extensions.get(name)?.clone();
        Some(method(self, args))
    }
}

// --
// -- Standard traits
// --

impl<Tz: TimeZone> Clone for Instant<Tz> {
    fn clone(&self) -> Self {
        self.derive(self.time)
    }
}

impl<Tz: TimeZone> PartialEq for Instant<Tz> {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl<Tz: TimeZone> PartialOrd for Instant<Tz> {
    /// Invalid instants can't be compared.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.time?.cmp(&other.time?))
    }
}

impl<Tz: TimeZone> Display for Instant<Tz> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.time {
            Some(time) => write!(f, "{}", iso_string(time)),
            None => write!(f, "{INVALID_DATE}"),
        }
    }
}

impl<Tz: TimeZone> Debug for Instant<Tz> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.local() {
            Some(local) => write!(f, "{local:?}"),
            None => write!(f, "{INVALID_DATE}"),
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Instant<Tz> {
    fn from(datetime: DateTime<Tz>) -> Self {
        Context::new(datetime.timezone()).from_datetime(&datetime)
    }
}

impl From<i64> for Instant<Local> {
    fn from(millis: i64) -> Self {
        Self::from_millis(millis)
    }
}

impl FromStr for Instant<Local> {
    type Err = Error;

    /// Strict parsing: unsupported strings are rejected instead of building
    /// an invalid instant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Context::default().try_parse(s)
    }
}
