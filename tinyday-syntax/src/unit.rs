use std::fmt::Display;
use std::str::FromStr;

use crate::error::Error;

#[cfg(feature = "log")]
static WARN_UNKNOWN_UNIT: std::sync::Once = std::sync::Once::new();

/// Granularity used for arithmetic, boundaries and comparisons.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Unit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl Unit {
    pub const ALL: [Self; 7] = [
        Self::Millisecond,
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Month,
        Self::Year,
    ];

    /// Singular lowercase name of this unit.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Millisecond => "millisecond",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Length of this unit in milliseconds, if it has a fixed length.
    ///
    /// ```
    /// use tinyday_syntax::Unit;
    ///
    /// assert_eq!(Unit::Hour.fixed_millis(), Some(3_600_000));
    /// assert_eq!(Unit::Month.fixed_millis(), None);
    /// ```
    pub fn fixed_millis(self) -> Option<i64> {
        match self {
            Self::Millisecond => Some(1),
            Self::Second => Some(1_000),
            Self::Minute => Some(60_000),
            Self::Hour => Some(3_600_000),
            Self::Day | Self::Month | Self::Year => None,
        }
    }
}

impl FromStr for Unit {
    type Err = Error;

    /// Singular and plural names are accepted, ignoring case.
    ///
    /// ```
    /// use tinyday_syntax::Unit;
    ///
    /// assert_eq!("Minutes".parse::<Unit>().unwrap(), Unit::Minute);
    /// assert!("fortnight".parse::<Unit>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let singular = lower.strip_suffix('s').unwrap_or(&lower);

        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str() == singular)
            .ok_or_else(|| Error::UnknownUnit(s.to_string()))
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Anything that can be used where a unit is expected.
///
/// Textual units are lenient: an unknown name resolves to `None`, which
/// turns unit-based operations into no-ops.
pub trait IntoUnit {
    fn into_unit(self) -> Option<Unit>;
}

impl IntoUnit for Unit {
    fn into_unit(self) -> Option<Unit> {
        Some(self)
    }
}

impl IntoUnit for Option<Unit> {
    fn into_unit(self) -> Option<Unit> {
        self
    }
}

impl IntoUnit for &str {
    fn into_unit(self) -> Option<Unit> {
        match self.parse() {
            Ok(unit) => Some(unit),
            Err(_err) => {
                #[cfg(feature = "log")]
                WARN_UNKNOWN_UNIT.call_once(|| log::warn!("Ignoring operation: {_err}"));
                None
            }
        }
    }
}

impl IntoUnit for &String {
    fn into_unit(self) -> Option<Unit> {
        self.as_str().into_unit()
    }
}

impl IntoUnit for String {
    fn into_unit(self) -> Option<Unit> {
        self.as_str().into_unit()
    }
}
