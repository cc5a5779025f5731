/// Tokens substituted by formatting patterns.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Token {
    /// `MMMM`: full English month name
    MonthName,
    /// `YYYY`: year, without padding
    Year,
    /// `MM`: month number, padded to 2 digits
    Month,
    /// `DD`: day of month, padded to 2 digits
    Day,
    /// `HH`: hour of day, padded to 2 digits
    Hour,
    /// `mm`: minute, padded to 2 digits
    Minute,
    /// `D`: day of month, without padding
    DayUnpadded,
}

impl Token {
    /// Tokens are substituted one after the other in this order, so that a
    /// token is always replaced before the shorter tokens it contains.
    pub const SUBSTITUTION_ORDER: [Self; 7] = [
        Self::MonthName,
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::DayUnpadded,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MonthName => "MMMM",
            Self::Year => "YYYY",
            Self::Month => "MM",
            Self::Day => "DD",
            Self::Hour => "HH",
            Self::Minute => "mm",
            Self::DayUnpadded => "D",
        }
    }
}
