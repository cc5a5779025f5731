use std::fmt::Display;

/// Whether each bound of an interval belongs to it.
///
/// It is built from a two-characters specifier where the first character is
/// `[` for an inclusive lower bound and the last character is `]` for an
/// inclusive upper bound. Any other character makes the bound exclusive.
///
/// ```
/// use tinyday_syntax::Inclusivity;
///
/// assert_eq!(Inclusivity::from("[)"), Inclusivity::new(true, false));
/// assert_eq!(Inclusivity::from("(]"), Inclusivity::new(false, true));
/// assert_eq!(Inclusivity::default(), Inclusivity::from("()"));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Inclusivity {
    pub lower: bool,
    pub upper: bool,
}

impl Inclusivity {
    pub const EXCLUSIVE: Self = Self::new(false, false);
    pub const INCLUSIVE: Self = Self::new(true, true);

    pub const fn new(lower: bool, upper: bool) -> Self {
        Self { lower, upper }
    }

    /// Check if `value` lies between `lower` and `upper`, which must already
    /// be ordered.
    ///
    /// ```
    /// use tinyday_syntax::Inclusivity;
    ///
    /// assert!(Inclusivity::INCLUSIVE.contains(&1, &3, &3));
    /// assert!(!Inclusivity::EXCLUSIVE.contains(&1, &3, &3));
    /// assert!(Inclusivity::EXCLUSIVE.contains(&1, &3, &2));
    /// ```
    pub fn contains<T: PartialOrd>(self, lower: &T, upper: &T, value: &T) -> bool {
        let above_lower = if self.lower { value >= lower } else { value > lower };
        let below_upper = if self.upper { value <= upper } else { value < upper };
        above_lower && below_upper
    }
}

impl From<&str> for Inclusivity {
    fn from(spec: &str) -> Self {
        Self {
            lower: spec.starts_with('['),
            upper: spec.ends_with(']'),
        }
    }
}

impl Display for Inclusivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lower = if self.lower { '[' } else { '(' };
        let upper = if self.upper { ']' } else { ')' };
        write!(f, "{lower}{upper}")
    }
}
