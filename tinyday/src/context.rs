use std::fmt::Debug;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};

use tinyday_syntax::Zone;

use crate::error::Error;
use crate::extension::{Extensions, Plugin};
use crate::localize::localize_wall_clock;
use crate::Instant;

/// Name of the locale attached to new contexts.
pub const DEFAULT_LOCALE: &str = "en";

/// All the context attached to instants and that can alter how they are
/// read: the timezone used for wall-clock fields, a locale name and the
/// methods registered by plugins.
///
/// Note that the locale is informative only: formatting is always rendered
/// in English.
pub struct Context<Tz: TimeZone = Local> {
    pub(crate) tz: Tz,
    pub(crate) locale: Arc<str>,
    pub(crate) extensions: Arc<Extensions<Tz>>,
}

impl<Tz: TimeZone> Context<Tz> {
    /// Create a context that reads wall-clock fields in given timezone.
    ///
    /// ```
    /// use chrono::FixedOffset;
    /// use tinyday::Context;
    ///
    /// let ctx = Context::new(FixedOffset::east_opt(3600).unwrap());
    /// assert_eq!(ctx.parse("2024-06-15T10:30").hour(), Some(10));
    /// assert_eq!(ctx.parse("2024-06-15T10:30Z").hour(), Some(11));
    /// ```
    pub fn new(tz: Tz) -> Self {
        Self {
            tz,
            locale: DEFAULT_LOCALE.into(),
            extensions: Default::default(),
        }
    }

    // --
    // -- Builder Methods
    // --

    /// Attach a new locale name to this context, no validation is performed.
    ///
    /// ```
    /// use tinyday::Context;
    ///
    /// assert_eq!(Context::default().locale(), "en");
    /// assert_eq!(Context::default().with_locale("fr").locale(), "fr");
    /// ```
    pub fn with_locale(self, locale: &str) -> Self {
        Self { locale: locale.into(), ..self }
    }

    /// Run a plugin on this context, see [`Plugin`].
    ///
    /// Instants created before the plugin is installed are not affected.
    pub fn extend<P: Plugin<Tz>>(mut self, plugin: P) -> Self {
        let mut extensions = Extensions::clone(&self.extensions);
        plugin.install(&mut extensions, &self);

        #[cfg(feature = "log")]
        log::debug!("Installed plugin, available extensions: {extensions:?}");

        self.extensions = Arc::new(extensions);
        self
    }

    // --
    // -- Getters
    // --

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn timezone(&self) -> &Tz {
        &self.tz
    }

    pub fn extensions(&self) -> &Extensions<Tz> {
        &self.extensions
    }

    // --
    // -- Instant constructors
    // --

    /// Instants are stored with millisecond resolution.
    pub(crate) fn instant(&self, time: Option<DateTime<Utc>>) -> Instant<Tz> {
        let time = time.and_then(|time| DateTime::from_timestamp_millis(time.timestamp_millis()));
        Instant { time, ctx: self.clone() }
    }

    /// Current time of the system clock.
    pub fn now(&self) -> Instant<Tz> {
        self.instant(Some(Utc::now()))
    }

    /// Build an instant from a number of milliseconds since the Unix epoch.
    ///
    /// ```
    /// use chrono::Utc;
    /// use tinyday::Context;
    ///
    /// let ctx = Context::new(Utc);
    /// assert_eq!(ctx.from_millis(0).to_string(), "1970-01-01T00:00:00.000Z");
    /// assert!(!ctx.from_millis(i64::MAX).is_valid());
    /// ```
    pub fn from_millis(&self, millis: i64) -> Instant<Tz> {
        self.instant(DateTime::from_timestamp_millis(millis))
    }

    /// Build an instant at the same absolute time as a date in any timezone.
    pub fn from_datetime<T: TimeZone>(&self, datetime: &DateTime<T>) -> Instant<Tz> {
        self.instant(Some(datetime.with_timezone(&Utc)))
    }

    /// Build an instant from a wall-clock time in this context's timezone.
    pub fn from_naive_local(&self, naive: NaiveDateTime) -> Instant<Tz> {
        self.instant(localize_wall_clock(naive, &self.tz).map(|dt| dt.with_timezone(&Utc)))
    }

    /// An instant that doesn't represent any date.
    pub fn invalid(&self) -> Instant<Tz> {
        self.instant(None)
    }

    /// Parse a date string, returning an invalid instant if the input is not
    /// supported.
    ///
    /// ```
    /// use chrono::Utc;
    /// use tinyday::Context;
    ///
    /// let ctx = Context::new(Utc);
    /// assert!(ctx.parse("2024-03-15").is_valid());
    /// assert!(!ctx.parse("the ides of march").is_valid());
    /// ```
    pub fn parse(&self, raw: &str) -> Instant<Tz> {
        match self.try_parse(raw) {
            Ok(instant) => instant,
            Err(_err) => {
                #[cfg(feature = "log")]
                log::warn!("Invalid date `{raw}`: {_err}");

                self.invalid()
            }
        }
    }

    /// Parse a date string, failing if the input is not supported.
    pub fn try_parse(&self, raw: &str) -> Result<Instant<Tz>, Error> {
        let parsed = tinyday_syntax::parse(raw)?;

        let time = match parsed.zone {
            Zone::Utc => Some(Utc.from_utc_datetime(&parsed.datetime)),
            Zone::Fixed(secs) => FixedOffset::east_opt(secs)
                .and_then(|offset| offset.from_local_datetime(&parsed.datetime).single())
                .map(|dt| dt.with_timezone(&Utc)),
            Zone::Local => {
                localize_wall_clock(parsed.datetime, &self.tz).map(|dt| dt.with_timezone(&Utc))
            }
        };

        time.map(|time| self.instant(Some(time))).ok_or(Error::InvalidDate)
    }
}

impl Default for Context<Local> {
    fn default() -> Self {
        Self::new(Local)
    }
}

#[cfg(feature = "tz")]
impl Context<chrono_tz::Tz> {
    /// Create a context from the name of an IANA timezone.
    ///
    /// ```
    /// use tinyday::Context;
    ///
    /// let ctx = Context::from_tz_name("Europe/Paris").unwrap();
    /// assert_eq!(ctx.parse("2024-06-15T10:30").to_string(), "2024-06-15T08:30:00.000Z");
    /// assert!(Context::from_tz_name("Mars/Olympus_Mons").is_none());
    /// ```
    pub fn from_tz_name(name: &str) -> Option<Self> {
        let tz: chrono_tz::Tz = name.parse().ok()?;
        Some(Self::new(tz))
    }
}

impl<Tz: TimeZone> Clone for Context<Tz> {
    fn clone(&self) -> Self {
        Self {
            tz: self.tz.clone(),
            locale: self.locale.clone(),
            extensions: self.extensions.clone(),
        }
    }
}

impl<Tz: TimeZone> Debug for Context<Tz> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("locale", &self.locale)
            .field("extensions", &self.extensions)
            .finish_non_exhaustive()
    }
}
