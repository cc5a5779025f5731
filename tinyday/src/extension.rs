//! Registry of methods attached to instants by plugins.
//!
//! Plugins are installed on a [`Context`], every instant created from that
//! context afterwards can then call the registered methods through
//! [`Instant::call`].

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use chrono::TimeZone;

use crate::{Context, Instant};

/// A value passed to or returned by an extension method.
pub enum Value<Tz: TimeZone> {
    Bool(bool),
    Number(i64),
    Text(String),
    Instant(Instant<Tz>),
}

impl<Tz: TimeZone> Clone for Value<Tz> {
    fn clone(&self) -> Self {
        match self {
            Self::Bool(x) => Self::Bool(*x),
            Self::Number(x) => Self::Number(*x),
            Self::Text(x) => Self::Text(x.clone()),
            Self::Instant(x) => Self::Instant(x.clone()),
        }
    }
}

impl<Tz: TimeZone> PartialEq for Value<Tz> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(x), Self::Bool(y)) => x == y,
            (Self::Number(x), Self::Number(y)) => x == y,
            (Self::Text(x), Self::Text(y)) => x == y,
            (Self::Instant(x), Self::Instant(y)) => x == y,
            _ => false,
        }
    }
}

impl<Tz: TimeZone> Debug for Value<Tz> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(x) => f.debug_tuple("Bool").field(x).finish(),
            Self::Number(x) => f.debug_tuple("Number").field(x).finish(),
            Self::Text(x) => f.debug_tuple("Text").field(x).finish(),
            Self::Instant(x) => f.debug_tuple("Instant").field(x).finish(),
        }
    }
}

/// A method that can be called on an instant.
pub type Method<Tz> = Arc<dyn Fn(&Instant<Tz>, &[Value<Tz>]) -> Value<Tz> + Send + Sync>;

/// Methods registered by plugins, indexed by name.
pub struct Extensions<Tz: TimeZone> {
    methods: HashMap<Arc<str>, Method<Tz>>,
}

impl<Tz: TimeZone> Extensions<Tz> {
    /// Register a method, replacing and returning any previous method with
    /// the same name.
    pub fn insert<F>(&mut self, name: impl Into<Arc<str>>, method: F) -> Option<Method<Tz>>
    where
        F: Fn(&Instant<Tz>, &[Value<Tz>]) -> Value<Tz> + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Arc::new(method))
    }

    pub fn get(&self, name: &str) -> Option<&Method<Tz>> {
        self.methods.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Names of all registered methods, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.methods.keys().map(AsRef::as_ref)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl<Tz: TimeZone> Default for Extensions<Tz> {
    fn default() -> Self {
        Self { methods: HashMap::new() }
    }
}

impl<Tz: TimeZone> Clone for Extensions<Tz> {
    fn clone(&self) -> Self {
        Self { methods: self.methods.clone() }
    }
}

impl<Tz: TimeZone> Debug for Extensions<Tz> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.names().collect();
        names.sort_unstable();
        f.debug_set().entries(names).finish()
    }
}

/// Something that registers methods on a context.
///
/// A plugin is run once each time it is installed with [`Context::extend`],
/// installing the same plugin twice runs its side effects twice.
///
/// ```
/// use chrono::Utc;
/// use tinyday::extension::{Extensions, Value};
/// use tinyday::{Context, Unit};
///
/// let ctx = Context::new(Utc).extend(|ext: &mut Extensions<Utc>, _: &Context<Utc>| {
///     ext.insert("tomorrow", |instant, _| Value::Instant(instant.add(1, Unit::Day)));
/// });
///
/// let instant = ctx.parse("2024-06-15");
///
/// assert_eq!(
///     instant.call("tomorrow", &[]),
///     Some(Value::Instant(ctx.parse("2024-06-16"))),
/// );
/// ```
pub trait Plugin<Tz: TimeZone> {
    fn install(&self, extensions: &mut Extensions<Tz>, ctx: &Context<Tz>);
}

impl<Tz, F> Plugin<Tz> for F
where
    Tz: TimeZone,
    F: Fn(&mut Extensions<Tz>, &Context<Tz>),
{
    fn install(&self, extensions: &mut Extensions<Tz>, ctx: &Context<Tz>) {
        self(extensions, ctx)
    }
}
