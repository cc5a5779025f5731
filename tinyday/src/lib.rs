#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod context;
pub mod error;
pub mod extension;
pub mod format;
pub mod instant;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;

mod localize;
mod utils;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::context::{Context, DEFAULT_LOCALE};
pub use crate::error::{Error, ParserError};
pub use crate::extension::{Extensions, Plugin, Value};
pub use crate::instant::Instant;
pub use tinyday_syntax::{Inclusivity, IntoUnit, Unit};
