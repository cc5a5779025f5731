#![doc = include_str!("../README.md")]

#[macro_use]
extern crate pest_derive;

pub mod error;
pub mod inclusivity;
pub mod pattern;
pub mod unit;

mod parser;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use inclusivity::Inclusivity;
pub use parser::{parse, ParsedDateTime, Zone};
pub use pattern::Token;
pub use unit::{IntoUnit, Unit};
