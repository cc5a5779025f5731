use std::fmt;

use crate::parser::Rule;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug)]
pub enum Error {
    Parser(Box<pest::error::Error<Rule>>),
    OutOfRange { field: &'static str, value: i64 },
    UnknownUnit(String),
}

impl From<pest::error::Error<Rule>> for Error {
    fn from(pest_err: pest::error::Error<Rule>) -> Self {
        Self::Parser(Box::new(pest_err))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parser(pest_err) => write!(f, "{}", pest_err),
            Self::OutOfRange { field, value } => write!(f, "{} is out of range for {}", value, field),
            Self::UnknownUnit(unit) => write!(f, "unknown time unit `{}`", unit),
        }
    }
}

impl std::error::Error for Error {}
