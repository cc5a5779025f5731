use std::fmt::Display;

pub use tinyday_syntax::error::Error as ParserError;

#[derive(Clone, Debug)]
pub enum Error {
    /// The input string could not be read as a date.
    Parser(ParserError),
    /// The operation requires a valid instant.
    InvalidDate,
}

impl From<ParserError> for Error {
    fn from(err: ParserError) -> Self {
        Self::Parser(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parser(err) => write!(f, "could not parse date: {err}"),
            Self::InvalidDate => write!(f, "invalid date"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parser(err) => Some(err),
            Self::InvalidDate => None,
        }
    }
}
