use common::err_context::ErrorContext;
use std::fmt;

use crate::domain::ports::secondary::QuizSourceError;

#[derive(Debug)]
pub enum Error {
    /// The quiz answers could not be scraped, nothing can be published.
    Scraping {
        context: String,
        source: QuizSourceError,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Scraping { context, source } => {
                write!(fmt, "Scraping Error: {context} | {source}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<ErrorContext<QuizSourceError>> for Error {
    fn from(err: ErrorContext<QuizSourceError>) -> Self {
        Error::Scraping {
            context: err.0,
            source: err.1,
        }
    }
}
