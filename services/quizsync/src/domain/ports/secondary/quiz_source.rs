//! Interface to the page publishing the daily quiz answers.
use async_trait::async_trait;
use common::err_context::ErrorContext;
use serde::Serialize;
use std::fmt;

use crate::domain::quiz_page::Error as QuizPageError;
use crate::domain::AnswerList;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizSource {
    async fn fetch_answers(&self) -> Result<QuizAnswers, Error>;
}

/// Both answer lists found on the quiz page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizAnswers {
    pub english: AnswerList,
    pub russian: AnswerList,
}

#[derive(Debug)]
pub enum Error {
    /// The page could not be downloaded
    Connection {
        context: String,
        source: reqwest::Error,
    },
    /// The page does not have the expected structure
    Markup {
        context: String,
        source: QuizPageError,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Connection { context, source } => {
                write!(fmt, "Quiz Page Connection: {context} | {source}")
            }
            Error::Markup { context, source } => {
                write!(fmt, "Quiz Page Markup: {context} | {source}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<ErrorContext<reqwest::Error>> for Error {
    fn from(err: ErrorContext<reqwest::Error>) -> Self {
        Error::Connection {
            context: err.0,
            source: err.1,
        }
    }
}

impl From<ErrorContext<QuizPageError>> for Error {
    fn from(err: ErrorContext<QuizPageError>) -> Self {
        Error::Markup {
            context: err.0,
            source: err.1,
        }
    }
}
