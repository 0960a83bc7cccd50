//! Interface to whatever republishes a list of answers under a section of the post.
use async_trait::async_trait;
use common::err_context::ErrorContext;
use std::fmt;

use super::post_store::Error as PostStoreError;
use crate::domain::post_content::Error as PostContentError;
use crate::domain::user_credentials::Error as CredentialsError;
use crate::domain::{AnswerList, TargetSection};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SectionPublisher {
    /// Replace the answers listed under `section`. Failures are reported in the
    /// outcome, they never affect other sections.
    async fn publish_section(&self, section: TargetSection, answers: AnswerList)
        -> SectionOutcome;
}

/// What happened to one section of the post.
#[derive(Debug)]
pub struct SectionOutcome {
    pub label: String,
    pub result: Result<SectionReport, Error>,
}

impl SectionOutcome {
    pub fn is_published(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReport {
    /// Whether a previous list was removed from under the heading.
    pub removed_previous: bool,
    /// Number of answers now listed.
    pub answers: usize,
}

#[derive(Debug)]
pub enum Error {
    Credentials {
        context: String,
        source: CredentialsError,
    },
    Store {
        context: String,
        source: PostStoreError,
    },
    /// The post has no rendered content
    MissingContent {
        context: String,
    },
    Content {
        context: String,
        source: PostContentError,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Credentials { context, source } => {
                write!(fmt, "Credentials: {context} | {source}")
            }
            Error::Store { context, source } => {
                write!(fmt, "Blog: {context} | {source}")
            }
            Error::MissingContent { context } => {
                write!(fmt, "Missing Content: {context}")
            }
            Error::Content { context, source } => {
                write!(fmt, "Post Content: {context} | {source}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<ErrorContext<CredentialsError>> for Error {
    fn from(err: ErrorContext<CredentialsError>) -> Self {
        Error::Credentials {
            context: err.0,
            source: err.1,
        }
    }
}

impl From<ErrorContext<PostStoreError>> for Error {
    fn from(err: ErrorContext<PostStoreError>) -> Self {
        Error::Store {
            context: err.0,
            source: err.1,
        }
    }
}

impl From<ErrorContext<PostContentError>> for Error {
    fn from(err: ErrorContext<PostContentError>) -> Self {
        Error::Content {
            context: err.0,
            source: err.1,
        }
    }
}
