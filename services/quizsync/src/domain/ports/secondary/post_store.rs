//! Interface to the blog holding the post to update.
use async_trait::async_trait;
use common::err_context::ErrorContext;
use serde::Deserialize;
use std::fmt;

/// Response bodies are cut to this many characters in errors and logs.
pub const EXCERPT_LENGTH: usize = 300;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostStore {
    /// Retrieve the post `id`, including its rendered content.
    async fn fetch_post(&self, id: u64) -> Result<Post, Error>;
    /// Replace the content of the post `id` and (re)publish it.
    async fn publish_post(&self, id: u64, content: String) -> Result<(), Error>;
}

/// The part of a WordPress post we care about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub content: RenderedContent,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderedContent {
    #[serde(default)]
    pub rendered: String,
}

impl Post {
    pub fn with_content(content: impl Into<String>) -> Self {
        Post {
            content: RenderedContent {
                rendered: content.into(),
            },
        }
    }
}

/// The first characters of a response body.
pub fn excerpt(body: &str) -> String {
    body.chars().take(EXCERPT_LENGTH).collect()
}

#[derive(Debug)]
pub enum Error {
    /// Cannot reach the blog, or the request timed out
    Connection {
        context: String,
        source: reqwest::Error,
    },
    /// The blog answered with a non success status
    Status {
        context: String,
        status: u16,
        body: String,
    },
    /// The response body is not a post
    Decoding {
        context: String,
        source: reqwest::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Connection { context, source } => {
                write!(fmt, "Blog Connection: {context} | {source}")
            }
            Error::Status {
                context,
                status,
                body,
            } => {
                write!(fmt, "Blog Response: {context} | status {status} | {body}")
            }
            Error::Decoding { context, source } => {
                write!(fmt, "Blog Post Decoding: {context} | {source}")
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
