use base64::engine::general_purpose;
use base64::Engine;
use secrecy::{ExposeSecret, Secret};
use std::{env, fmt};

/// WordPress user name and application password.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: Secret<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: Secret::new(password.into()),
        }
    }

    /// Read the credentials from the environment variables `username_var` and
    /// `password_var`. Unset and empty variables are both reported as missing.
    pub fn from_env(username_var: &str, password_var: &str) -> Result<Self, Error> {
        let username = read_var(username_var)?;
        let password = read_var(password_var)?;
        Ok(Credentials::new(username, password))
    }

    /// base64 of "username:password", as used by the 'Basic' authentication scheme.
    pub fn encode(&self) -> String {
        let credentials = format!("{}:{}", self.username, self.password.expose_secret());
        general_purpose::STANDARD.encode(credentials.as_bytes())
    }

    pub fn basic_authorization(&self) -> String {
        format!("Basic {}", self.encode())
    }
}

fn read_var(name: &str) -> Result<String, Error> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::Missing {
            context: format!("environment variable {name} is not set"),
        })
}

#[derive(Debug)]
pub enum Error {
    Missing { context: String },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Missing { context } => {
                write!(fmt, "Missing Credentials: {context}")
            }
        }
    }
}

impl std::error::Error for Error {}
