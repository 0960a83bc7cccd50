use clap::Parser;
use std::fmt;
use tracing::{error, info};

use common::err_context::{ErrorContext, ErrorContextExt};
use common::settings::Settings;
use quizsync::application::opts::{Command, Error as OptsError, Opts};
use quizsync::application::{self, RunOutcome};
use quizsync::telemetry::{self, Error as TelemetryError};

#[derive(Debug)]
pub enum Error {
    Options {
        context: String,
        source: OptsError,
    },
    Telemetry {
        context: String,
        source: TelemetryError,
    },
    Serialization {
        context: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Options { context, source } => {
                write!(fmt, "Options Error: {context} | {source}")
            }
            Error::Telemetry { context, source } => {
                write!(fmt, "Telemetry Error: {context} | {source}")
            }
            Error::Serialization { context, source } => {
                write!(fmt, "Serialization Error: {context} | {source}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<ErrorContext<OptsError>> for Error {
    fn from(err: ErrorContext<OptsError>) -> Self {
        Error::Options {
            context: err.0,
            source: err.1,
        }
    }
}

impl From<ErrorContext<TelemetryError>> for Error {
    fn from(err: ErrorContext<TelemetryError>) -> Self {
        Error::Telemetry {
            context: err.0,
            source: err.1,
        }
    }
}

impl From<ErrorContext<serde_json::Error>> for Error {
    fn from(err: ErrorContext<serde_json::Error>) -> Self {
        Error::Serialization {
            context: err.0,
            source: err.1,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    let subscriber = telemetry::get_subscriber("info".to_string(), std::io::stdout);
    telemetry::init_subscriber(subscriber).context("Initializing logs")?;

    let opts = Opts::parse();

    let cmd = opts.cmd.clone();

    let settings: Settings = opts.try_into().context("Compiling Application Settings")?;

    match cmd {
        Command::Config => {
            let settings =
                serde_json::to_string_pretty(&settings).context("Printing settings")?;
            println!("{settings}");
        }
        Command::Scrape => match application::scrape(&settings.source).await {
            Ok(answers) => {
                let answers =
                    serde_json::to_string_pretty(&answers).context("Printing answers")?;
                println!("{answers}");
            }
            Err(err) => error!("{err}"),
        },
        Command::Run => match application::run(settings).await {
            Ok(RunOutcome::Unchanged) => info!("blog post already up to date"),
            Ok(outcome) => info!(published = outcome.published_sections(), "run complete"),
            Err(err) => error!("{err}"),
        },
    }
    Ok(())
}
