use config::{Config, ConfigError, Environment, File, FileFormat};
use std::{env, fmt, path::Path};
use tracing::trace;

use crate::err_context::{ErrorContext, ErrorContextExt};

static DEFAULT_ENV_NAME: &str = "default";
static LOCAL_ENV_NAME: &str = "local";

/// Environment variable selecting the run mode (profile), taking precedence
/// over the one given on the command line.
pub static PROFILE_ENV_VAR: &str = "QUIZSYNC_PROFILE";

#[derive(Debug)]
pub enum Error {
    Configuration {
        context: String,
        source: ConfigError,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration { context, source } => {
                write!(
                    fmt,
                    "Could not create configuration: {context} | source: {source}"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<ErrorContext<ConfigError>> for Error {
    fn from(ctx: ErrorContext<ConfigError>) -> Error {
        Error::Configuration {
            context: ctx.0,
            source: ctx.1,
        }
    }
}

/// Merge configuration sources, from lowest to highest priority:
///
/// 1. `defaults`, a TOML document (usually compiled into the binary),
/// 2. `<root_dir>/default`, `<root_dir>/<profile>` and `<root_dir>/local`, if a
///    root directory is given,
/// 3. environment variables starting with `<prefix>_`, nested keys separated by `__`,
/// 4. `key=value` overrides.
pub fn merge_configuration<'a, R, P>(
    defaults: &str,
    root_dir: Option<&Path>,
    profile: R,
    prefix: P,
    overrides: Vec<String>,
) -> Result<Config, Error>
where
    R: Into<Option<&'a str>>,
    P: Into<Option<&'a str>>,
{
    let mut builder = Config::builder().add_source(File::from_str(defaults, FileFormat::Toml));

    if let Some(dir_path) = root_dir {
        let default_path = dir_path.join(DEFAULT_ENV_NAME);

        trace!(
            "Reading default configuration from: {}",
            default_path.display()
        );

        builder = builder.add_source(File::from(default_path));

        // A profile given through the environment wins over the one given as argument
        // (probably coming from the CLI). Without any, no profile file is merged.
        if let Some(profile) = env::var(PROFILE_ENV_VAR)
            .ok()
            .or_else(|| profile.into().map(String::from))
        {
            let profile_path = dir_path.join(profile);

            trace!(
                "Reading profile configuration from: {}",
                profile_path.display()
            );

            builder = builder.add_source(File::from(profile_path).required(false));
        }

        // This file shouldn't be checked in to git
        let local_path = dir_path.join(LOCAL_ENV_NAME);

        trace!("Reading local configuration from: {}", local_path.display());

        builder = builder.add_source(File::from(local_path).required(false));
    }

    if let Some(prefix) = prefix.into() {
        let environment = Environment::with_prefix(prefix)
            .prefix_separator("_")
            .separator("__");
        builder = builder.add_source(environment)
    }

    if !overrides.is_empty() {
        builder = builder.add_source(config_from_args(overrides)?)
    }

    builder
        .build()
        .context("Could not merge configuration")
        .map_err(|err| err.into())
}

// Create a new configuration source from a list of assignments key=value
fn config_from_args(args: impl IntoIterator<Item = String>) -> Result<Config, Error> {
    let builder = args.into_iter().fold(Config::builder(), |builder, arg| {
        builder.add_source(File::from_str(&arg, FileFormat::Toml))
    });
    builder
        .build()
        .context("Could not build configuration from args")
        .map_err(|err| err.into())
}
