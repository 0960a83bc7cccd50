use common::config::merge_configuration;
use common::err_context::ErrorContextExt;
use common::settings::Settings;
use std::path::PathBuf;

use super::Error;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

/// Settings compiled into the binary, everything else is layered on top.
pub const DEFAULT_SETTINGS: &str = include_str!("../../../config/default.toml");

/// Prefix of the environment variables overriding settings, eg `QUIZSYNC_BLOG__POST_ID`.
pub const ENV_PREFIX: &str = "QUIZSYNC";

#[derive(Debug, Clone, clap::Parser)]
#[clap(
    name = "quizsync",
    about = "Publish the daily quiz answers in a WordPress post",
    version = VERSION,
    author = AUTHORS
    )]
pub struct Opts {
    /// Defines the config directory
    ///
    /// If no directory is provided, the settings compiled into the binary are used.
    #[arg(value_parser = clap::value_parser!(PathBuf), short = 'c', long = "config-dir")]
    pub config_dir: Option<PathBuf>,

    /// Defines the run mode in {testing, dev, prod, ...}
    ///
    /// If no run mode is provided, a default behavior will be used.
    #[arg(short = 'm', long = "run-mode")]
    pub run_mode: Option<String>,

    /// Override settings values using key=value
    #[arg(short = 's', long = "setting")]
    pub settings: Vec<String>,

    #[clap(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Clone, clap::Subcommand)]
pub enum Command {
    /// Scrape the answers and update the blog post if they changed
    Run,
    /// Scrape the answers and print them, without touching the blog post
    Scrape,
    /// Prints quizsync's configuration
    Config,
}

impl TryInto<Settings> for Opts {
    type Error = Error;

    fn try_into(self) -> Result<Settings, Self::Error> {
        merge_configuration(
            DEFAULT_SETTINGS,
            self.config_dir.as_deref(),
            self.run_mode.as_deref(),
            ENV_PREFIX,
            self.settings,
        )
        .context("Quizsync Settings: Could not merge configuration")?
        .try_deserialize()
        .context("Quizsync Settings: Could not deserialize configuration")
        .map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use serial_test::serial;

    use super::*;

    fn opts(settings: Vec<String>) -> Opts {
        Opts {
            config_dir: None,
            run_mode: None,
            settings,
            cmd: Command::Run,
        }
    }

    #[test]
    #[serial]
    fn should_return_ok_with_compiled_settings() {
        let settings: Result<Settings, _> = opts(vec![]).try_into();
        let settings = settings.expect("settings");
        assert_eq!(settings.mode, "default");
        assert_eq!(settings.blog.post_id, 303976);
        assert_eq!(settings.blog.heading_tag, "h2");
        assert_eq!(settings.guard, vec!["Japan".to_string(), "Monero".to_string()]);
        assert_eq!(settings.source.answers_block_id, "tw-target-text");
    }

    #[test]
    #[serial]
    fn should_apply_command_line_overrides() {
        let settings: Result<Settings, _> = opts(vec![
            "blog.post_id=42".to_string(),
            "guard=['Gold', 'Japan']".to_string(),
        ])
        .try_into();
        let settings = settings.expect("settings");
        assert_eq!(settings.blog.post_id, 42);
        assert_eq!(settings.guard, vec!["Gold".to_string(), "Japan".to_string()]);
    }

    #[test]
    #[serial]
    fn should_report_an_invalid_override() {
        let settings: Result<Settings, _> = opts(vec!["blog.post_id=".to_string()]).try_into();
        assert!(matches!(settings, Err(Error::Merging { .. })));
    }

    #[test]
    #[serial]
    fn should_report_a_missing_config_dir() {
        let mut opts = opts(vec![]);
        opts.config_dir = Some(PathBuf::from("/nonexistent/quizsync/config"));
        let settings: Result<Settings, _> = opts.try_into();
        assert!(settings.is_err());
    }

    #[test]
    fn should_parse_the_command_line() {
        let opts = Opts::try_parse_from([
            "quizsync",
            "-m",
            "testing",
            "-s",
            "blog.post_id=42",
            "scrape",
        ])
        .expect("opts");
        assert_eq!(opts.run_mode.as_deref(), Some("testing"));
        assert_eq!(opts.settings, vec!["blog.post_id=42".to_string()]);
        assert!(matches!(opts.cmd, Command::Scrape));
    }
}
