//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::logging::{default_log_file, LogTarget};

/// postboard - browse posts from a JSON endpoint in the terminal
#[derive(Debug, Parser)]
#[command(name = "postboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the posts endpoint URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Print posts to stdout instead of opening the terminal UI
    #[arg(long)]
    pub plain: bool,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file (terminal UI mode only)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file named by `--config`, or the default one.
    pub fn load_config(&self) -> Result<Config, crate::config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Apply flag values over file values.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.source.url = url.clone();
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }

    /// Plain runs log to stderr; the terminal UI logs to a file.
    pub fn log_target(&self, config: &Config) -> LogTarget {
        if self.plain {
            LogTarget::Stderr
        } else {
            LogTarget::File(config.logging.file.clone().unwrap_or_else(default_log_file))
        }
    }
}
