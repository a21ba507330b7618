//! Configuration loading and defaults.
//!
//! Everything is optional: with no config file the application fetches the
//! public posts endpoint with transport-default timeouts.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Config, FailurePolicy, LoggingConfig, SourceConfig, UiConfig, DEFAULT_POSTS_URL,
};
