//! [`Args`] definitions.

use clap::Parser;

use crate::config::Config;

/// Browse users and reviewers side by side.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "duolist.toml")]
    pub config: String,

    /// Base URL of the backend, overriding the configuration file.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Log filter, overriding the configuration file.
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }

    /// Apply the flags that override configuration values.
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.base_url {
            config.api.base_url.clone_from(url);
        }
        if let Some(level) = &self.log_level {
            config.log.level.clone_from(level);
        }
    }
}
