//! [`Config`]-related definitions.

use std::{path::PathBuf, time};

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use duolist_state::WindowConfig;
use serde::Deserialize;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend configuration.
    pub api: Api,

    /// List behavior and layout.
    pub list: List,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if it exists);
    /// - merging it with `DUOLIST__*` environment variables, e.g.
    ///   `DUOLIST__API__BASE_URL`;
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("DUOLIST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

/// Backend configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Api {
    /// Base URL of the REST backend.
    #[default("http://localhost:3001".to_owned())]
    pub base_url: String,

    /// Records requested per page.
    #[default(50)]
    pub page_size: u32,

    /// Timeout of a single page request.
    #[default(time::Duration::from_secs(10))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,

    /// How long a fetched page is reused for an identical request.
    #[default(time::Duration::from_secs(60))]
    #[serde(with = "humantime_serde")]
    pub cache_ttl: time::Duration,
}

/// List behavior and layout. Lengths are terminal rows.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct List {
    /// Quiet period after the last keystroke before a search is issued.
    #[default(time::Duration::from_millis(400))]
    #[serde(with = "humantime_serde")]
    pub search_debounce: time::Duration,

    /// Distance from the bottom at which the next page is requested.
    #[default(8)]
    pub scroll_threshold: u32,

    /// Minimum spacing between two load-more requests.
    #[default(time::Duration::from_millis(300))]
    #[serde(with = "humantime_serde")]
    pub load_more_cooldown: time::Duration,

    /// Height of one card.
    #[default(8)]
    pub item_height: u32,

    /// Rows between two cards.
    #[default(1)]
    pub gap: u32,

    /// Cards rendered beyond each edge of the viewport.
    #[default(2)]
    pub overscan: usize,

    /// Comment characters shown on a card before it is cut.
    #[default(120)]
    pub comment_max_len: usize,

    /// Whether `Esc` in a non-empty search box clears it before leaving.
    #[default(true)]
    pub escape_clears: bool,
}

impl List {
    /// Window parameters for the card list.
    pub fn window(&self) -> WindowConfig {
        WindowConfig {
            estimate: self.item_height.max(1),
            gap: self.gap,
            overscan: self.overscan,
        }
    }
}

/// Log configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Log {
    /// Filter directive, e.g. `info` or `duolist_api=debug`. `RUST_LOG`
    /// takes precedence when set.
    #[default("info".to_owned())]
    pub level: String,

    /// File the log is written to. Logging is off when unset, since the
    /// terminal itself belongs to the UI.
    #[default(Some(PathBuf::from("duolist.log")))]
    pub file: Option<PathBuf>,
}
