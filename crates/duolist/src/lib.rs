//! Terminal client that browses users and reviewers side by side.
//!
//! Each collection lives in its own [`Pane`](pane::Pane) with a debounced
//! search box and an infinitely scrolling, windowed list of cards. The
//! [`App`] model lays the panes out and routes input to the focused one.

pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod pane;

pub use app::{App, Flags, Msg};
pub use args::Args;
pub use config::Config;
pub use error::Error;
pub use pane::{Pane, PaneSettings};
