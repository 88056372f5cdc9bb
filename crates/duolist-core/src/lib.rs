//! Runtime for the **duolist** terminal client.
//!
//! The client is written in the [Elm Architecture]: every screen is a pure
//! **init -> update -> view** cycle, and anything that touches the outside
//! world (HTTP fetches, timers, terminal input) is pushed to the edges as a
//! [`Command`] or a [`Subscription`].
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | One-shot side effect (async fetch, immediate message, quit) |
//! | [`Subscription`] | Long-lived event source (terminal events, timers) |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness that also resolves async commands |
//!
//! # Cancellation
//!
//! Subscriptions are diffed by [`SubscriptionId`] after every update. A timer
//! that is no longer declared is aborted, which is how debounce timers are
//! superseded by newer keystrokes and how pending timers are dropped when a
//! component goes away.
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod subscription;
pub mod subscriptions;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{Program, ProgramError, ProgramOptions};
pub use subscription::{subscribe, Subscription, SubscriptionId, SubscriptionSource};
pub use subscriptions::{terminal_events, After, Every};

/// Run a model with default options.
///
/// # Errors
///
/// Returns [`ProgramError`] if the terminal cannot be set up, drawn to, or
/// restored.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run a model with custom options.
///
/// # Errors
///
/// Returns [`ProgramError`] if the terminal cannot be set up, drawn to, or
/// restored.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
