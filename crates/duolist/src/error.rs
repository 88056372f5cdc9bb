//! Startup [`Error`]s of the binary.

use duolist_api::FetchError;
use duolist_core::ProgramError;

/// Everything that can stop the client from starting or exit it early.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("cannot install logger: {0}")]
    LogInit(String),

    #[error("cannot create backend client: {0}")]
    Client(#[from] FetchError),

    #[error(transparent)]
    Program(#[from] ProgramError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
