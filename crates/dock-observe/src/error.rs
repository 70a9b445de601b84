use thiserror::Error;
use tracing_subscriber::{filter::ParseError, util::TryInitError};

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("unknown log format {0:?}, expected text or json")]
    UnknownFormat(String),

    #[error("bad log filter {directive:?}: {source}")]
    BadFilter {
        directive: String,
        #[source]
        source: ParseError,
    },

    #[error("a global subscriber is already installed")]
    AlreadyInstalled(#[source] TryInitError),
}
