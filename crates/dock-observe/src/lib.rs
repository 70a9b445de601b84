//! Diagnostics for the connector.
//!
//! Everything is written to stderr. Stdout and stdin belong to the remote
//! shell, so a log line must never land on them.

mod config;
pub use config::LoggerConfig;

mod error;
pub use error::LoggerError;

mod format;
pub use format::LoggerFormat;

mod subscriber;
pub use subscriber::logger_init;
