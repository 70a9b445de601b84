use std::io::IsTerminal;

use crate::format::LoggerFormat;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    /// `EnvFilter` directive, e.g. `info` or `info,dock.core=debug`.
    pub level: String,
    pub with_targets: bool,
    /// ANSI colors in text output. Off when stderr is redirected.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::Text,
            level: "info".to_string(),
            with_targets: false,
            use_color: std::io::stderr().is_terminal(),
        }
    }
}
