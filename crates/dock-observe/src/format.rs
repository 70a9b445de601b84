use std::{fmt, str::FromStr};

use crate::error::LoggerError;

/// Shape of a log line on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoggerFormat {
    /// Human-readable lines for a terminal.
    #[default]
    Text,
    /// One JSON object per line, for wrappers that capture stderr.
    Json,
}

impl LoggerFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoggerFormat::Text => "text",
            LoggerFormat::Json => "json",
        }
    }
}

impl fmt::Display for LoggerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoggerFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("text") {
            Ok(LoggerFormat::Text)
        } else if s.trim().eq_ignore_ascii_case("json") {
            Ok(LoggerFormat::Json)
        } else {
            Err(LoggerError::UnknownFormat(s.to_string()))
        }
    }
}
