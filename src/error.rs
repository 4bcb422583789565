use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while saving or loading objects
#[derive(Debug, Error)]
pub enum CodecError {
    /// The stream was readable but its content is not a valid record
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// The underlying stream could not be opened, read or written
    #[error("Stream unavailable ({context}): {source}")]
    IoUnavailable {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl CodecError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::IoUnavailable {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn io_at(path: &Path, source: io::Error) -> Self {
        Self::io(path.display().to_string(), source)
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while loading a scene configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] io::Error),

    #[error("Invalid config data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}
