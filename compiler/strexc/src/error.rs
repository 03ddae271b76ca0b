//! CLI failure modes.

use std::io;

/// Why a command did not complete.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The pattern failed to parse. Its diagnostic has already been rendered.
    #[error("invalid pattern")]
    InvalidPattern,
    /// `explain` was given something that is not a known code.
    #[error("unknown error code `{0}`")]
    UnknownCode(String),
    /// Malformed command line.
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CliError {
    /// Whether the failure was already reported through the diagnostic
    /// emitter.
    pub fn is_reported(&self) -> bool {
        matches!(self, CliError::InvalidPattern)
    }

    /// Whether `main` should print usage after the message.
    pub fn wants_usage(&self) -> bool {
        matches!(self, CliError::Usage(_))
    }
}
