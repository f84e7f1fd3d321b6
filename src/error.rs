//! Error types for lazy streams
//!
//! Forcing a stream only fails when a caller-supplied continuation fails.
//! Everything else in this enum reports misuse of the binding helpers or
//! problems reading input for a stream.

use std::num::ParseIntError;

/// Main error type for stream operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// A continuation failed while producing the next node
    #[error("Continuation failed: {0}")]
    Force(String),
    /// I/O related errors
    #[error("IO error: {0}")]
    Io(String),
    /// Text that should have been a number was not
    #[error("Parse error: {0}")]
    Parse(String),
    /// A node was forced again while its own continuation was still running
    #[error("Stream node forced from inside its own continuation")]
    Reentrant,
    /// A stream cell was read before a stream was bound to it
    #[error("Stream cell read before it was bound")]
    Unbound,
    /// A stream cell was bound twice
    #[error("Stream cell is already bound")]
    AlreadyBound,
}

impl StreamError {
    /// Wraps any displayable failure as a continuation failure.
    pub fn force(msg: impl std::fmt::Display) -> Self {
        StreamError::Force(msg.to_string())
    }
}

impl From<std::io::Error> for StreamError {
    fn from(err: std::io::Error) -> Self {
        StreamError::Io(err.to_string())
    }
}

impl From<ParseIntError> for StreamError {
    fn from(err: ParseIntError) -> Self {
        StreamError::Parse(err.to_string())
    }
}

/// Result type for stream operations
pub type StreamResult<T> = Result<T, StreamError>;
