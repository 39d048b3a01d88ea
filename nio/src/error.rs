//! Error types for pipe operations.

use std::error::Error;
use std::io;
use std::sync::Arc;

/// Result type alias for pipe operations.
pub type Result<T> = std::result::Result<T, PipeError>;

/// Shared terminal error, handed back unchanged on every drained read.
pub type TerminalError = Arc<dyn Error + Send + Sync>;

/// Pipe operation error.
///
/// `Closed` reports misuse of a terminated pipe (a write or a second close),
/// while `Eof` and `Terminated` are the normal completion signals seen by
/// the reader once all buffered data has been consumed.
#[derive(Debug, thiserror::Error)]
pub enum PipeError {
    /// Write or close attempted on a pipe that is already closed.
    #[error("pipe: read/write on closed pipe")]
    Closed,

    /// The writer closed the pipe without an error.
    #[error("pipe: end of stream")]
    Eof,

    /// The writer closed the pipe with an error.
    #[error("pipe: closed with error: {0}")]
    Terminated(TerminalError),

    /// Error reported by the underlying buffer.
    #[error(transparent)]
    Buffer(#[from] io::Error),
}

impl PipeError {
    /// Returns true for the end-of-stream sentinel.
    pub fn is_eof(&self) -> bool {
        matches!(self, PipeError::Eof)
    }

    /// Returns true for the already-closed condition.
    pub fn is_closed(&self) -> bool {
        matches!(self, PipeError::Closed)
    }
}

impl From<PipeError> for io::Error {
    fn from(e: PipeError) -> Self {
        match e {
            PipeError::Closed => io::Error::new(io::ErrorKind::BrokenPipe, PipeError::Closed),
            PipeError::Eof => io::Error::new(io::ErrorKind::UnexpectedEof, PipeError::Eof),
            PipeError::Terminated(err) => io::Error::other(err),
            PipeError::Buffer(err) => err,
        }
    }
}
