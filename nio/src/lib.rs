//! Buffered in-memory pipe.
//!
//! A [`Pipe`] connects code that writes bytes with code that reads them,
//! running on different threads. It wraps any [`Buffer`] (a non-thread-safe
//! byte container) behind a mutex and a condition variable:
//!
//! - **Read**: Blocks while the buffer is empty and the pipe is open
//! - **Write**: Never blocks on the pipe, the buffer decides what it accepts
//! - **Close**: One-shot; buffered data stays readable after close
//!
//! At most one reader and one writer may be active at a time. They may run
//! concurrently with each other.
//!
//! # Example
//!
//! ```
//! use giztoy_nio::{Pipe, PipeError};
//!
//! let pipe = Pipe::with_capacity(64);
//! pipe.write(b"hello").unwrap();
//! pipe.close().unwrap();
//!
//! let mut buf = [0u8; 64];
//! let n = pipe.read(&mut buf).unwrap();
//! assert_eq!(&buf[..n], b"hello");
//!
//! // Drained and closed: every further read reports end-of-stream.
//! assert!(matches!(pipe.read(&mut buf), Err(PipeError::Eof)));
//! // Writes and closes after close are rejected.
//! assert!(matches!(pipe.write(b"late"), Err(PipeError::Closed)));
//! assert!(matches!(pipe.close(), Err(PipeError::Closed)));
//! ```
//!
//! # Buffers
//!
//! - [`GrowableBuffer`]: Grows on demand, never rejects a write
//! - [`FixedBuffer`]: Fixed capacity, short writes when full
//! - [`RingBuffer`]: Fixed capacity, overwrites the oldest bytes
//!
//! `VecDeque<u8>` implements [`Buffer`] as well.
//!
//! # Endpoints
//!
//! [`Pipe::split`] hands out a [`PipeReader`] and a [`PipeWriter`] that can
//! be moved to separate threads. Dropping the writer closes the pipe.

mod buffer;
mod bytes;
mod endpoint;
mod error;
mod fixed_buffer;
mod pipe;
mod ring_buffer;


pub use buffer::{Buffer, GrowableBuffer};
pub use bytes::*;
pub use endpoint::{PipeReader, PipeWriter};
pub use error::{PipeError, Result, TerminalError};
pub use fixed_buffer::FixedBuffer;
pub use pipe::Pipe;
pub use ring_buffer::RingBuffer;
