//! Read and write halves of a pipe.

use std::error::Error;
use std::fmt;
use std::io;
use std::sync::Arc;

use tracing::debug;

use crate::buffer::Buffer;
use crate::error::{Result, TerminalError};
use crate::pipe::Pipe;

/// Read half of a [`Pipe`], created by [`Pipe::split`].
pub struct PipeReader<B: Buffer> {
    pipe: Arc<Pipe<B>>,
}

/// Write half of a [`Pipe`], created by [`Pipe::split`].
///
/// Dropping a writer that was never closed closes the pipe, so the reader
/// sees end-of-stream instead of waiting forever.
///
/// # Example
///
/// ```
/// use giztoy_nio::Pipe;
/// use std::io::{Read, Write};
/// use std::thread;
///
/// let (mut reader, mut writer) = Pipe::with_capacity(16).split();
///
/// let producer = thread::spawn(move || {
///     writer.write_all(b"ping").unwrap();
///     // dropping the writer closes the pipe
/// });
///
/// let mut out = Vec::new();
/// reader.read_to_end(&mut out).unwrap();
/// producer.join().unwrap();
/// assert_eq!(out, b"ping");
/// ```
pub struct PipeWriter<B: Buffer> {
    pipe: Arc<Pipe<B>>,
}

impl<B: Buffer> PipeReader<B> {
    pub(crate) fn new(pipe: Arc<Pipe<B>>) -> Self {
        PipeReader { pipe }
    }

    /// Reads from the pipe. See [`Pipe::read`].
    pub fn read(&self, buf: &mut [u8]) -> Result<usize> {
        self.pipe.read(buf)
    }

    /// Returns the number of bytes available to read.
    pub fn buffered(&self) -> usize {
        self.pipe.buffered()
    }
}

impl<B: Buffer> PipeWriter<B> {
    pub(crate) fn new(pipe: Arc<Pipe<B>>) -> Self {
        PipeWriter { pipe }
    }

    /// Writes to the pipe. See [`Pipe::write`].
    pub fn write(&self, data: &[u8]) -> Result<usize> {
        self.pipe.write(data)
    }

    /// Closes the pipe. See [`Pipe::close`].
    pub fn close(&self) -> Result<()> {
        self.pipe.close()
    }

    /// Closes the pipe with `err`. See [`Pipe::close_with_error`].
    pub fn close_with_error<E>(&self, err: E) -> Result<()>
    where
        E: Error + Send + Sync + 'static,
    {
        self.pipe.close_with_error(err)
    }

    /// Closes the pipe with an optional shared error.
    pub fn close_with_error_opt(&self, err: Option<TerminalError>) -> Result<()> {
        self.pipe.close_with_error_opt(err)
    }

    /// Returns true once the pipe has been closed.
    pub fn is_closed(&self) -> bool {
        self.pipe.is_closed()
    }
}

impl<B: Buffer> Drop for PipeWriter<B> {
    fn drop(&mut self) {
        if self.pipe.close().is_ok() {
            debug!("pipe: writer dropped without close");
        }
    }
}

impl<B: Buffer> io::Read for PipeReader<B> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        io::Read::read(&mut &*self.pipe, buf)
    }
}

impl<B: Buffer> io::Write for PipeWriter<B> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut &*self.pipe, data)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<B: Buffer> fmt::Debug for PipeReader<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipeReader")
            .field("buffered", &self.pipe.buffered())
            .finish()
    }
}

impl<B: Buffer> fmt::Debug for PipeWriter<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipeWriter")
            .field("closed", &self.pipe.is_closed())
            .finish()
    }
}
