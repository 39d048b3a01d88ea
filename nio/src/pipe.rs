//! Synchronized pipe over a non-thread-safe buffer.

use std::error::Error;
use std::io;
use std::sync::Arc;

use parking_lot::{Condvar, Mutex};
use tracing::{debug, trace};

use crate::buffer::{Buffer, GrowableBuffer};
use crate::endpoint::{PipeReader, PipeWriter};
use crate::error::{PipeError, Result, TerminalError};

/// A buffered pipe, safe to drive from one reader and one writer thread.
///
/// Reads block while the buffer is empty and the pipe is open. Writes never
/// block on the pipe itself; they go straight to the buffer. Closing is
/// one-shot: bytes written before the close stay readable, and once they are
/// drained every read returns the terminal error.
///
/// Parallel calls to `read` from two threads, or parallel calls to
/// `write`/`close` from two threads, are not supported.
///
/// # Example
///
/// ```
/// use giztoy_nio::{GrowableBuffer, Pipe};
/// use std::io::Read;
/// use std::sync::Arc;
/// use std::thread;
///
/// let pipe = Arc::new(Pipe::new(GrowableBuffer::with_capacity(5)));
/// let writer = Arc::clone(&pipe);
///
/// let producer = thread::spawn(move || {
///     writer.write(b"hello world").unwrap();
///     writer.close().unwrap();
/// });
///
/// let mut out = String::new();
/// (&*pipe).read_to_string(&mut out).unwrap();
/// producer.join().unwrap();
/// assert_eq!(out, "hello world");
/// ```
pub struct Pipe<B> {
    state: Mutex<PipeState<B>>,
    readable: Condvar,
}

struct PipeState<B> {
    buf: B,
    terminal: Option<Terminal>,
}

enum Terminal {
    Eof,
    Error(TerminalError),
}

impl Terminal {
    fn to_error(&self) -> PipeError {
        match self {
            Terminal::Eof => PipeError::Eof,
            Terminal::Error(err) => PipeError::Terminated(Arc::clone(err)),
        }
    }
}

impl<B: Buffer> Pipe<B> {
    /// Creates a new pipe that owns `buf`.
    pub fn new(buf: B) -> Self {
        Pipe {
            state: Mutex::new(PipeState {
                buf,
                terminal: None,
            }),
            readable: Condvar::new(),
        }
    }

    /// Reads from the buffer into `buf`.
    ///
    /// Blocks while the buffer is empty and the pipe is open. Once the pipe
    /// is closed and drained, returns `Err(PipeError::Eof)` or
    /// `Err(PipeError::Terminated(_))` on every call. Buffer errors are
    /// returned as `PipeError::Buffer`.
    pub fn read(&self, buf: &mut [u8]) -> Result<usize> {
        let mut state = self.state.lock();
        while state.buf.is_empty() {
            if let Some(ref terminal) = state.terminal {
                return Err(terminal.to_error());
            }
            trace!("pipe: reader waiting for data");
            self.readable.wait(&mut state);
        }
        Ok(state.buf.read(buf)?)
    }

    /// Writes `data` into the buffer and wakes a waiting reader.
    ///
    /// Returns `Err(PipeError::Closed)` once the pipe is closed, even for an
    /// empty write. Otherwise returns whatever the buffer reports.
    pub fn write(&self, data: &[u8]) -> Result<usize> {
        let mut state = self.state.lock();
        if state.terminal.is_some() {
            trace!(len = data.len(), "pipe: write on closed pipe");
            return Err(PipeError::Closed);
        }
        let result = state.buf.write(data);
        self.readable.notify_one();
        Ok(result?)
    }

    /// Closes the pipe. Readers see `PipeError::Eof` after draining.
    pub fn close(&self) -> Result<()> {
        self.close_with(Terminal::Eof)
    }

    /// Closes the pipe with `err`, which readers see after draining.
    pub fn close_with_error<E>(&self, err: E) -> Result<()>
    where
        E: Error + Send + Sync + 'static,
    {
        self.close_with(Terminal::Error(Arc::new(err)))
    }

    /// Closes the pipe with an optional shared error.
    ///
    /// `None` is the same as [`close`](Self::close).
    pub fn close_with_error_opt(&self, err: Option<TerminalError>) -> Result<()> {
        self.close_with(err.map_or(Terminal::Eof, Terminal::Error))
    }

    fn close_with(&self, terminal: Terminal) -> Result<()> {
        let mut state = self.state.lock();
        if state.terminal.is_some() {
            trace!("pipe: close on closed pipe");
            return Err(PipeError::Closed);
        }
        match terminal {
            Terminal::Eof => debug!(buffered = state.buf.len(), "pipe: closed"),
            Terminal::Error(ref err) => {
                debug!(buffered = state.buf.len(), error = %err, "pipe: closed with error")
            }
        }
        state.terminal = Some(terminal);
        self.readable.notify_one();
        Ok(())
    }

    /// Returns true once the pipe has been closed.
    pub fn is_closed(&self) -> bool {
        self.state.lock().terminal.is_some()
    }

    /// Returns the number of bytes available to read.
    pub fn buffered(&self) -> usize {
        self.state.lock().buf.len()
    }

    /// Returns the error readers will see after draining, if closed.
    pub fn terminal_error(&self) -> Option<PipeError> {
        self.state.lock().terminal.as_ref().map(Terminal::to_error)
    }

    /// Splits the pipe into its read and write halves.
    pub fn split(self) -> (PipeReader<B>, PipeWriter<B>) {
        let pipe = Arc::new(self);
        (PipeReader::new(Arc::clone(&pipe)), PipeWriter::new(pipe))
    }
}

impl Pipe<GrowableBuffer> {
    /// Creates a pipe backed by a [`GrowableBuffer`] of the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Pipe::new(GrowableBuffer::with_capacity(capacity))
    }
}

impl<B: Buffer> io::Read for &Pipe<B> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match Pipe::read(*self, buf) {
            Ok(n) => Ok(n),
            Err(PipeError::Eof) => Ok(0),
            Err(e) => Err(e.into()),
        }
    }
}

impl<B: Buffer> io::Read for Pipe<B> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        io::Read::read(&mut &*self, buf)
    }
}

impl<B: Buffer> io::Write for &Pipe<B> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        Ok(Pipe::write(*self, data)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<B: Buffer> io::Write for Pipe<B> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut &*self, data)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
