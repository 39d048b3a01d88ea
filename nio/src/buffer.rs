//! Buffer capability and the growable buffer implementation.

use std::collections::VecDeque;
use std::io;

/// The underlying storage of a [`Pipe`](crate::Pipe).
///
/// Implementations need not be thread-safe: the pipe serializes every call
/// to `write`, `read` and `len` behind its own lock.
pub trait Buffer {
    /// Appends bytes, returning how many were accepted.
    fn write(&mut self, data: &[u8]) -> io::Result<usize>;

    /// Copies up to `buf.len()` bytes out in FIFO order.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Returns the number of bytes available to read.
    fn len(&self) -> usize;

    /// Returns true if no bytes are available to read.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Buffer for VecDeque<u8> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.extend(data);
        Ok(data.len())
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        io::Read::read(self, buf)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<B: Buffer + ?Sized> Buffer for Box<B> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        (**self).write(data)
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<B: Buffer + ?Sized> Buffer for &mut B {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        (**self).write(data)
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// A growable byte buffer.
///
/// `GrowableBuffer` expands to accommodate every write and never rejects
/// data. The initial capacity is only a hint.
///
/// # Example
///
/// ```
/// use giztoy_nio::{Buffer, GrowableBuffer};
///
/// let mut buf = GrowableBuffer::with_capacity(5);
/// buf.write(b"hello world").unwrap();
/// assert_eq!(buf.len(), 11);
///
/// let mut out = [0u8; 5];
/// assert_eq!(buf.read(&mut out).unwrap(), 5);
/// assert_eq!(&out, b"hello");
/// ```
#[derive(Debug, Default, Clone)]
pub struct GrowableBuffer {
    buf: VecDeque<u8>,
}

impl GrowableBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        GrowableBuffer {
            buf: VecDeque::with_capacity(capacity),
        }
    }

    /// Returns the number of bytes the buffer can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Discards all buffered bytes.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Returns a copy of the buffered bytes.
    pub fn to_vec(&self) -> Vec<u8> {
        self.buf.iter().copied().collect()
    }
}

impl Buffer for GrowableBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend(data);
        Ok(data.len())
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.buf.len());
        for (dst, src) in buf.iter_mut().zip(self.buf.drain(..n)) {
            *dst = src;
        }
        Ok(n)
    }

    fn len(&self) -> usize {
        self.buf.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growable_write_read() {
        let mut buf = GrowableBuffer::new();
        assert!(buf.is_empty());

        assert_eq!(buf.write(&[1, 2, 3]).unwrap(), 3);
        assert_eq!(buf.len(), 3);

        let mut data = [0u8; 3];
        assert_eq!(buf.read(&mut data).unwrap(), 3);
        assert_eq!(data, [1, 2, 3]);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_growable_grows_past_capacity() {
        let mut buf = GrowableBuffer::with_capacity(5);
        assert_eq!(buf.write(b"hello world").unwrap(), 11);
        assert_eq!(buf.to_vec(), b"hello world".to_vec());
    }

    #[test]
    fn test_growable_partial_read() {
        let mut buf = GrowableBuffer::new();
        buf.write(b"abcdef").unwrap();

        let mut out = [0u8; 4];
        assert_eq!(buf.read(&mut out).unwrap(), 4);
        assert_eq!(&out, b"abcd");
        assert_eq!(buf.len(), 2);

        assert_eq!(buf.read(&mut out).unwrap(), 2);
        assert_eq!(&out[..2], b"ef");
    }

    #[test]
    fn test_growable_read_empty() {
        let mut buf = GrowableBuffer::new();
        let mut out = [0u8; 4];
        assert_eq!(buf.read(&mut out).unwrap(), 0);
    }

    #[test]
    fn test_growable_reset() {
        let mut buf = GrowableBuffer::new();
        buf.write(&[1, 2, 3]).unwrap();
        buf.reset();
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn test_vec_deque_buffer() {
        let mut buf: VecDeque<u8> = VecDeque::new();
        assert_eq!(Buffer::write(&mut buf, b"xyz").unwrap(), 3);
        assert_eq!(Buffer::len(&buf), 3);

        let mut out = [0u8; 2];
        assert_eq!(Buffer::read(&mut buf, &mut out).unwrap(), 2);
        assert_eq!(&out, b"xy");
        assert_eq!(Buffer::len(&buf), 1);
    }

    #[test]
    fn test_boxed_buffer() {
        let mut buf: Box<dyn Buffer> = Box::new(GrowableBuffer::new());
        buf.write(b"boxed").unwrap();
        assert_eq!(buf.len(), 5);
    }
}
