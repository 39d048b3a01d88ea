//! Fixed-size byte buffer implementation.

use std::io;

use crate::buffer::Buffer;

/// A fixed-size circular byte buffer.
///
/// `FixedBuffer` never grows. A write accepts as many bytes as fit and
/// reports a short count; a write into a completely full buffer fails with
/// [`io::ErrorKind::WriteZero`]. The pipe passes both outcomes straight to
/// the writer, which is the only backpressure a pipe offers.
///
/// # Example
///
/// ```
/// use giztoy_nio::{Buffer, FixedBuffer};
///
/// let mut buf = FixedBuffer::new(4);
/// assert_eq!(buf.write(b"abcdef").unwrap(), 4);
/// assert!(buf.write(b"g").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct FixedBuffer {
    buf: Box<[u8]>,
    head: usize, // read position
    count: usize,
}

impl FixedBuffer {
    /// Creates a new FixedBuffer with the specified capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be greater than 0");
        FixedBuffer {
            buf: vec![0; capacity].into_boxed_slice(),
            head: 0,
            count: 0,
        }
    }

    /// Returns the buffer capacity.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no more bytes can be written.
    pub fn is_full(&self) -> bool {
        self.count == self.buf.len()
    }

    /// Discards all buffered bytes.
    pub fn reset(&mut self) {
        self.head = 0;
        self.count = 0;
    }
}

impl Buffer for FixedBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if data.is_empty() {
            return Ok(0);
        }
        let capacity = self.buf.len();
        let to_write = data.len().min(capacity - self.count);
        if to_write == 0 {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "fixed buffer: full"));
        }

        let tail = (self.head + self.count) % capacity;
        let first = to_write.min(capacity - tail);
        self.buf[tail..tail + first].copy_from_slice(&data[..first]);
        self.buf[..to_write - first].copy_from_slice(&data[first..to_write]);
        self.count += to_write;
        Ok(to_write)
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let capacity = self.buf.len();
        let n = buf.len().min(self.count);

        let first = n.min(capacity - self.head);
        buf[..first].copy_from_slice(&self.buf[self.head..self.head + first]);
        buf[first..n].copy_from_slice(&self.buf[..n - first]);
        self.head = (self.head + n) % capacity;
        self.count -= n;
        Ok(n)
    }

    fn len(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_write_read() {
        let mut buf = FixedBuffer::new(8);
        assert_eq!(buf.write(b"abc").unwrap(), 3);

        let mut out = [0u8; 3];
        assert_eq!(buf.read(&mut out).unwrap(), 3);
        assert_eq!(&out, b"abc");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_short_write_when_nearly_full() {
        let mut buf = FixedBuffer::new(4);
        assert_eq!(buf.write(b"ab").unwrap(), 2);
        assert_eq!(buf.write(b"cdef").unwrap(), 2);
        assert!(buf.is_full());
    }

    #[test]
    fn test_write_zero_when_full() {
        let mut buf = FixedBuffer::new(2);
        buf.write(b"ab").unwrap();

        let err = buf.write(b"c").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);

        // Empty writes never fail.
        assert_eq!(buf.write(b"").unwrap(), 0);
    }

    #[test]
    fn test_wraparound() {
        let mut buf = FixedBuffer::new(4);
        buf.write(b"abc").unwrap();

        let mut out = [0u8; 2];
        buf.read(&mut out).unwrap();
        assert_eq!(&out, b"ab");

        // tail wraps past the end of storage
        assert_eq!(buf.write(b"def").unwrap(), 3);
        assert_eq!(buf.len(), 4);

        let mut out = [0u8; 4];
        assert_eq!(buf.read(&mut out).unwrap(), 4);
        assert_eq!(&out, b"cdef");
    }

    #[test]
    fn test_reset() {
        let mut buf = FixedBuffer::new(4);
        buf.write(b"abcd").unwrap();
        buf.reset();
        assert!(buf.is_empty());
        assert_eq!(buf.write(b"xy").unwrap(), 2);
    }

    #[test]
    #[should_panic(expected = "capacity must be greater than 0")]
    fn test_zero_capacity_panics() {
        FixedBuffer::new(0);
    }
}
