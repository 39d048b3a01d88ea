//! Overwriting ring buffer implementation.

use std::io;

use crate::buffer::Buffer;

/// A fixed-size overwriting byte buffer.
///
/// When full, new writes overwrite the oldest unread bytes instead of being
/// rejected, so a write always reports the full length. Useful when only the
/// most recent bytes matter (e.g. a tail of log output).
///
/// # Example
///
/// ```
/// use giztoy_nio::{Buffer, RingBuffer};
///
/// let mut buf = RingBuffer::new(3);
/// buf.write(b"abcde").unwrap(); // overwrites a, b
///
/// let mut out = [0u8; 3];
/// buf.read(&mut out).unwrap();
/// assert_eq!(&out, b"cde");
/// ```
#[derive(Debug, Clone)]
pub struct RingBuffer {
    buf: Box<[u8]>,
    // Virtual positions; they only grow and rely on wrapping arithmetic.
    head: usize,
    tail: usize,
}

impl RingBuffer {
    /// Creates a new RingBuffer with the specified capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be greater than 0");
        RingBuffer {
            buf: vec![0; capacity].into_boxed_slice(),
            head: 0,
            tail: 0,
        }
    }

    /// Returns the buffer capacity.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Discards all buffered bytes.
    pub fn reset(&mut self) {
        self.head = 0;
        self.tail = 0;
    }

    /// Returns a copy of the buffered bytes, oldest first.
    pub fn to_vec(&self) -> Vec<u8> {
        let capacity = self.buf.len();
        (0..self.len())
            .map(|i| self.buf[self.head.wrapping_add(i) % capacity])
            .collect()
    }
}

impl Buffer for RingBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let capacity = self.buf.len();
        // Only the trailing `capacity` bytes can survive.
        let skip = data.len().saturating_sub(capacity);
        for &b in &data[skip..] {
            self.buf[self.tail % capacity] = b;
            self.tail = self.tail.wrapping_add(1);
        }
        if self.tail.wrapping_sub(self.head) > capacity {
            self.head = self.tail.wrapping_sub(capacity);
        }
        Ok(data.len())
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let capacity = self.buf.len();
        let n = buf.len().min(self.len());
        for slot in buf.iter_mut().take(n) {
            *slot = self.buf[self.head % capacity];
            self.head = self.head.wrapping_add(1);
        }
        Ok(n)
    }

    fn len(&self) -> usize {
        self.tail.wrapping_sub(self.head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_write_read() {
        let mut buf = RingBuffer::new(8);
        assert_eq!(buf.write(b"abc").unwrap(), 3);
        assert_eq!(buf.len(), 3);

        let mut out = [0u8; 8];
        assert_eq!(buf.read(&mut out).unwrap(), 3);
        assert_eq!(&out[..3], b"abc");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_overwrite_oldest() {
        let mut buf = RingBuffer::new(3);
        buf.write(b"ab").unwrap();
        buf.write(b"cd").unwrap();
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.to_vec(), b"bcd".to_vec());
    }

    #[test]
    fn test_overwrite_more_than_capacity() {
        let mut buf = RingBuffer::new(3);
        assert_eq!(buf.write(b"abcdefg").unwrap(), 7);
        assert_eq!(buf.to_vec(), b"efg".to_vec());
    }

    #[test]
    fn test_sliding_window_after_partial_read() {
        let mut buf = RingBuffer::new(4);
        buf.write(b"abcd").unwrap();

        let mut out = [0u8; 2];
        buf.read(&mut out).unwrap();
        assert_eq!(&out, b"ab");

        buf.write(b"efg").unwrap();
        assert_eq!(buf.to_vec(), b"defg".to_vec());
    }

    #[test]
    fn test_reset() {
        let mut buf = RingBuffer::new(4);
        buf.write(b"abcd").unwrap();
        buf.reset();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 4);
    }
}
