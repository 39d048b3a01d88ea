//! Convenience functions for creating pre-sized pipes.

use crate::{FixedBuffer, GrowableBuffer, Pipe, RingBuffer};

// ============================================================================
// Growable pipes
// ============================================================================

/// Creates a pipe over a 256B growable buffer.
pub fn pipe_256b() -> Pipe<GrowableBuffer> {
    Pipe::with_capacity(256)
}

/// Creates a pipe over a 1KB growable buffer.
pub fn pipe_1kb() -> Pipe<GrowableBuffer> {
    Pipe::with_capacity(1024)
}

/// Creates a pipe over a 4KB growable buffer.
pub fn pipe_4kb() -> Pipe<GrowableBuffer> {
    Pipe::with_capacity(4096)
}

/// Creates a pipe over a 16KB growable buffer.
pub fn pipe_16kb() -> Pipe<GrowableBuffer> {
    Pipe::with_capacity(16384)
}

/// Creates a pipe over a 64KB growable buffer.
pub fn pipe_64kb() -> Pipe<GrowableBuffer> {
    Pipe::with_capacity(65536)
}

/// Creates a default pipe over a 1KB growable buffer.
pub fn pipe() -> Pipe<GrowableBuffer> {
    pipe_1kb()
}

// ============================================================================
// Bounded pipes
// ============================================================================

/// Creates a pipe over a fixed buffer that rejects writes when full.
pub fn fixed_pipe(size: usize) -> Pipe<FixedBuffer> {
    Pipe::new(FixedBuffer::new(size))
}

/// Creates a pipe over a ring buffer that keeps only the newest `size` bytes.
pub fn ring_pipe(size: usize) -> Pipe<RingBuffer> {
    Pipe::new(RingBuffer::new(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growable_pipe_functions() {
        for p in [pipe(), pipe_256b(), pipe_1kb(), pipe_4kb(), pipe_16kb(), pipe_64kb()] {
            assert_eq!(p.write(&[1, 2, 3]).unwrap(), 3);
            assert_eq!(p.buffered(), 3);
        }
    }

    #[test]
    fn test_fixed_pipe_short_write() {
        let p = fixed_pipe(4);
        assert_eq!(p.write(b"abcdef").unwrap(), 4);
        assert!(p.write(b"g").is_err());
    }

    #[test]
    fn test_ring_pipe_keeps_newest() {
        let p = ring_pipe(3);
        assert_eq!(p.write(b"abcde").unwrap(), 5);
        p.close().unwrap();

        let mut out = [0u8; 8];
        let n = p.read(&mut out).unwrap();
        assert_eq!(&out[..n], b"cde");
    }
}
