//! Bit encoders.
//!
//! A [`BitSink`] accepts bits one at a time and buffers their encoded form
//! until the emitter drains it into a writer. The emitter is agnostic to
//! the encoding; only the number of bits per output byte differs.

use std::io::{self, Write};

/// Encoder turning a stream of bits into output bytes.
pub trait BitSink {
    /// Number of bits that make up one output byte.
    const BITS_PER_BYTE: u64;

    /// Appends one bit (0 or 1).
    fn push_bit(&mut self, bit: u8);

    /// Flushes any trailing partial output byte into the buffer.
    fn finish(&mut self);

    /// Encoded bytes currently buffered.
    fn buffered(&self) -> &[u8];

    /// Drops the buffered bytes once they have been written.
    fn clear(&mut self);

    /// Writes all buffered bytes to `out` and returns how many were written.
    fn drain<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<usize> {
        let len = self.buffered().len();
        out.write_all(self.buffered())?;
        self.clear();

        Ok(len)
    }
}

/// ASCII encoder: one `'0'` or `'1'` per bit.
#[derive(Debug, Default)]
pub struct TextSink {
    buf: Vec<u8>,
}

impl TextSink {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }
}

impl BitSink for TextSink {
    const BITS_PER_BYTE: u64 = 1;

    fn push_bit(&mut self, bit: u8) {
        self.buf.push(b'0' + (bit & 1));
    }

    fn finish(&mut self) {}

    fn buffered(&self) -> &[u8] {
        &self.buf
    }

    fn clear(&mut self) {
        self.buf.clear();
    }
}

/// Packing encoder: eight bits per byte, earliest bit in the MSB.
#[derive(Debug, Default)]
pub struct PackedSink {
    buf: Vec<u8>,
    acc: u8,
    filled: u8,
}

impl PackedSink {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            acc: 0,
            filled: 0,
        }
    }
}

impl BitSink for PackedSink {
    const BITS_PER_BYTE: u64 = 8;

    fn push_bit(&mut self, bit: u8) {
        self.acc = (self.acc << 1) | (bit & 1);
        self.filled += 1;

        if self.filled == 8 {
            self.buf.push(self.acc);
            self.acc = 0;
            self.filled = 0;
        }
    }

    /// Left-aligns a trailing partial byte, padding the low bits with zeros.
    fn finish(&mut self) {
        if self.filled > 0 {
            self.buf.push(self.acc << (8 - self.filled));
            self.acc = 0;
            self.filled = 0;
        }
    }

    fn buffered(&self) -> &[u8] {
        &self.buf
    }

    fn clear(&mut self) {
        self.buf.clear();
    }
}
