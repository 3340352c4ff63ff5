//! Chunked bitstream emission.
//!
//! This module drives a [`BbsEngine`](crate::engine::BbsEngine) to produce
//! a requested number of bits and writes them to a sink, in one of two
//! encodings:
//!
//! - [`OutputFormat::Text`]
//!   One ASCII `'0'` or `'1'` per bit, exactly the requested bit count.
//!
//! - [`OutputFormat::Binary`]
//!   Eight bits per byte, MSB first. The bit count is rounded up to a
//!   byte boundary, so `ceil(bits / 8)` full bytes are written.
//!
//! Both encodings go through the same [`BitSink`] abstraction and the same
//! chunk loop in [`StreamEmitter`]. Memory use is bounded by the chunk size
//! regardless of the requested length, and the produced bytes do not depend
//! on the chunk size.

mod emitter;
mod sink;

pub use emitter::{DEFAULT_CHUNK_SIZE, EmitReport, MAX_CHUNK_SIZE, StreamEmitter};
pub use sink::{BitSink, PackedSink, TextSink};

use std::fmt;
use std::str::FromStr;

use crate::error::BbsError;

/// On-disk encoding of the bitstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// One ASCII character per bit.
    Text,

    /// Packed bytes, MSB first.
    Binary,
}

impl OutputFormat {
    /// Number of generated bits needed to satisfy a request of `total_bits`.
    ///
    /// Binary output rounds up to whole bytes.
    pub fn bits_to_generate(self, total_bits: u64) -> u64 {
        match self {
            OutputFormat::Text => total_bits,
            OutputFormat::Binary => total_bits.div_ceil(8) * 8,
        }
    }

    /// Exact length in bytes of the output for a request of `total_bits`.
    pub fn output_len(self, total_bits: u64) -> u64 {
        match self {
            OutputFormat::Text => total_bits,
            OutputFormat::Binary => total_bits.div_ceil(8),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Binary => f.write_str("binary"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = BbsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "binary" | "bin" => Ok(OutputFormat::Binary),
            other => Err(BbsError::MalformedOutputRequest(format!(
                "unknown output format '{other}', expected text or binary"
            ))),
        }
    }
}
