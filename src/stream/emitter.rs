use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use crate::engine::BbsEngine;
use crate::error::{BbsError, Result};
use crate::stream::OutputFormat;
use crate::stream::sink::{BitSink, PackedSink, TextSink};

/// Default chunk size: 64 KiB of output bytes per write.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Largest accepted chunk size: 256 MiB of output bytes per write.
pub const MAX_CHUNK_SIZE: usize = 256 * 1024 * 1024;

/// Summary of a completed emission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmitReport {
    pub format: OutputFormat,

    /// Bits asked for by the caller.
    pub bits_requested: u64,

    /// Bits actually pulled from the engine (rounded up in binary mode).
    pub bits_generated: u64,

    /// Bytes written to the sink.
    pub bytes_written: u64,
}

/// Drives an engine and writes its output in bounded chunks.
///
/// Each chunk holds at most `chunk_size` output bytes; it is generated,
/// written, and released before the next one starts.
#[derive(Clone, Debug)]
pub struct StreamEmitter {
    chunk_size: usize,
    cancel: Option<Arc<AtomicBool>>,
}

impl StreamEmitter {
    /// Creates an emitter writing chunks of `chunk_size` output bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BbsError::MalformedOutputRequest`] if `chunk_size` is zero
    /// or above [`MAX_CHUNK_SIZE`].
    pub fn new(chunk_size: usize) -> Result<Self> {
        if !(1..=MAX_CHUNK_SIZE).contains(&chunk_size) {
            return Err(BbsError::MalformedOutputRequest(format!(
                "chunk size must be within 1..={MAX_CHUNK_SIZE}, got {chunk_size}"
            )));
        }

        Ok(Self {
            chunk_size,
            cancel: None,
        })
    }

    /// Installs a cancellation flag, checked before each chunk.
    ///
    /// Once the flag is set, emission stops with [`BbsError::Cancelled`].
    /// Chunks written before that point stay in the sink.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Generates `total_bits` bits from `engine` and writes them to `out`.
    ///
    /// Text output holds exactly `total_bits` characters. Binary output
    /// holds `ceil(total_bits / 8)` full bytes.
    ///
    /// # Errors
    ///
    /// - [`BbsError::MalformedOutputRequest`] if `total_bits` is zero
    /// - [`BbsError::SinkWriteFailure`] if a write fails
    /// - [`BbsError::Cancelled`] if the cancel flag is raised
    pub fn emit<W: Write + ?Sized>(
        &self,
        engine: &mut BbsEngine,
        out: &mut W,
        total_bits: u64,
        format: OutputFormat,
    ) -> Result<EmitReport> {
        if total_bits == 0 {
            return Err(BbsError::MalformedOutputRequest(
                "bit count must be positive".to_owned(),
            ));
        }

        let bits_generated = format.bits_to_generate(total_bits);

        // The buffer never needs to exceed the whole output.
        let capacity = usize::try_from(format.output_len(total_bits))
            .map_or(self.chunk_size, |len| len.min(self.chunk_size));

        debug!(
            %format,
            total_bits,
            chunk_size = self.chunk_size,
            "starting emission"
        );

        let bytes_written = match format {
            OutputFormat::Text => self.run(
                engine,
                TextSink::with_capacity(capacity),
                out,
                bits_generated,
            )?,
            OutputFormat::Binary => self.run(
                engine,
                PackedSink::with_capacity(capacity),
                out,
                bits_generated,
            )?,
        };

        info!(
            %format,
            bits_generated,
            bytes_written,
            total_bits_emitted = engine.bits_emitted(),
            "emission complete"
        );

        Ok(EmitReport {
            format,
            bits_requested: total_bits,
            bits_generated,
            bytes_written,
        })
    }

    /// Creates (or truncates) the file at `path` and emits into it.
    ///
    /// On failure the partial file is left in place and must be treated
    /// as incomplete.
    pub fn emit_to_path(
        &self,
        engine: &mut BbsEngine,
        path: impl AsRef<Path>,
        total_bits: u64,
        format: OutputFormat,
    ) -> Result<EmitReport> {
        if total_bits == 0 {
            return Err(BbsError::MalformedOutputRequest(
                "bit count must be positive".to_owned(),
            ));
        }

        let path = path.as_ref();
        let mut file = File::create(path)?;

        debug!(path = %path.display(), "writing bitstream file");

        let report = self.emit(engine, &mut file, total_bits, format)?;
        file.sync_all()?;

        Ok(report)
    }

    fn run<S: BitSink, W: Write + ?Sized>(
        &self,
        engine: &mut BbsEngine,
        mut sink: S,
        out: &mut W,
        bits: u64,
    ) -> Result<u64> {
        let chunk_bits = (self.chunk_size as u64)
            .checked_mul(S::BITS_PER_BYTE)
            .ok_or_else(|| {
                BbsError::MalformedOutputRequest(format!(
                    "chunk size {} overflows the bit counter",
                    self.chunk_size
                ))
            })?;

        let mut remaining = bits;
        let mut bytes_written = 0u64;

        while remaining > 0 {
            if self.is_cancelled() {
                warn!(bytes_written, "emission cancelled");
                out.flush()?;
                return Err(BbsError::Cancelled { bytes_written });
            }

            let this_chunk = remaining.min(chunk_bits);
            for _ in 0..this_chunk {
                sink.push_bit(engine.next_bit());
            }
            remaining -= this_chunk;

            if remaining == 0 {
                sink.finish();
            }

            bytes_written += sink.drain(out)? as u64;

            debug!(bytes_written, remaining_bits = remaining, "chunk written");
        }

        out.flush()?;

        Ok(bytes_written)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

impl Default for StreamEmitter {
    /// Emitter with [`DEFAULT_CHUNK_SIZE`] and no cancellation flag.
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            cancel: None,
        }
    }
}
