//! Non-destructive inspection of the start of the stream.

use std::fmt;

use crate::engine::BbsEngine;

/// One byte from the start of the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ByteSample {
    /// 1-based position of the byte in the stream.
    pub index: usize,
    pub value: u8,
}

impl ByteSample {
    /// Hexadecimal form, e.g. `0x7B`.
    pub fn hex(&self) -> String {
        format!("0x{:02X}", self.value)
    }

    /// Bit string, MSB first, e.g. `01111011`.
    pub fn bits(&self) -> String {
        format!("{:08b}", self.value)
    }
}

impl fmt::Display for ByteSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Byte {:2}: {:3} ({}) (binary: {})",
            self.index,
            self.value,
            self.hex(),
            self.bits()
        )
    }
}

impl BbsEngine {
    /// Returns the first `num_bytes` bytes of the stream without moving the
    /// current position.
    ///
    /// The current state and bit counter are saved, the engine is replayed
    /// from `x0`, and both are restored before returning. Output produced
    /// after the call is identical to the output that would have been
    /// produced without it.
    pub fn preview(&mut self, num_bytes: usize) -> Vec<ByteSample> {
        let saved_state = self.state.clone();
        let saved_bits = self.bits_emitted;

        self.reset_to_initial();

        let samples = (1..=num_bytes)
            .map(|index| ByteSample {
                index,
                value: self.next_byte(),
            })
            .collect();

        self.state = saved_state;
        self.bits_emitted = saved_bits;

        samples
    }
}
