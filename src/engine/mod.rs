//! Blum Blum Shub state machine.
//!
//! The engine holds the modulus `n`, the initial state `x0` and the current
//! state `x`. Every output bit is produced by exactly one transition:
//!
//! ```text
//! x <- x² mod n
//! bit = extract(x)
//! ```
//!
//! All arithmetic is exact arbitrary-precision integer arithmetic, so any
//! modulus size is handled without truncation. The current state fully
//! determines all future output.
//!
//! The engine performs no validation of the Blum conditions on `n` or of
//! the seed; those are enforced upstream by the prime and seed searches.
//! This allows fixed, non-production states such as `(143, 4)` to be
//! injected for reproducible testing.

mod preview;

pub use preview::ByteSample;

use num_bigint::BigUint;

use crate::error::{BbsError, Result};

/// Strategy used to turn a state into an output bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BitExtraction {
    /// Least significant bit of the state (standard BBS).
    #[default]
    LeastSignificant,

    /// Parity of the population count of the state.
    Parity,
}

impl BitExtraction {
    fn extract(self, state: &BigUint) -> u8 {
        match self {
            BitExtraction::LeastSignificant => u8::from(state.bit(0)),
            BitExtraction::Parity => (state.count_ones() & 1) as u8,
        }
    }
}

/// BBS bit generator over a fixed modulus.
#[derive(Clone, Debug)]
pub struct BbsEngine {
    modulus: BigUint,
    initial_state: BigUint,
    state: BigUint,
    bits_emitted: u64,
    extraction: BitExtraction,
}

impl BbsEngine {
    /// Creates an engine with modulus `n` and initial state `x0`.
    ///
    /// `x0` is reduced modulo `n`.
    ///
    /// # Errors
    ///
    /// Returns [`BbsError::InvalidModulus`] if `n < 2`.
    pub fn new(modulus: BigUint, initial_state: BigUint) -> Result<Self> {
        if modulus < BigUint::from(2u32) {
            return Err(BbsError::InvalidModulus(format!(
                "modulus must be at least 2, got {modulus}"
            )));
        }

        let initial_state = initial_state % &modulus;

        Ok(Self {
            state: initial_state.clone(),
            modulus,
            initial_state,
            bits_emitted: 0,
            extraction: BitExtraction::default(),
        })
    }

    /// Selects the bit extraction strategy.
    pub fn with_extraction(mut self, extraction: BitExtraction) -> Self {
        self.extraction = extraction;
        self
    }

    /// Advances the state and returns one output bit (0 or 1).
    #[inline]
    pub fn next_bit(&mut self) -> u8 {
        self.state = (&self.state * &self.state) % &self.modulus;
        self.bits_emitted += 1;

        self.extraction.extract(&self.state)
    }

    /// Returns one byte built from eight successive bits, MSB first.
    pub fn next_byte(&mut self) -> u8 {
        (0..8).fold(0u8, |acc, _| (acc << 1) | self.next_bit())
    }

    /// Fills `out` with successive output bytes.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        out.iter_mut().for_each(|b| *b = self.next_byte());
    }

    /// Returns `len` successive output bytes.
    pub fn generate_bytes(&mut self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.fill_bytes(&mut out);
        out
    }

    /// Restores the initial state and zeroes the bit counter.
    ///
    /// This rewinds any in-progress stream. Use [`BbsEngine::preview`] to
    /// inspect the start of the stream without losing the current position.
    pub fn reset_to_initial(&mut self) {
        self.state = self.initial_state.clone();
        self.bits_emitted = 0;
    }

    /// Modulus `n`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Current state `x`.
    pub fn state(&self) -> &BigUint {
        &self.state
    }

    /// Initial state `x0`.
    pub fn initial_state(&self) -> &BigUint {
        &self.initial_state
    }

    /// Bits emitted since construction or the last reset.
    pub fn bits_emitted(&self) -> u64 {
        self.bits_emitted
    }

    pub fn extraction(&self) -> BitExtraction {
        self.extraction
    }
}
