//! ChaCha20-based randomness provider
//!
//! Wraps [`rand_chacha::ChaCha20Rng`] behind the two construction paths the
//! generator needs:
//! - OS entropy for normal runs
//! - a fixed 64-bit seed for reproducible runs
//!
//! The wrapper implements `RngCore` and `CryptoRng`, so it can be passed to
//! anything expecting a `rand::Rng`.

use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Randomness provider used by the seed search.
///
/// Two instances built from the same seed produce the same stream.
#[derive(Clone, Debug)]
pub struct SeedRng {
    inner: ChaCha20Rng,
}

impl SeedRng {
    /// Creates a provider seeded from the operating system.
    ///
    /// This is equivalent to calling [`SeedRng::from_os`].
    pub fn new() -> Self {
        Self::from_os()
    }

    /// Creates a provider using entropy provided by the operating system.
    pub fn from_os() -> Self {
        Self {
            inner: ChaCha20Rng::from_entropy(),
        }
    }

    /// Creates a provider from a fixed seed.
    ///
    /// The seed is expanded into a full 256-bit ChaCha20 key. Intended for
    /// reproducible parameter generation, not for secrecy.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Default for SeedRng {
    /// Creates a default provider seeded from the operating system.
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for SeedRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

impl CryptoRng for SeedRng {}
