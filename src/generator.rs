//! Generator facade.
//!
//! [`BlumBlumShub`] runs the full construction pipeline once:
//!
//! ```text
//! prime floor -> (p, q) -> n = p * q -> seed s -> x0 = s² mod n -> engine
//! ```
//!
//! and then exposes bit, byte and file generation on top of the engine.
//! The parameters `(p, q, n, s)` never change for the lifetime of an
//! instance.

use std::fmt;
use std::path::Path;

use num_bigint::BigUint;
use rand::Rng;
use tracing::info;

use crate::engine::{BbsEngine, BitExtraction, ByteSample};
use crate::error::{BbsError, Result};
use crate::primes::{MAX_PRIME_FLOOR, MIN_PRIME_FLOOR, PrimePair, find_prime_pair};
use crate::rng::SeedRng;
use crate::seed::{Seed, SeedPolicy, find_seed};
use crate::stream::{EmitReport, OutputFormat, StreamEmitter};

/// Default minimum magnitude for `p`.
pub const DEFAULT_PRIME_FLOOR: u64 = 10_000;

/// Construction parameters for [`BlumBlumShub`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Both primes are strictly greater than this value.
    pub prime_floor: u64,

    /// Seed search budget and sampling windows.
    pub seed_policy: SeedPolicy,

    /// Output bit extraction strategy.
    pub extraction: BitExtraction,
}

impl GeneratorConfig {
    /// Checks the configuration before any search begins.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PRIME_FLOOR..=MAX_PRIME_FLOOR).contains(&self.prime_floor) {
            return Err(BbsError::InvalidFloor {
                floor: self.prime_floor,
                min: MIN_PRIME_FLOOR,
                max: MAX_PRIME_FLOOR,
            });
        }

        self.seed_policy.validate()
    }
}

impl Default for GeneratorConfig {
    /// Floor of 10 000, reference seed policy, LSB extraction.
    fn default() -> Self {
        Self {
            prime_floor: DEFAULT_PRIME_FLOOR,
            seed_policy: SeedPolicy::default(),
            extraction: BitExtraction::default(),
        }
    }
}

/// Snapshot of the generated parameters, for reporting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameters {
    pub p: u64,
    pub q: u64,
    pub modulus: BigUint,
    pub seed: BigUint,
    pub initial_state: BigUint,
    pub seed_attempts: u32,
}

impl Parameters {
    pub fn modulus_bits(&self) -> u64 {
        self.modulus.bits()
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "p = {}", self.p)?;
        writeln!(f, "q = {}", self.q)?;
        writeln!(f, "n = p × q = {}", self.modulus)?;
        writeln!(f, "s (seed) = {}", self.seed)?;
        writeln!(f, "x₀ = s² mod n = {}", self.initial_state)?;
        write!(f, "n size: {} bits", self.modulus_bits())
    }
}

/// Blum Blum Shub generator with automatically chosen parameters.
#[derive(Clone, Debug)]
pub struct BlumBlumShub {
    primes: PrimePair,
    seed: Seed,
    engine: BbsEngine,
}

impl BlumBlumShub {
    /// Builds a generator whose seed is drawn from OS-seeded randomness.
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        Self::with_rng(config, &mut SeedRng::from_os())
    }

    /// Builds a generator drawing its seed from `rng`.
    ///
    /// With a deterministic `rng`, the whole parameter set is reproducible.
    ///
    /// # Errors
    ///
    /// Any error from configuration validation, the prime pair search or
    /// the seed search.
    pub fn with_rng<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let primes = find_prime_pair(config.prime_floor)?;
        let modulus = primes.modulus();

        let seed = find_seed(&modulus, &config.seed_policy, rng)?;
        let engine = BbsEngine::new(modulus, seed.initial_state.clone())?
            .with_extraction(config.extraction);

        let generator = Self {
            primes,
            seed,
            engine,
        };

        info!(
            p = generator.p(),
            q = generator.q(),
            n = %generator.modulus(),
            modulus_bits = generator.modulus_bits(),
            "generator ready"
        );

        Ok(generator)
    }

    pub fn p(&self) -> u64 {
        self.primes.p()
    }

    pub fn q(&self) -> u64 {
        self.primes.q()
    }

    pub fn primes(&self) -> &PrimePair {
        &self.primes
    }

    pub fn modulus(&self) -> &BigUint {
        self.engine.modulus()
    }

    /// Bit length of `n`. Informational only.
    pub fn modulus_bits(&self) -> u64 {
        self.engine.modulus().bits()
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    pub fn initial_state(&self) -> &BigUint {
        &self.seed.initial_state
    }

    /// Bits emitted since construction or the last reset.
    pub fn bits_generated(&self) -> u64 {
        self.engine.bits_emitted()
    }

    pub fn engine(&self) -> &BbsEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut BbsEngine {
        &mut self.engine
    }

    pub fn parameters(&self) -> Parameters {
        Parameters {
            p: self.p(),
            q: self.q(),
            modulus: self.modulus().clone(),
            seed: self.seed.value.clone(),
            initial_state: self.seed.initial_state.clone(),
            seed_attempts: self.seed.attempts,
        }
    }

    pub fn next_bit(&mut self) -> u8 {
        self.engine.next_bit()
    }

    pub fn next_byte(&mut self) -> u8 {
        self.engine.next_byte()
    }

    pub fn generate_bytes(&mut self, len: usize) -> Vec<u8> {
        self.engine.generate_bytes(len)
    }

    /// First `num_bytes` bytes of the stream, without moving the current
    /// position. See [`BbsEngine::preview`].
    pub fn preview(&mut self, num_bytes: usize) -> Vec<ByteSample> {
        self.engine.preview(num_bytes)
    }

    /// Writes `total_bits` bits to `path` using the default emitter.
    pub fn generate_bitstream_file(
        &mut self,
        path: impl AsRef<Path>,
        total_bits: u64,
        format: OutputFormat,
    ) -> Result<EmitReport> {
        self.generate_with(&StreamEmitter::default(), path, total_bits, format)
    }

    /// Writes `total_bits` bits to `path` using `emitter`.
    pub fn generate_with(
        &mut self,
        emitter: &StreamEmitter,
        path: impl AsRef<Path>,
        total_bits: u64,
        format: OutputFormat,
    ) -> Result<EmitReport> {
        emitter.emit_to_path(&mut self.engine, path, total_bits, format)
    }
}
