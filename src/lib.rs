//! Blum Blum Shub pseudo-random bitstream generator
//!
//! This crate builds a Blum Blum Shub (BBS) generator from scratch and uses
//! it to produce long bitstreams, typically hundreds of thousands to
//! millions of bits, for external statistical test suites.
//!
//! The generator is demonstration-grade. It makes no attempt at
//! side-channel resistance, and its primes are far too small for real
//! cryptographic use.
//!
//! # Module overview
//!
//! - `primes`
//!   Deterministic trial-division primality testing and the search for
//!   two distinct primes `p, q ≡ 3 (mod 4)` above a configurable floor,
//!   separated by at least `max(100, p / 100)`.
//!
//! - `seed`
//!   Budgeted randomized search for a seed `s` coprime to `n`, not a
//!   perfect square, whose initial state `s² mod n` exceeds `n / 10`.
//!   The sampling windows and the attempt budget are described by a
//!   configurable [`SeedPolicy`](seed::SeedPolicy).
//!
//! - `rng`
//!   The default randomness provider, a ChaCha20 generator seeded from
//!   the operating system or from a fixed value. Randomness is always
//!   passed in explicitly, so any `rand::Rng` can replace it.
//!
//! - `engine`
//!   The BBS state machine `x ← x² mod n` over arbitrary-precision
//!   integers, one output bit per transition, with a non-destructive
//!   preview of the start of the stream.
//!
//! - `stream`
//!   Chunked emission of the bitstream to any writer or file, either as
//!   ASCII `'0'`/`'1'` characters or packed bytes (MSB first), with
//!   memory bounded by the chunk size.
//!
//! - `generator`
//!   The [`BlumBlumShub`] facade, which runs the whole parameter pipeline
//!   once and exposes generation on top of it.
//!
//! # Data flow
//!
//! ```text
//! floor -> find_prime_pair -> (p, q) -> n -> find_seed -> s
//!       -> BbsEngine(n, s² mod n) -> StreamEmitter -> sink
//! ```
//!
//! # Concurrency
//!
//! Everything runs synchronously on the calling thread. An instance is
//! mutated through `&mut self` only; independent instances share nothing
//! and can run in parallel.

pub mod engine;
pub mod error;
pub mod generator;
pub mod primes;
pub mod rng;
pub mod seed;
pub mod stream;

pub use engine::{BbsEngine, BitExtraction, ByteSample};
pub use error::{BbsError, Result};
pub use generator::{BlumBlumShub, DEFAULT_PRIME_FLOOR, GeneratorConfig, Parameters};
pub use stream::{OutputFormat, StreamEmitter};
