//! Randomness provider for the seed search.
//!
//! The seed search never reaches for ambient randomness: every randomized
//! operation takes an explicit `&mut impl rand::Rng`. This module provides
//! the default provider used by the generator facade.
//!
//! It is built around ChaCha20 as a deterministic random bit generator,
//! seeded either from the operating system or, for reproducible runs and
//! tests, from a caller-supplied value.
//!
//! Any other `rand::Rng` implementation can be injected in its place.
mod seed_rng;

/// ChaCha20-backed randomness provider.
pub use seed_rng::SeedRng;
