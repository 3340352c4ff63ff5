//! Error types for the generator.
//!
//! Every fallible operation in the crate returns [`Result<T>`], which wraps
//! [`BbsError`]. Errors are surfaced to the immediate caller; the only
//! internal retry is the budgeted seed search loop.

use thiserror::Error;

/// Error type for parameter search, state construction and emission.
#[derive(Debug, Error)]
pub enum BbsError {
    /// The configured prime floor is outside the supported range.
    #[error("invalid prime floor {floor}: must be within {min}..={max}")]
    InvalidFloor { floor: u64, min: u64, max: u64 },

    /// The prime pair search could not produce two distinct, separated primes.
    #[error("prime search degenerated: {0}")]
    PrimeSearchDegenerate(String),

    /// No admissible seed was found within the attempt budget.
    #[error("no suitable seed found after {attempts} attempts")]
    SeedSearchExhausted { attempts: u32 },

    /// The seed sampling policy is inconsistent or unusable for the modulus.
    #[error("invalid seed policy: {0}")]
    InvalidSeedPolicy(String),

    /// The engine was given a modulus it cannot square against.
    #[error("invalid modulus: {0}")]
    InvalidModulus(String),

    /// The generation request itself is unusable (bit count, format, chunk size).
    #[error("malformed output request: {0}")]
    MalformedOutputRequest(String),

    /// Writing to the output sink failed. Any partial output is left in place.
    #[error("sink write failure: {0}")]
    SinkWriteFailure(#[from] std::io::Error),

    /// Emission was cancelled at a chunk boundary.
    #[error("emission cancelled after {bytes_written} bytes")]
    Cancelled { bytes_written: u64 },
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, BbsError>;
