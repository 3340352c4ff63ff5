//! Prime search for the BBS modulus.
//!
//! The generator needs two primes `p` and `q`, both congruent to 3 modulo 4
//! (Blum primes), distinct and far enough apart that `n = p * q` is not
//! trivially factored by Fermat's method.
//!
//! The module is split into two layers:
//!
//! - [`primality`]
//!   Deterministic 6m±1 trial division over `u64`. It is only practical
//!   because candidates stay bounded by [`MAX_PRIME_FLOOR`](pair::MAX_PRIME_FLOOR).
//!
//! - [`pair`]
//!   Monotonic upward search for a Blum prime pair above a configurable
//!   floor, with a minimum pairwise separation.
//!
//! Primes are plain `u64` values; only their product is promoted to an
//! arbitrary-precision integer.

pub mod pair;
pub mod primality;

pub use pair::{
    MAX_PRIME_FLOOR, MIN_PRIME_FLOOR, PrimePair, find_prime_pair, min_separation,
    next_prime_congruent_3_mod_4,
};
pub use primality::is_prime;
