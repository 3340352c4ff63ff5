//! Blum prime pair search.
//!
//! Both primes are found by walking upward over odd integers from a start
//! value and taking the first candidate that is prime and congruent to
//! 3 modulo 4. By Dirichlet's theorem, primes congruent to 3 mod 4 make up
//! half of all primes, so their density near `x` is about `1 / (2 ln x)`
//! and the walk terminates after `O(ln x)` candidates on average. No
//! iteration cap is imposed; the only way the walk can fail is by running
//! off the end of `u64`.

use num_bigint::BigUint;
use tracing::{debug, info};

use crate::error::{BbsError, Result};
use crate::primes::primality::is_prime;

/// Smallest accepted prime floor.
pub const MIN_PRIME_FLOOR: u64 = 100;

/// Largest accepted prime floor.
///
/// Trial division costs `O(√p)` per candidate; past 2^40 a single test
/// already needs hundreds of thousands of divisions.
pub const MAX_PRIME_FLOOR: u64 = 1 << 40;

/// Lower bound on `|p - q|`, whatever the size of `p`.
const MIN_ABSOLUTE_SEPARATION: u64 = 100;

/// Two distinct Blum primes used to build the BBS modulus.
///
/// A pair is only ever produced by [`find_prime_pair`], which guarantees:
/// - `p` and `q` are prime
/// - `p % 4 == 3` and `q % 4 == 3`
/// - `p != q` and `|p - q| >= min_separation(p)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimePair {
    p: u64,
    q: u64,
}

impl PrimePair {
    /// First prime, the smallest Blum prime above the floor.
    pub fn p(&self) -> u64 {
        self.p
    }

    /// Second prime, at least `min_separation(p)` above `p`.
    pub fn q(&self) -> u64 {
        self.q
    }

    /// Absolute difference `|p - q|`.
    pub fn separation(&self) -> u64 {
        self.p.abs_diff(self.q)
    }

    /// The BBS modulus `n = p * q`, computed exactly.
    pub fn modulus(&self) -> BigUint {
        BigUint::from(self.p) * BigUint::from(self.q)
    }
}

/// Minimum separation between the two primes: `max(100, p / 100)`.
pub fn min_separation(p: u64) -> u64 {
    MIN_ABSOLUTE_SEPARATION.max(p / 100)
}

/// Returns the first prime `c >= start` with `c % 4 == 3`.
///
/// An even `start` is bumped to the next odd number before the walk.
///
/// # Errors
///
/// Returns [`BbsError::PrimeSearchDegenerate`] if the walk overflows `u64`.
pub fn next_prime_congruent_3_mod_4(start: u64) -> Result<u64> {
    let mut candidate = start | 1;

    loop {
        if candidate % 4 == 3 && is_prime(candidate) {
            return Ok(candidate);
        }

        candidate = candidate.checked_add(2).ok_or_else(|| overflow(start))?;
    }
}

/// Finds a Blum prime pair strictly above `floor`.
///
/// # Algorithm
///
/// 1. `p = next_prime_congruent_3_mod_4(floor + 1)`
/// 2. `min_diff = max(100, p / 100)`
/// 3. `q = next_prime_congruent_3_mod_4(p + min_diff)`, re-searching from
///    `q + 2` while the separation is too small
///
/// The search is monotonic: `p` is never revisited once found.
///
/// # Errors
///
/// - [`BbsError::InvalidFloor`] if `floor` is outside
///   `MIN_PRIME_FLOOR..=MAX_PRIME_FLOOR`
/// - [`BbsError::PrimeSearchDegenerate`] if the pair would be equal or
///   too close, or the walk overflows
pub fn find_prime_pair(floor: u64) -> Result<PrimePair> {
    if !(MIN_PRIME_FLOOR..=MAX_PRIME_FLOOR).contains(&floor) {
        return Err(BbsError::InvalidFloor {
            floor,
            min: MIN_PRIME_FLOOR,
            max: MAX_PRIME_FLOOR,
        });
    }

    debug!(floor, "searching for Blum prime pair");

    let p = next_prime_congruent_3_mod_4(floor + 1)?;
    let min_diff = min_separation(p);

    let q_start = p.checked_add(min_diff).ok_or_else(|| overflow(p))?;
    let mut q = next_prime_congruent_3_mod_4(q_start)?;

    while p.abs_diff(q) < min_diff {
        let next = q.checked_add(2).ok_or_else(|| overflow(q))?;
        q = next_prime_congruent_3_mod_4(next)?;
    }

    if p == q || p.abs_diff(q) < min_diff {
        return Err(BbsError::PrimeSearchDegenerate(format!(
            "p = {p} and q = {q} violate the minimum separation {min_diff}"
        )));
    }

    info!(p, q, separation = p.abs_diff(q), "found Blum prime pair");

    Ok(PrimePair { p, q })
}

fn overflow(from: u64) -> BbsError {
    BbsError::PrimeSearchDegenerate(format!("candidate walk from {from} overflowed u64"))
}
