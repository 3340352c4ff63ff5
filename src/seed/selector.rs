use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::Rng;
use tracing::{debug, info};

use crate::error::{BbsError, Result};
use crate::seed::policy::SeedPolicy;

/// An accepted seed together with the initial state it produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seed {
    /// The seed `s`.
    pub value: BigUint,

    /// The initial BBS state `x0 = s² mod n`.
    pub initial_state: BigUint,

    /// Number of draws needed to find the seed (1-based).
    pub attempts: u32,
}

/// Checks every seed acceptance criterion for `s` against modulus `n`.
///
/// `min_state_divisor` is the divisor `d` in `s² mod n > n / d`.
pub fn is_admissible(s: &BigUint, n: &BigUint, min_state_divisor: u32) -> bool {
    if *s <= BigUint::one() || s >= n {
        return false;
    }

    if !s.gcd(n).is_one() {
        return false;
    }

    let root = s.sqrt();
    if &root * &root == *s {
        return false;
    }

    (s * s) % n > n / min_state_divisor
}

/// Searches for an admissible seed for modulus `n`.
///
/// Each attempt draws uniformly from the window selected by the policy for
/// that attempt index and tests it with [`is_admissible`].
///
/// # Errors
///
/// - [`BbsError::InvalidSeedPolicy`] if the policy fails validation, or
///   `n` is too small to hold any admissible seed
/// - [`BbsError::SeedSearchExhausted`] if the attempt budget runs out
pub fn find_seed<R: Rng + ?Sized>(n: &BigUint, policy: &SeedPolicy, rng: &mut R) -> Result<Seed> {
    policy.validate()?;

    if *n < BigUint::from(4u32) {
        return Err(BbsError::InvalidSeedPolicy(format!(
            "modulus {n} is too small to hold a seed"
        )));
    }

    let primary = policy.primary.bounds(n);
    let fallback = policy.fallback.bounds(n);

    debug!(
        max_attempts = policy.max_attempts,
        modulus_bits = n.bits(),
        "searching for seed"
    );

    for attempt in 0..policy.max_attempts {
        let window = if policy.uses_primary(attempt) {
            &primary
        } else {
            &fallback
        };

        // An empty window (tiny modulus) simply burns the attempt.
        let Some((low, high)) = window else {
            continue;
        };

        let s = rng.gen_biguint_range(low, &(high + 1u32));

        if is_admissible(&s, n, policy.min_state_divisor) {
            let initial_state = (&s * &s) % n;

            info!(attempts = attempt + 1, seed = %s, x0 = %initial_state, "found seed");

            return Ok(Seed {
                value: s,
                initial_state,
                attempts: attempt + 1,
            });
        }
    }

    Err(BbsError::SeedSearchExhausted {
        attempts: policy.max_attempts,
    })
}
