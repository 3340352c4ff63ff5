//! Seed sampling policy and validation.
//!
//! The reference sampling split (70% narrow window, 30% wide window) is a
//! heuristic. It is kept as the default but every threshold is tunable.

use num_bigint::BigUint;

use crate::error::{BbsError, Result};

/// A non-negative rational factor `num / den` applied to the modulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fraction {
    pub num: u32,
    pub den: u32,
}

impl Fraction {
    pub const fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    /// Computes `floor(n * num / den)`, or `None` if `den` is zero.
    pub fn of(&self, n: &BigUint) -> Option<BigUint> {
        (self.den != 0).then(|| n * self.num / self.den)
    }

    fn exceeds(&self, other: &Fraction) -> bool {
        u64::from(self.num) * u64::from(other.den) > u64::from(other.num) * u64::from(self.den)
    }
}

/// Inclusive sampling window `[n * low, n * high]`.
///
/// Bounds are clamped into `[2, n - 1]` when applied, so a `high` of `1/1`
/// means "up to `n - 1`".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplingWindow {
    pub low: Fraction,
    pub high: Fraction,
}

impl SamplingWindow {
    pub const fn new(low: Fraction, high: Fraction) -> Self {
        Self { low, high }
    }

    /// Returns the inclusive bounds of this window for modulus `n`, or
    /// `None` if the clamped window is empty or a bound has a zero
    /// denominator.
    pub fn bounds(&self, n: &BigUint) -> Option<(BigUint, BigUint)> {
        let two = BigUint::from(2u32);
        if *n <= two {
            return None;
        }

        let top = n - 1u32;

        let low = self.low.of(n)?.max(two);
        let high = self.high.of(n)?.min(top);

        (low <= high).then_some((low, high))
    }
}

/// Parameters of the randomized seed search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedPolicy {
    /// Attempt budget. Exhausting it is a hard failure.
    pub max_attempts: u32,

    /// Share of the budget, in percent, drawn from the primary window.
    ///
    /// Attempt `i` (0-based) uses the primary window while
    /// `i * 100 < max_attempts * primary_share_percent`.
    pub primary_share_percent: u8,

    /// Window used for the first share of attempts.
    pub primary: SamplingWindow,

    /// Window used once the primary share is spent.
    pub fallback: SamplingWindow,

    /// An accepted seed must satisfy `s² mod n > n / min_state_divisor`.
    pub min_state_divisor: u32,
}

impl SeedPolicy {
    /// Reference attempt budget.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

    pub(crate) fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(invalid("max_attempts must be at least 1"));
        }

        if self.primary_share_percent > 100 {
            return Err(invalid("primary_share_percent must be at most 100"));
        }

        if self.min_state_divisor == 0 {
            return Err(invalid("min_state_divisor must be non-zero"));
        }

        for (name, window) in [("primary", &self.primary), ("fallback", &self.fallback)] {
            if window.low.den == 0 || window.high.den == 0 {
                return Err(invalid(&format!("{name} window has a zero denominator")));
            }

            if window.low.exceeds(&window.high) {
                return Err(invalid(&format!("{name} window is inverted")));
            }
        }

        Ok(())
    }

    /// Whether attempt `attempt` (0-based) draws from the primary window.
    pub fn uses_primary(&self, attempt: u32) -> bool {
        let primary_attempts = u64::from(self.max_attempts) * u64::from(self.primary_share_percent);

        u64::from(attempt) * 100 < primary_attempts
    }
}

impl Default for SeedPolicy {
    /// Reference policy: 10 000 attempts, 70% from `[n/4, 3n/4]`, the rest
    /// from `[n/10, n - 1]`, and `x0 > n/10`.
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            primary_share_percent: 70,
            primary: SamplingWindow::new(Fraction::new(1, 4), Fraction::new(3, 4)),
            fallback: SamplingWindow::new(Fraction::new(1, 10), Fraction::new(1, 1)),
            min_state_divisor: 10,
        }
    }
}

fn invalid(msg: &str) -> BbsError {
    BbsError::InvalidSeedPolicy(msg.to_owned())
}
