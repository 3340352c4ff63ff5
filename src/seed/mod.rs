//! Seed selection for the BBS state machine.
//!
//! Given a modulus `n`, a seed `s` is admissible when:
//!
//! - `1 < s < n`
//! - `gcd(s, n) = 1`
//! - `s` is not a perfect square
//! - the initial state `x0 = s² mod n` exceeds `n / min_state_divisor`
//!
//! Candidates are drawn at random from a sampling window that depends on
//! the attempt index, under a fixed attempt budget. Both the windows and
//! the budget are described by a [`SeedPolicy`], whose defaults reproduce
//! the reference behavior:
//!
//! - the first 70% of attempts sample from `[n/4, 3n/4]`
//! - the remaining attempts sample from `[n/10, n - 1]`
//! - at most 10 000 attempts are made
//!
//! Exhausting the budget is a hard failure. It indicates a misconfigured
//! floor or policy, not bad luck, and is never retried with a larger
//! budget.
//!
//! Randomness is always injected by the caller.

mod policy;
mod selector;

pub use policy::{Fraction, SamplingWindow, SeedPolicy};
pub use selector::{Seed, find_seed, is_admissible};
