/// Deterministic trial-division primality test.
///
/// Rejects values below 2, accepts 2 and 3, rejects multiples of 2 and 3,
/// then tests divisors of the form `6m - 1` and `6m + 1` up to `√k`.
///
/// The loop bound is evaluated as `i <= k / i` so that it never overflows,
/// even for `k` close to `u64::MAX`.
pub fn is_prime(k: u64) -> bool {
    if k < 2 {
        return false;
    }

    if k == 2 || k == 3 {
        return true;
    }

    if k % 2 == 0 || k % 3 == 0 {
        return false;
    }

    let mut i = 5u64;
    while i <= k / i {
        if k % i == 0 || k % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }

    true
}
