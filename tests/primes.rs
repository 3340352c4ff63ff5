use bbsgen::BbsError;
use bbsgen::primes::{
    MAX_PRIME_FLOOR, MIN_PRIME_FLOOR, find_prime_pair, is_prime, min_separation,
    next_prime_congruent_3_mod_4,
};

use proptest::prelude::*;

fn naive_is_prime(k: u64) -> bool {
    k >= 2 && (2..k).take_while(|d| d * d <= k).all(|d| k % d != 0)
}

#[test]
fn test_primes_is_prime_small_values() {
    assert!(!is_prime(0));
    assert!(!is_prime(1));
    assert!(is_prime(2));
    assert!(is_prime(3));
    assert!(!is_prime(4));
    assert!(is_prime(5));
    assert!(!is_prime(9));
    assert!(!is_prime(25));
    assert!(!is_prime(49));
    assert!(is_prime(10007));
    assert!(!is_prime(143));
}

#[test]
fn test_primes_is_prime_matches_sieve_below_10000() {
    let limit = 10_000usize;
    let mut sieve = vec![true; limit];
    sieve[0] = false;
    sieve[1] = false;
    for i in 2..limit {
        if sieve[i] {
            for j in (i * i..limit).step_by(i) {
                sieve[j] = false;
            }
        }
    }

    for (k, &expected) in sieve.iter().enumerate() {
        assert_eq!(is_prime(k as u64), expected, "mismatch at {k}");
    }
}

#[test]
fn test_primes_is_prime_large_values_do_not_overflow() {
    // 2^31 - 1 is a Mersenne prime
    assert!(is_prime((1u64 << 31) - 1));
    assert!(!is_prime(u64::MAX));
    assert!(!is_prime(4_294_967_297)); // 641 × 6700417
}

#[test]
fn test_primes_next_prime_congruent_3_mod_4_skips_1_mod_4_primes() {
    // 10009 and 10037 are 1 mod 4; 10007 is 3 mod 4
    assert_eq!(next_prime_congruent_3_mod_4(10001).unwrap(), 10007);
    assert_eq!(next_prime_congruent_3_mod_4(10008).unwrap(), 10039);
    assert_eq!(next_prime_congruent_3_mod_4(3).unwrap(), 3);
    assert_eq!(next_prime_congruent_3_mod_4(4).unwrap(), 7);
}

#[test]
fn test_primes_next_prime_congruent_3_mod_4_reports_overflow() {
    let result = next_prime_congruent_3_mod_4(u64::MAX - 1);
    assert!(matches!(result, Err(BbsError::PrimeSearchDegenerate(_))));
}

#[test]
fn test_primes_prime_pair_reference_floor() {
    let pair = find_prime_pair(10_000).unwrap();

    assert_eq!(pair.p(), 10007);
    assert!(pair.q() > 10_000);
    assert!(is_prime(pair.p()));
    assert!(is_prime(pair.q()));
    assert_eq!(pair.p() % 4, 3);
    assert_eq!(pair.q() % 4, 3);
    assert_ne!(pair.p(), pair.q());
    assert!(pair.separation() >= min_separation(pair.p()));
}

#[test]
fn test_primes_prime_pair_modulus_is_exact_product() {
    let pair = find_prime_pair(1_000_000).unwrap();
    let expected = u128::from(pair.p()) * u128::from(pair.q());

    assert_eq!(pair.modulus().to_string(), expected.to_string());
}

#[test]
fn test_primes_min_separation_grows_with_p() {
    assert_eq!(min_separation(10007), 100);
    assert_eq!(min_separation(1_000_003), 10_000);
}

#[test]
fn test_primes_prime_pair_rejects_out_of_range_floor() {
    for floor in [0, 1, MIN_PRIME_FLOOR - 1, MAX_PRIME_FLOOR + 1] {
        let result = find_prime_pair(floor);
        assert!(
            matches!(result, Err(BbsError::InvalidFloor { floor: f, .. }) if f == floor),
            "floor {floor} accepted"
        );
    }
}

proptest! {
    #[test]
    fn test_primes_is_prime_agrees_with_naive(k in 0u64..200_000) {
        prop_assert_eq!(is_prime(k), naive_is_prime(k));
    }

    #[test]
    fn test_primes_prime_pair_invariants(floor in MIN_PRIME_FLOOR..2_000_000u64) {
        let pair = find_prime_pair(floor).unwrap();
        let (p, q) = (pair.p(), pair.q());

        prop_assert!(p > floor && q > floor);
        prop_assert!(is_prime(p) && is_prime(q));
        prop_assert_eq!(p % 4, 3);
        prop_assert_eq!(q % 4, 3);
        prop_assert_ne!(p, q);
        prop_assert!(p.abs_diff(q) >= 100u64.max(p / 100));
    }
}
