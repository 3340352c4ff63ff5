use bbsgen::primes::{find_prime_pair, is_prime};
use bbsgen::seed::{SeedPolicy, find_seed};

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::hint::black_box;

pub fn bench_is_prime(c: &mut Criterion) {
    c.bench_function("is_prime 1000003", |b| b.iter(|| is_prime(black_box(1_000_003))));
}

pub fn bench_prime_pair(c: &mut Criterion) {
    c.bench_function("find_prime_pair floor 10000", |b| {
        b.iter(|| find_prime_pair(black_box(10_000)).unwrap())
    });
}

pub fn bench_seed(c: &mut Criterion) {
    let n = find_prime_pair(10_000).unwrap().modulus();
    let policy = SeedPolicy::default();
    let mut rng = ChaCha20Rng::seed_from_u64(0);

    c.bench_function("find_seed floor 10000", |b| {
        b.iter(|| find_seed(black_box(&n), &policy, &mut rng).unwrap())
    });
}

criterion_group!(benches, bench_is_prime, bench_prime_pair, bench_seed);
criterion_main!(benches);
