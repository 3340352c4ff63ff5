use bbsgen::engine::BitExtraction;
use bbsgen::primes::{is_prime, min_separation};
use bbsgen::rng::SeedRng;
use bbsgen::seed::SeedPolicy;
use bbsgen::{BbsError, BlumBlumShub, DEFAULT_PRIME_FLOOR, GeneratorConfig, OutputFormat};

use num_integer::Integer;
use num_traits::One;

fn seeded(seed: u64) -> BlumBlumShub {
    BlumBlumShub::with_rng(&GeneratorConfig::default(), &mut SeedRng::from_seed(seed)).unwrap()
}

#[test]
fn test_generator_default_config_matches_reference() {
    let config = GeneratorConfig::default();

    assert_eq!(config.prime_floor, DEFAULT_PRIME_FLOOR);
    assert_eq!(config.prime_floor, 10_000);
    assert_eq!(config.seed_policy, SeedPolicy::default());
    assert_eq!(config.extraction, BitExtraction::LeastSignificant);
    assert!(config.validate().is_ok());
}

#[test]
fn test_generator_reference_floor_parameters() {
    let bbs = seeded(2024);
    let (p, q) = (bbs.p(), bbs.q());

    assert!(p > 10_000 && q > 10_000);
    assert_eq!(p % 4, 3);
    assert_eq!(q % 4, 3);
    assert!(is_prime(p) && is_prime(q));
    assert!(p.abs_diff(q) >= min_separation(p));

    let n = bbs.modulus();
    assert_eq!(*n, bbs.primes().modulus());
    assert_eq!(bbs.modulus_bits(), n.bits());

    let s = &bbs.seed().value;
    assert!(*s > num_bigint::BigUint::one() && s < n);
    assert!(s.gcd(n).is_one());
    assert_eq!(*bbs.initial_state(), (s * s) % n);
    assert!(*bbs.initial_state() > n / 10u32);
}

#[test]
fn test_generator_fixed_rng_reproduces_generator() {
    let mut a = seeded(99);
    let mut b = seeded(99);

    assert_eq!(a.parameters(), b.parameters());
    assert_eq!(a.generate_bytes(512), b.generate_bytes(512));
}

#[test]
fn test_generator_os_seeded_generator_builds() {
    let mut bbs = BlumBlumShub::new(&GeneratorConfig::default()).unwrap();

    assert_eq!(bbs.p(), 10007);
    bbs.next_byte();
    assert_eq!(bbs.bits_generated(), 8);
}

#[test]
fn test_generator_invalid_floor_is_rejected_before_search() {
    let config = GeneratorConfig {
        prime_floor: 0,
        ..GeneratorConfig::default()
    };

    assert!(matches!(
        BlumBlumShub::with_rng(&config, &mut SeedRng::from_seed(0)),
        Err(BbsError::InvalidFloor { floor: 0, .. })
    ));
}

#[test]
fn test_generator_invalid_seed_policy_is_rejected() {
    let config = GeneratorConfig {
        seed_policy: SeedPolicy {
            max_attempts: 0,
            ..SeedPolicy::default()
        },
        ..GeneratorConfig::default()
    };

    assert!(matches!(
        config.validate(),
        Err(BbsError::InvalidSeedPolicy(_))
    ));
}

#[test]
fn test_generator_preview_mid_stream_leaves_generation_untouched() {
    let mut with_preview = seeded(5);
    let mut without = seeded(5);

    with_preview.generate_bytes(64);
    without.generate_bytes(64);

    let samples = with_preview.preview(4);
    assert_eq!(samples.len(), 4);
    assert_eq!(with_preview.bits_generated(), 64 * 8);

    for _ in 0..1024 {
        assert_eq!(with_preview.next_bit(), without.next_bit());
    }
}

#[test]
fn test_generator_preview_shows_first_bytes() {
    let mut bbs = seeded(11);
    let expected = seeded(11).generate_bytes(4);

    let values: Vec<u8> = bbs.preview(4).iter().map(|s| s.value).collect();
    assert_eq!(values, expected);
}

#[test]
fn test_generator_parameters_report_contents() {
    let bbs = seeded(3);
    let params = bbs.parameters();
    let report = params.to_string();

    assert_eq!(params.p, bbs.p());
    assert_eq!(params.seed, bbs.seed().value);
    assert!(params.seed_attempts >= 1);
    assert!(report.contains(&format!("p = {}", bbs.p())));
    assert!(report.contains(&format!("n = p × q = {}", bbs.modulus())));
    assert!(report.contains(&format!("{} bits", bbs.modulus_bits())));
}

#[test]
fn test_generator_bitstream_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let text_path = dir.path().join("bbs.txt");
    let bin_path = dir.path().join("bbs.bin");

    let mut text_gen = seeded(8);
    let mut bin_gen = seeded(8);

    let text_report = text_gen
        .generate_bitstream_file(&text_path, 10_000, OutputFormat::Text)
        .unwrap();
    let bin_report = bin_gen
        .generate_bitstream_file(&bin_path, 10_000, OutputFormat::Binary)
        .unwrap();

    assert_eq!(text_report.bytes_written, 10_000);
    assert_eq!(bin_report.bytes_written, 1_250);
    assert_eq!(text_gen.bits_generated(), 10_000);

    let text = std::fs::read(&text_path).unwrap();
    let binary = std::fs::read(&bin_path).unwrap();

    let unpacked: Vec<u8> = binary
        .iter()
        .flat_map(|b| (0..8).rev().map(move |i| b'0' + ((b >> i) & 1)))
        .collect();
    assert_eq!(text, unpacked);
}

#[test]
fn test_generator_parity_extraction_config_reaches_engine() {
    let config = GeneratorConfig {
        extraction: BitExtraction::Parity,
        ..GeneratorConfig::default()
    };

    let bbs = BlumBlumShub::with_rng(&config, &mut SeedRng::from_seed(1)).unwrap();
    assert_eq!(bbs.engine().extraction(), BitExtraction::Parity);
}

#[test]
fn test_generator_higher_floor_widens_modulus() {
    let config = GeneratorConfig {
        prime_floor: 1_000_000,
        ..GeneratorConfig::default()
    };

    let bbs = BlumBlumShub::with_rng(&config, &mut SeedRng::from_seed(4)).unwrap();

    assert!(bbs.p() > 1_000_000);
    assert!(bbs.modulus_bits() >= 40);
}
