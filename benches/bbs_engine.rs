use bbsgen::engine::BbsEngine;
use bbsgen::{OutputFormat, StreamEmitter};

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use num_bigint::BigUint;
use std::hint::black_box;
use std::io;

fn reference_engine() -> BbsEngine {
    let n = BigUint::from(10007u64 * 10111u64);
    BbsEngine::new(n, BigUint::from(31_415_926u64)).unwrap()
}

pub fn bench_next_byte(c: &mut Criterion) {
    let mut engine = reference_engine();

    c.bench_function("bbs next_byte", |b| b.iter(|| black_box(engine.next_byte())));
}

pub fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("bbs emit 64 KiB");
    group.throughput(Throughput::Bytes(64 * 1024));

    let emitter = StreamEmitter::default();

    for format in [OutputFormat::Binary, OutputFormat::Text] {
        let bits = match format {
            OutputFormat::Binary => 8 * 64 * 1024,
            OutputFormat::Text => 64 * 1024,
        };
        let mut engine = reference_engine();

        group.bench_function(format.to_string(), |b| {
            b.iter(|| {
                emitter
                    .emit(&mut engine, &mut io::sink(), black_box(bits), format)
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_next_byte, bench_emit);
criterion_main!(benches);
