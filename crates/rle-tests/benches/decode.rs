use std::io;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rle_decoder::{RleDecoder, StreamingDecoder};
use rle_tests::{golden, synthetic_pattern};

fn bench_decode_golden(c: &mut Criterion) {
    let gun = golden("gosper_glider_gun.rle");
    let decoder = RleDecoder::new();

    c.bench_function("decode_gosper_gun", |b| {
        b.iter(|| decoder.decode(&gun[..], io::sink()).unwrap());
    });
}

fn bench_decode_synthetic(c: &mut Criterion) {
    let decoder = RleDecoder::new();
    let mut group = c.benchmark_group("decode_synthetic");

    for side in [64usize, 256, 1024] {
        let pattern = synthetic_pattern(side, side, 0x5EED);
        group.throughput(Throughput::Bytes(pattern.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side), &pattern, |b, p| {
            b.iter(|| decoder.decode(p.as_bytes(), io::sink()).unwrap());
        });
    }

    group.finish();
}

fn bench_long_runs(c: &mut Criterion) {
    let decoder = RleDecoder::new();
    let input = b"1000000o$1000000b!";

    let mut group = c.benchmark_group("decode_long_runs");
    group.throughput(Throughput::Bytes(2_000_002));
    group.bench_function("two_million_cells", |b| {
        b.iter(|| decoder.decode(&input[..], io::sink()).unwrap());
    });
    group.finish();
}

fn bench_tokenize_only(c: &mut Criterion) {
    let pattern = synthetic_pattern(256, 256, 0x5EED);

    c.bench_function("tokenize_256", |b| {
        b.iter(|| StreamingDecoder::new(pattern.as_bytes()).count());
    });
}

criterion_group!(
    benches,
    bench_decode_golden,
    bench_decode_synthetic,
    bench_long_runs,
    bench_tokenize_only
);
criterion_main!(benches);
