//! Benchmarks for ElsieFour cipher operations.
//!
//! Measures keyword key derivation, encrypt/decrypt throughput for both
//! variants, and encryption cost scaling with message length.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use elsiefour::{Cipher, Variant};

/// Keyword used consistently across all benchmarks; legal in both alphabets.
const BENCH_KEYWORD: &str = "benchmark_keyword";

/// Builds a plaintext of `len` symbols legal in both alphabets.
fn bench_plaintext(len: usize) -> String {
    "the_quick_brown_fox_"
        .chars()
        .cycle()
        .take(len)
        .collect()
}

/// Benchmarks keyword key derivation for both grid sizes.
fn bench_keyword_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyword_derivation");
    for variant in [Variant::Lc4, Variant::Ls47] {
        group.bench_function(format!("{:?}", variant), |b| {
            b.iter(|| {
                let mut cipher = Cipher::new(variant);
                cipher.keyword(black_box(BENCH_KEYWORD)).unwrap();
            });
        });
    }
    group.finish();
}

/// Benchmarks encryption throughput for both variants on a 1 KiB message.
fn bench_encrypt(c: &mut Criterion) {
    let plaintext = bench_plaintext(1024);

    let mut group = c.benchmark_group("encrypt_1k");
    group.throughput(Throughput::Bytes(plaintext.len() as u64));

    for variant in [Variant::Lc4, Variant::Ls47] {
        let mut cipher = Cipher::new(variant);
        cipher.keyword(BENCH_KEYWORD).unwrap();
        group.bench_function(format!("{:?}", variant), |b| {
            b.iter(|| cipher.encrypt(black_box(&plaintext)).unwrap());
        });
    }

    group.finish();
}

/// Benchmarks decryption throughput for both variants on a 1 KiB message.
fn bench_decrypt(c: &mut Criterion) {
    let plaintext = bench_plaintext(1024);

    let mut group = c.benchmark_group("decrypt_1k");
    group.throughput(Throughput::Bytes(plaintext.len() as u64));

    for variant in [Variant::Lc4, Variant::Ls47] {
        let mut cipher = Cipher::new(variant);
        cipher.keyword(BENCH_KEYWORD).unwrap();
        let ciphertext = cipher.encrypt(&plaintext).unwrap();
        group.bench_function(format!("{:?}", variant), |b| {
            b.iter(|| cipher.decrypt(black_box(&ciphertext)).unwrap());
        });
    }

    group.finish();
}

/// Benchmarks LC4 encryption across message lengths to confirm the
/// linear, constant-work-per-symbol cost model.
fn bench_encrypt_length_scaling(c: &mut Criterion) {
    let lengths: &[usize] = &[64, 256, 1024, 4096];

    let mut cipher = Cipher::new(Variant::Lc4);
    cipher.keyword(BENCH_KEYWORD).unwrap();

    let mut group = c.benchmark_group("encrypt_length_scaling");
    for &len in lengths {
        let plaintext = bench_plaintext(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &plaintext, |b, pt| {
            b.iter(|| cipher.encrypt(black_box(pt)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_keyword_derivation,
    bench_encrypt,
    bench_decrypt,
    bench_encrypt_length_scaling,
);
criterion_main!(benches);
