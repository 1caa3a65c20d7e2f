//! Benchmarks for classicrypt cipher operations.
//!
//! Measures stream-cipher throughput (Caesar, Vigenère) and transposition
//! block throughput across input sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use classicrypt::{
    BlockCipher, CaesarCipher, CaesarKey, CipherKey, CipherParameter, Direction, KeystreamKey,
    Padding, PermutationKey, StreamCipher, TranspositionCipher, VigenereCipher,
};

/// Input sizes exercised by the throughput benchmarks.
const SIZES: [usize; 3] = [64, 1024, 16 * 1024];

/// Benchmarks Caesar bulk encryption throughput.
fn bench_caesar(c: &mut Criterion) {
    let param = CipherParameter::Key(CipherKey::Caesar(CaesarKey::new(5)));
    let mut cipher = CaesarCipher::new();
    cipher.init(Direction::Encrypt, &param).unwrap();

    let mut group = c.benchmark_group("caesar_encrypt");
    for size in SIZES {
        let input = vec![0xA7u8; size];
        let mut output = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                cipher
                    .process(black_box(&input), 0, &mut output, 0)
                    .unwrap()
            });
        });
    }
    group.finish();
}

/// Benchmarks Vigenère bulk encryption throughput, including the per-call
/// keystream length check.
fn bench_vigenere(c: &mut Criterion) {
    let mut group = c.benchmark_group("vigenere_encrypt");
    for size in SIZES {
        let keystream: Vec<u8> = (0..size).map(|i| (i * 7 + 3) as u8).collect();
        let param = CipherParameter::Key(CipherKey::Keystream(KeystreamKey::new(keystream)));
        let mut cipher = VigenereCipher::new();
        cipher.init(Direction::Encrypt, &param).unwrap();

        let input = vec![0x5Cu8; size];
        let mut output = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                cipher
                    .process(black_box(&input), 0, &mut output, 0)
                    .unwrap()
            });
        });
    }
    group.finish();
}

/// Benchmarks transposition block encryption across column counts.
fn bench_transposition(c: &mut Criterion) {
    let input = vec![0x31u8; 16 * 1024];

    let mut group = c.benchmark_group("transposition_encrypt");
    group.throughput(Throughput::Bytes(input.len() as u64));
    for columns in [4usize, 16, 64] {
        let column_order: Vec<usize> = (0..columns).rev().collect();
        let param = CipherParameter::Key(CipherKey::Permutation(
            PermutationKey::new(column_order).unwrap(),
        ));
        let mut cipher = TranspositionCipher::new(Padding::Zero);
        cipher.init(Direction::Encrypt, &param).unwrap();

        let total = input.len().div_ceil(columns) * columns;
        let mut output = vec![0u8; total];
        group.bench_with_input(BenchmarkId::from_parameter(columns), &columns, |b, _| {
            b.iter(|| {
                cipher
                    .process_block(black_box(&input), &mut output)
                    .unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_caesar, bench_vigenere, bench_transposition);
criterion_main!(benches);
