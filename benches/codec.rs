//! Criterion benchmarks for `mans::compress`/`mans::decompress`.
//!
//! Run with:
//!   cargo bench --bench codec
//!
//! Mirrors the teacher's `benches/block.rs` shape (one `BenchmarkId` per
//! input class, `Throughput::Bytes`), but since MANS operates on typed
//! integer arrays rather than text, the corpus is a small set of explicit
//! element-array constructors instead of the teacher's lorem-ipsum generator.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use mans::adm::AdmElement;
use mans::container;

const N: usize = 1 << 16;

/// Flat array: every element equal. ADM-eligible, collapses to near-zero residuals.
fn constant_u16(n: usize) -> Vec<u16> {
    vec![12_345u16; n]
}

/// Low local variance but a slow drift: ADM-eligible (each 512-window stays
/// inside the default threshold even though the whole array's range is wide).
fn low_variance_u16(n: usize) -> Vec<u16> {
    (0..n).map(|i| (30_000 + (i / 4096) as i64 + (i % 7) as i64) as u16).collect()
}

/// High local variance: every window blows past the default threshold, so
/// the dispatcher selects PANS-only.
fn high_variance_u16(n: usize) -> Vec<u16> {
    (0..n).map(|i| ((i * 2654435761u64 as usize) % 65536) as u16).collect()
}

fn bytes_of<T: AdmElement>(elements: &[T]) -> usize {
    elements.len() * T::WIDTH
}

fn bench_compress_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("mans_compress_decompress");

    let inputs: Vec<(&str, Vec<u16>)> = vec![
        ("constant", constant_u16(N)),
        ("low_variance", low_variance_u16(N)),
        ("high_variance", high_variance_u16(N)),
    ];

    for (name, elements) in &inputs {
        let byte_len = bytes_of(elements.as_slice());
        group.throughput(Throughput::Bytes(byte_len as u64));

        group.bench_with_input(BenchmarkId::new("compress_u16", name), elements, |b, elements| {
            b.iter(|| container::compress(elements, None))
        });

        let compressed = container::compress(elements, None);
        group.bench_with_input(BenchmarkId::new("decompress_u16", name), &compressed, |b, compressed| {
            b.iter(|| container::decompress::<u16>(compressed).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compress_decompress);
criterion_main!(benches);
