//! Criterion microbenches for reviewmark's per-request hot paths.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure the performance of:
//! - Textract JSON parsing (from_textract_str)
//! - Low-confidence region selection (select_polygons)
//! - Polygon padding (pad)

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use reviewmark::detection::io_textract::from_textract_str;
use reviewmark::geom::{Pixel, Polygon};
use reviewmark::pad::pad;
use reviewmark::select::{select_polygons, SelectOptions};

// Include test fixtures at compile time (no file I/O during benchmark)
const TEXTRACT_FIXTURE: &str = include_str!("../tests/fixtures/sample_textract.json");

/// Benchmark Textract JSON parsing from string.
fn bench_textract_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("textract_parse");
    group.throughput(Throughput::Bytes(TEXTRACT_FIXTURE.len() as u64));

    group.bench_function("from_textract_str", |b| {
        b.iter(|| {
            let result = from_textract_str(black_box(TEXTRACT_FIXTURE)).unwrap();
            black_box(result)
        })
    });

    group.finish();
}

/// Benchmark selection over a page-sized result.
///
/// The fixture is tiled to roughly the block count of a dense page.
fn bench_select(c: &mut Criterion) {
    let single = from_textract_str(TEXTRACT_FIXTURE).expect("Failed to parse fixture");
    let mut result = single.clone();
    for _ in 0..200 {
        result.regions.extend(single.regions.iter().cloned());
    }
    let opts = SelectOptions::default();

    let mut group = c.benchmark_group("select");
    group.throughput(Throughput::Elements(result.len() as u64));

    group.bench_function("select_polygons", |b| {
        b.iter(|| black_box(select_polygons(black_box(&result), &opts)))
    });

    group.finish();
}

/// Benchmark padding a typical word quadrilateral.
fn bench_pad(c: &mut Criterion) {
    let quad: Polygon<Pixel> = Polygon::from_xy(&[
        (412.3, 208.9),
        (498.1, 211.4),
        (497.6, 236.0),
        (411.8, 233.5),
    ]);

    let mut group = c.benchmark_group("pad");
    group.throughput(Throughput::Elements(quad.len() as u64));

    group.bench_function("pad_quad", |b| {
        b.iter(|| black_box(pad(black_box(&quad), 5.0).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_textract_parse, bench_select, bench_pad);
criterion_main!(benches);
