//! Benchmark: `textstyle::Transformer` over chunked input
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use textstyle::{Status, Style, Transformer};

/// Deterministic mixed text of exactly `target_len` bytes. Mostly ASCII, with
/// two- to four-byte sequences sprinkled in so chunk edges regularly fall
/// inside a rune.
fn make_payload(target_len: usize) -> Vec<u8> {
    const PIECES: &[&str] = &["The quick brown fox ", "0123456789 ", "ελληνικά ", "日本語 ", "🎉 "];
    let mut out = Vec::with_capacity(target_len + 16);
    for piece in PIECES.iter().cycle() {
        if out.len() >= target_len {
            break;
        }
        out.extend_from_slice(piece.as_bytes());
    }
    out.truncate(target_len);
    out
}

/// Feed `payload` in `chunk_len` pieces through a destination of `dst_len`
/// bytes; returns the output size so the work cannot be optimised away.
fn run_transformer(t: &mut Transformer, payload: &[u8], chunk_len: usize, dst_len: usize) -> usize {
    t.reset();
    let mut dst = vec![0u8; dst_len];
    let mut produced = 0;
    let mut chunks = payload.chunks(chunk_len).peekable();
    while let Some(chunk) = chunks.next() {
        let at_eof = chunks.peek().is_none();
        let mut src = chunk;
        loop {
            let p = t.transform(&mut dst, src, at_eof);
            produced += p.written;
            src = &src[p.consumed..];
            if src.is_empty() && p.status != Status::ShortDestination {
                break;
            }
        }
    }
    produced
}

fn bench_transform(c: &mut Criterion) {
    let payload = make_payload(64 * 1024);

    let mut group = c.benchmark_group("transform_chunked");
    group.throughput(Throughput::Bytes(payload.len() as u64));

    for &chunk_len in &[1usize, 16, 4096] {
        for &dst_len in &[4usize, 64, 16 * 1024] {
            let mut t = Transformer::new(Style::BOLD);
            group.bench_with_input(
                BenchmarkId::new(format!("chunk{chunk_len}"), format!("dst{dst_len}")),
                &payload,
                |b, payload| {
                    b.iter(|| black_box(run_transformer(&mut t, black_box(payload), chunk_len, dst_len)));
                },
            );
        }
    }
    group.finish();

    let text = String::from_utf8_lossy(&payload).into_owned();
    c.bench_function("apply_whole_string", |b| {
        b.iter(|| black_box(Style::MONOSPACE.apply(black_box(&text))));
    });
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_transform }
criterion_main!(benches);
