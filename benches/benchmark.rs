//! Performance benchmarks for se-extract.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - A synthetic post with interleaved text and image modules
//! - URL canonicalization over representative URL shapes
//! - Reassembly without structure (interval distribution)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use se_extract::canonical::canonicalize;
use se_extract::reassemble::reassemble;
use se_extract::{extract, CanonicalImageList, Options};

fn synthetic_post(modules: usize) -> String {
    let mut html = String::from(r#"<html><body><div class="se-title-text">Bench</div><div class="se-main-container">"#);
    for i in 0..modules {
        if i % 3 == 2 {
            html.push_str(&format!(
                r#"<div class="se-component se-image"><div class="se-module se-module-image"><div class="se-image">
                   <img src="https://postfiles.pstatic.net/bench/{i}.jpg?type=w80_blur"
                        data-lazy-src="https://postfiles.pstatic.net/bench/{i}.jpg?type=w773"></div></div></div>"#
            ));
        } else {
            html.push_str(&format!(
                r#"<div class="se-module se-module-text"><p class="se-text"><span>Paragraph {i} of the post.</span></p></div>"#
            ));
        }
    }
    html.push_str("</div></body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_modules");
    for modules in [10usize, 100, 500] {
        let html = synthetic_post(modules);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(modules), &html, |b, html| {
            b.iter(|| extract(black_box(html)));
        });
    }
    group.finish();
}

fn bench_canonicalize(c: &mut Criterion) {
    let urls = [
        "https://postfiles.pstatic.net/MjAy/a.jpg?type=w80_blur",
        "https://postfiles.pstatic.net/MjAy/a.jpg?type=w966",
        "https://postfiles.pstatic.net/MjAy/a.jpg",
        "https://blogpfthumb-phinf.pstatic.net/prof/img_s100.jpg",
        "https://example.com/photo.jpg",
    ];
    c.bench_function("canonicalize", |b| {
        b.iter(|| {
            for url in &urls {
                black_box(canonicalize(black_box(url)));
            }
        });
    });
}

fn bench_reassemble_interval(c: &mut Criterion) {
    let text = (0..200).map(|i| format!("Paragraph {i}")).collect::<Vec<_>>().join("\n\n");
    let images: CanonicalImageList = (0..20).map(|i| format!("https://img/{i}.jpg")).collect();
    let options = Options::default();
    c.bench_function("reassemble_interval", |b| {
        b.iter(|| reassemble(black_box(&text), &images, &[], &options));
    });
}

criterion_group!(benches, bench_extract, bench_canonicalize, bench_reassemble_interval);
criterion_main!(benches);
