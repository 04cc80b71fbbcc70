//! Benchmarks for catalog resolution and sentence extraction

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kugiri_core::{SentenceExtractor, Symbol, SymbolCatalog, SymbolType};
use std::hint::black_box;

/// Generate test text of specified size
fn generate_text(base_text: &str, size_kb: usize) -> String {
    let target_size = size_kb * 1024;
    let repeat_count = target_size / base_text.len() + 1;
    let text = base_text.repeat(repeat_count);
    let mut end = target_size.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}

fn bench_catalog_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_resolution");

    for (language, variant) in [("en", None), ("ru", None), ("ja", Some("zenkaku2"))] {
        let id = format!("{language}-{}", variant.unwrap_or("default"));
        group.bench_function(BenchmarkId::new("builtin", &id), |b| {
            b.iter(|| SymbolCatalog::resolve(black_box(language), variant, []));
        });
    }

    let overrides = vec![
        Symbol::new(SymbolType::FullStop, '．', ""),
        Symbol::new(SymbolType::Comma, '，', ""),
        Symbol::new(SymbolType::ExclamationMark, '!', "！"),
    ];
    group.bench_function("with_overrides", |b| {
        b.iter(|| SymbolCatalog::resolve("ja", None, black_box(overrides.clone())));
    });

    group.finish();
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    let cases = [
        (
            "english",
            SymbolCatalog::resolve("en", None, []),
            "This is a test sentence. Dr. Smith paid $3.50 for it! Does it work? ",
        ),
        (
            "japanese",
            SymbolCatalog::resolve("ja", None, []),
            "これはテストです。「本当ですか？」と彼は言った！",
        ),
    ];

    for (name, catalog, base_text) in &cases {
        for suppress in [false, true] {
            let extractor = SentenceExtractor::builder()
                .catalog(catalog)
                .enclosure_suppression(suppress)
                .build()
                .expect("catalog is set");
            let label = if suppress { "suppressed" } else { "plain" };

            for size_kb in [10, 100, 1000] {
                let text = generate_text(base_text, size_kb);
                group.throughput(Throughput::Bytes(text.len() as u64));
                group.bench_with_input(
                    BenchmarkId::new(format!("{name}-{label}"), format!("{size_kb}KB")),
                    &text,
                    |b, text| b.iter(|| extractor.extract(black_box(text)).count()),
                );
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_catalog_resolution, bench_extraction);
criterion_main!(benches);
