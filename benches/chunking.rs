//! Benchmarks for speech chunking.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use speakable::{split_sentences, SpeechChunker};

fn sample_text(size: usize) -> String {
    // Generate realistic text with sentence, clause, and paragraph structure
    let sentences = [
        "The quick brown fox jumps over the lazy dog. ",
        "Pack my box with five dozen liquor jugs. ",
        "How vexingly quick daft zebras jump! ",
        "The five boxing wizards, tired and sore, jump quickly.\n\n",
        "Sphinx of black quartz, judge my vow. ",
    ];
    let mut text = String::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.push_str(sentences[i % sentences.len()]);
        i += 1;
    }
    text.truncate(size);
    text
}

/// One long sentence held together by commas, forcing the full cascade.
fn run_on_text(size: usize) -> String {
    let mut text = String::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.push_str(if i % 4 == 3 { "and then another clause, " } else { "word " });
        i += 1;
    }
    text.truncate(size);
    text
}

fn bench_sentence_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("sentence_split");

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("split", size), &text, |b, text| {
            b.iter(|| split_sentences(black_box(text)))
        });
    }

    group.finish();
}

fn bench_chunker(c: &mut Criterion) {
    let mut group = c.benchmark_group("speech_chunker");
    let chunker = SpeechChunker::default();

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("prose", size), &text, |b, text| {
            b.iter(|| chunker.chunk(black_box(text)))
        });
    }

    group.finish();
}

fn bench_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("overflow_cascade");
    let chunker = SpeechChunker::new(80).expect("valid budget");

    for size in [1_000, 10_000, 100_000] {
        let text = run_on_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("run_on", size), &text, |b, text| {
            b.iter(|| chunker.chunk(black_box(text)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sentence_split, bench_chunker, bench_cascade);
criterion_main!(benches);
