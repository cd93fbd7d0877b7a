//! Benchmarks for the hot paths: chunking, tf-idf scoring, pack assembly.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vault_core::config::{AssemblyConfig, ChunkerConfig};
use vault_core::models::{Chunk, SourceType};
use vault_retrieval::assembler::{ContextAssembler, RankedChunk};
use vault_retrieval::chunker::Chunker;
use vault_retrieval::ranking::{rank_candidates, tokenizer};

fn synthetic_chunks(count: usize) -> Vec<Chunk> {
    (0..count)
        .map(|i| Chunk {
            source_id: format!("d{}", i % 10),
            source_type: SourceType::Document,
            title: format!("Document {} quarterly report", i % 10),
            text: format!(
                "revenue guidance for segment {i} grew while operating \
                 margin compressed; management reiterated full year outlook \
                 and capital allocation priorities for the period {i}"
            ),
            chunk_index: i / 10,
            occurred_at: None,
        })
        .collect()
}

fn bench_chunker(c: &mut Criterion) {
    let text = "the quick brown fox jumps over the lazy dog. ".repeat(500);
    let chunker = Chunker::new(ChunkerConfig::default());
    c.bench_function("chunker_22k_chars", |b| {
        b.iter(|| {
            let n = chunker.windows(black_box(&text)).count();
            black_box(n)
        })
    });
}

fn bench_scorer(c: &mut Criterion) {
    let candidates = synthetic_chunks(200);
    let tokens = tokenizer::token_set("revenue guidance outlook");
    c.bench_function("tfidf_rank_200_candidates", |b| {
        b.iter(|| black_box(rank_candidates(black_box(&candidates), &tokens, 10)))
    });
}

fn bench_assembler(c: &mut Criterion) {
    let stream: Vec<RankedChunk> = synthetic_chunks(100)
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| RankedChunk {
            chunk,
            rank: (i % 7) as f64,
        })
        .collect();
    let assembler = ContextAssembler::new(AssemblyConfig::default());
    c.bench_function("assemble_100_chunks", |b| {
        b.iter(|| black_box(assembler.assemble(vec![(SourceType::Document, stream.clone())])))
    });
}

criterion_group!(benches, bench_chunker, bench_scorer, bench_assembler);
criterion_main!(benches);
