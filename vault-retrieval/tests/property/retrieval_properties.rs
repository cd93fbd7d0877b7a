//! Property tests: chunker coverage/determinism and the assembler budget law.

use proptest::prelude::*;

use vault_core::config::{AssemblyConfig, ChunkerConfig};
use vault_core::models::{Chunk, SourceType};
use vault_retrieval::assembler::{ContextAssembler, RankedChunk};
use vault_retrieval::chunker::Chunker;

fn arb_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            proptest::char::range('a', 'z'),
            Just(' '),
            Just('\n'),
            proptest::char::range('\u{3040}', '\u{309f}'), // hiragana, multibyte
        ],
        0..4000,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn arb_chunker_config() -> impl Strategy<Value = ChunkerConfig> {
    (10usize..400, 0usize..200, 1usize..300).prop_map(|(chunk_size, overlap, min_len)| {
        ChunkerConfig {
            chunk_size,
            overlap,
            min_len,
        }
    })
}

proptest! {
    #[test]
    fn chunking_is_deterministic(text in arb_text(), config in arb_chunker_config()) {
        let chunker = Chunker::new(config);
        let a: Vec<&str> = chunker.windows(&text).collect();
        let b: Vec<&str> = chunker.windows(&text).collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn every_character_is_covered_by_some_window(
        text in arb_text(),
        config in arb_chunker_config(),
    ) {
        let chunker = Chunker::new(config);
        let trimmed = text.trim();
        let windows: Vec<&str> = chunker.windows(&text).collect();
        let covered: usize = {
            // Windows are contiguous slices of `trimmed`; walk their byte
            // ranges and verify the union is the whole trimmed input.
            let base = trimmed.as_ptr() as usize;
            let mut max_end = 0usize;
            for w in &windows {
                let start = w.as_ptr() as usize - base;
                prop_assert!(start <= max_end, "gap before offset {}", start);
                max_end = max_end.max(start + w.len());
            }
            max_end
        };
        prop_assert_eq!(covered, trimmed.len());
    }

    #[test]
    fn windows_never_exceed_chunk_size(text in arb_text(), config in arb_chunker_config()) {
        let chunker = Chunker::new(config.clone());
        // After clamping, min_len ≤ chunk_size, so even the widened final
        // window stays within the window size.
        let limit = config.clamped().chunk_size;
        for w in chunker.windows(&text) {
            prop_assert!(w.chars().count() <= limit);
        }
    }

    #[test]
    fn assembled_pack_respects_budget(
        texts in proptest::collection::vec(".{0,200}", 0..30),
        budget in 0usize..2000,
    ) {
        let assembler = ContextAssembler::new(AssemblyConfig {
            max_total_chars: budget,
            limit_per_type: 50,
        });
        let stream: Vec<RankedChunk> = texts
            .iter()
            .enumerate()
            .map(|(i, text)| RankedChunk {
                chunk: Chunk {
                    source_id: format!("d{i}"),
                    source_type: SourceType::Document,
                    title: String::new(),
                    text: text.clone(),
                    chunk_index: 0,
                    occurred_at: None,
                },
                rank: i as f64,
            })
            .collect();
        let pack = assembler.assemble(vec![(SourceType::Document, stream)]);
        let total: usize = pack.items.iter().map(|i| i.text_excerpt.chars().count()).sum();
        prop_assert!(total <= budget);
        for item in &pack.items {
            prop_assert!(!item.text_excerpt.is_empty());
        }
    }

    #[test]
    fn assembly_is_deterministic(
        texts in proptest::collection::vec("[a-z ]{0,120}", 0..20),
    ) {
        let assembler = ContextAssembler::new(AssemblyConfig {
            max_total_chars: 800,
            limit_per_type: 10,
        });
        let stream: Vec<RankedChunk> = texts
            .iter()
            .enumerate()
            .map(|(i, text)| RankedChunk {
                chunk: Chunk {
                    source_id: format!("d{}", i % 5),
                    source_type: SourceType::Document,
                    title: String::new(),
                    text: text.clone(),
                    chunk_index: i,
                    occurred_at: None,
                },
                // Tied ranks everywhere; ordering must still be total.
                rank: (i % 3) as f64,
            })
            .collect();
        let a = assembler.assemble(vec![(SourceType::Document, stream.clone())]);
        let b = assembler.assemble(vec![(SourceType::Document, stream)]);
        let labels_a: Vec<String> = a.items.iter().map(|i| i.citation_label.to_string()).collect();
        let labels_b: Vec<String> = b.items.iter().map(|i| i.citation_label.to_string()).collect();
        prop_assert_eq!(labels_a, labels_b);
    }
}
