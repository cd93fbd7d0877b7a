//! Deterministic context-pack assembly.
//!
//! Per-type streams of ranked chunks are capped, merged under a total order,
//! and walked against a character budget. Identical inputs always produce a
//! byte-identical pack; every tie has an explicit break.

use std::collections::HashSet;

use tracing::debug;

use vault_core::config::AssemblyConfig;
use vault_core::constants::MAX_CONTEXT_ITEMS;
use vault_core::models::{
    Chunk, CitationLabel, ContextItem, ContextPack, ScoredCandidate, SourceType,
};

/// A chunk carrying its index-convention rank (lower = more relevant).
#[derive(Debug, Clone)]
pub struct RankedChunk {
    pub chunk: Chunk,
    pub rank: f64,
}

impl RankedChunk {
    /// Adapt a scored candidate (higher score = better) to rank convention.
    pub fn from_scored(candidate: ScoredCandidate) -> Self {
        Self {
            rank: -candidate.score,
            chunk: candidate.chunk,
        }
    }
}

/// Merges ranked per-type streams into one budget-bounded context pack.
#[derive(Debug, Clone)]
pub struct ContextAssembler {
    config: AssemblyConfig,
}

impl ContextAssembler {
    pub fn new(config: AssemblyConfig) -> Self {
        Self {
            config: config.clamped(),
        }
    }

    /// Assemble a pack from per-type streams (any subset of the four types
    /// may be present; a type may appear at most once).
    pub fn assemble(&self, streams: Vec<(SourceType, Vec<RankedChunk>)>) -> ContextPack {
        if self.config.max_total_chars == 0 || self.config.limit_per_type == 0 {
            return ContextPack::default();
        }

        // Per-type cap under (rank, source_ref, label) order.
        let mut merged: Vec<(RankedChunk, CitationLabel)> = Vec::new();
        for (source_type, stream) in streams {
            let mut labeled: Vec<(RankedChunk, CitationLabel)> = stream
                .into_iter()
                .filter(|rc| rc.chunk.source_type == source_type)
                .map(|rc| {
                    let label = rc.chunk.citation_label();
                    (rc, label)
                })
                .collect();
            labeled.sort_by(|a, b| {
                a.0.rank
                    .total_cmp(&b.0.rank)
                    .then_with(|| a.0.chunk.source_id.cmp(&b.0.chunk.source_id))
                    .then_with(|| a.1.as_str().cmp(b.1.as_str()))
            });
            labeled.truncate(self.config.limit_per_type);
            merged.extend(labeled);
        }

        // Cross-type merge: rank, then type stratum, then refs.
        merged.sort_by(|a, b| {
            a.0.rank
                .total_cmp(&b.0.rank)
                .then_with(|| {
                    a.0.chunk
                        .source_type
                        .type_order()
                        .cmp(&b.0.chunk.source_type.type_order())
                })
                .then_with(|| a.0.chunk.source_id.cmp(&b.0.chunk.source_id))
                .then_with(|| a.1.as_str().cmp(b.1.as_str()))
        });

        self.pack(merged)
    }

    /// Budget walk over the merged list.
    fn pack(&self, merged: Vec<(RankedChunk, CitationLabel)>) -> ContextPack {
        let budget = self.config.max_total_chars;
        let mut pack = ContextPack::default();
        let mut used_chars = 0usize;
        let mut seen_labels: HashSet<String> = HashSet::new();

        for (ranked, label) in merged {
            if pack.items.len() >= MAX_CONTEXT_ITEMS {
                break;
            }
            let excerpt = ranked.chunk.text.as_str();
            let excerpt_len = excerpt.chars().count();
            if excerpt_len == 0 {
                continue;
            }
            // Labels are unique within a pack; a repeated chunk is dropped.
            if !seen_labels.insert(label.as_str().to_string()) {
                continue;
            }

            let remaining = budget - used_chars;
            if excerpt_len <= remaining {
                used_chars += excerpt_len;
                let item = context_item(&ranked.chunk, excerpt.to_string(), label);
                pack.log.record(&item);
                pack.items.push(item);
                if used_chars == budget {
                    break;
                }
            } else if remaining > 0 {
                // Truncate the overflowing item into the remaining budget.
                let truncated: String = excerpt.chars().take(remaining).collect();
                let truncated = truncated.trim_end().to_string();
                if !truncated.is_empty() {
                    let item = context_item(&ranked.chunk, truncated, label);
                    pack.log.record(&item);
                    pack.items.push(item);
                }
                break;
            } else {
                break;
            }
        }

        debug!(
            items = pack.items.len(),
            chars = pack.log.total_chars,
            budget,
            "assembled context pack"
        );
        pack
    }
}

fn context_item(chunk: &Chunk, text_excerpt: String, citation_label: CitationLabel) -> ContextItem {
    let locator = chunk
        .source_type
        .is_chunked()
        .then(|| format!("chunk:{}", chunk.chunk_index));
    ContextItem {
        item_type: chunk.source_type,
        title: chunk.title.clone(),
        text_excerpt,
        source_ref: chunk.source_id.clone(),
        locator,
        citation_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vault_core::config::AssemblyConfig;

    fn ranked(source_type: SourceType, id: &str, index: usize, text: &str, rank: f64) -> RankedChunk {
        RankedChunk {
            chunk: Chunk {
                source_id: id.to_string(),
                source_type,
                title: format!("{id} title"),
                text: text.to_string(),
                chunk_index: index,
                occurred_at: None,
            },
            rank,
        }
    }

    fn assembler(max_total_chars: usize, limit_per_type: usize) -> ContextAssembler {
        ContextAssembler::new(AssemblyConfig {
            max_total_chars,
            limit_per_type,
        })
    }

    #[test]
    fn budget_is_never_exceeded() {
        let pack = assembler(25, 10).assemble(vec![(
            SourceType::Document,
            vec![
                ranked(SourceType::Document, "d1", 0, "ten chars!", 0.0),
                ranked(SourceType::Document, "d2", 0, "ten chars!", 1.0),
                ranked(SourceType::Document, "d3", 0, "ten chars!", 2.0),
            ],
        )]);
        let total: usize = pack.items.iter().map(|i| i.text_excerpt.chars().count()).sum();
        assert!(total <= 25);
        assert_eq!(pack.items.len(), 3);
        // Third item was truncated into the 5 remaining chars.
        assert_eq!(pack.items[2].text_excerpt, "ten c");
    }

    #[test]
    fn truncated_tail_is_right_trimmed() {
        let pack = assembler(14, 10).assemble(vec![(
            SourceType::Document,
            vec![
                ranked(SourceType::Document, "d1", 0, "ten chars!", 0.0),
                ranked(SourceType::Document, "d2", 0, "abc   def", 1.0),
            ],
        )]);
        assert_eq!(pack.items[1].text_excerpt, "abc");
    }

    #[test]
    fn per_type_cap_applies_before_merge() {
        let stream: Vec<RankedChunk> = (0..10)
            .map(|i| ranked(SourceType::Note, &format!("n{i}"), 0, "note text", i as f64))
            .collect();
        let pack = assembler(10_000, 3).assemble(vec![(SourceType::Note, stream)]);
        assert_eq!(pack.items.len(), 3);
        assert_eq!(pack.log.included_count(SourceType::Note), 3);
    }

    #[test]
    fn tied_ranks_merge_in_type_order() {
        let pack = assembler(10_000, 5).assemble(vec![
            (
                SourceType::Snippet,
                vec![ranked(SourceType::Snippet, "s1", 0, "snippet", 1.0)],
            ),
            (
                SourceType::Note,
                vec![ranked(SourceType::Note, "n1", 0, "note", 1.0)],
            ),
            (
                SourceType::Document,
                vec![ranked(SourceType::Document, "d1", 0, "doc", 1.0)],
            ),
        ]);
        let types: Vec<SourceType> = pack.items.iter().map(|i| i.item_type).collect();
        assert_eq!(
            types,
            vec![SourceType::Note, SourceType::Document, SourceType::Snippet]
        );
    }

    #[test]
    fn zero_length_excerpts_are_skipped() {
        let pack = assembler(100, 5).assemble(vec![(
            SourceType::Document,
            vec![
                ranked(SourceType::Document, "d1", 0, "", 0.0),
                ranked(SourceType::Document, "d2", 0, "real text", 1.0),
            ],
        )]);
        assert_eq!(pack.items.len(), 1);
        assert_eq!(pack.items[0].source_ref, "d2");
    }

    #[test]
    fn citation_labels_are_unique_within_a_pack() {
        let pack = assembler(10_000, 5).assemble(vec![(
            SourceType::Document,
            vec![
                ranked(SourceType::Document, "d1", 0, "first copy", 0.0),
                ranked(SourceType::Document, "d1", 0, "second copy", 1.0),
            ],
        )]);
        assert_eq!(pack.items.len(), 1);
        let mut labels: Vec<&str> = pack.items.iter().map(|i| i.citation_label.as_str()).collect();
        labels.dedup();
        assert_eq!(labels.len(), pack.items.len());
    }

    #[test]
    fn item_count_ceiling_holds_regardless_of_budget() {
        let stream: Vec<RankedChunk> = (0..200)
            .map(|i| ranked(SourceType::Note, &format!("n{i:03}"), 0, "x", i as f64))
            .collect();
        let pack = ContextAssembler::new(AssemblyConfig {
            max_total_chars: 50_000,
            limit_per_type: 50,
        })
        .assemble(vec![
            (SourceType::Note, stream.clone()),
            (
                SourceType::Document,
                stream
                    .iter()
                    .map(|rc| {
                        let mut rc = rc.clone();
                        rc.chunk.source_type = SourceType::Document;
                        rc
                    })
                    .collect(),
            ),
        ]);
        assert!(pack.items.len() <= MAX_CONTEXT_ITEMS);
    }

    #[test]
    fn snippet_items_have_no_locator() {
        let pack = assembler(100, 5).assemble(vec![(
            SourceType::Snippet,
            vec![ranked(SourceType::Snippet, "s1", 0, "highlight", 0.0)],
        )]);
        assert_eq!(pack.items[0].locator, None);
        assert_eq!(pack.items[0].citation_label.as_str(), "[SNIP:s1]");
    }
}
