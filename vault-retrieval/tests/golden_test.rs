//! Golden dataset tests for vault-retrieval.
//!
//! Each fixture seeds a fake lexical index (or an explicit candidate set),
//! runs the engine, and checks the output against the recorded expectation.

use chrono::{DateTime, Utc};
use serde_json::Value;

use test_fixtures::load_fixture_value;
use vault_core::config::VaultConfig;
use vault_core::errors::VaultResult;
use vault_core::models::{Chunk, SourceType};
use vault_core::traits::{ILexicalSearch, SearchHit};
use vault_retrieval::engine::RetrievalEngine;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Lexical index stub seeded from a fixture's `hits` object.
struct FixtureIndex {
    hits: Value,
}

impl ILexicalSearch for FixtureIndex {
    fn search(
        &self,
        _query: &str,
        source_type: SourceType,
        _scope: Option<&str>,
        limit: usize,
    ) -> VaultResult<Vec<SearchHit>> {
        let empty = Vec::new();
        let key = source_type.to_string();
        let list = self.hits[key.as_str()].as_array().unwrap_or(&empty);
        Ok(list
            .iter()
            .take(limit)
            .map(|h| SearchHit {
                id: h["id"].as_str().unwrap().to_string(),
                title: h["title"].as_str().unwrap_or("").to_string(),
                text: h["text"].as_str().unwrap_or("").to_string(),
                rank: h["rank"].as_f64().unwrap_or(0.0),
                occurred_at: parse_ts(&h["occurred_at"]),
            })
            .collect())
    }
}

fn parse_ts(v: &Value) -> Option<DateTime<Utc>> {
    v.as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_candidates(fixture: &Value) -> Vec<Chunk> {
    fixture["input"]["candidates"]
        .as_array()
        .expect("fixture must have candidates")
        .iter()
        .map(|c| Chunk {
            source_id: c["source_id"].as_str().unwrap().to_string(),
            source_type: SourceType::Document,
            title: c["title"].as_str().unwrap_or("").to_string(),
            text: c["text"].as_str().unwrap_or("").to_string(),
            chunk_index: c["chunk_index"].as_u64().unwrap_or(0) as usize,
            occurred_at: parse_ts(&c["occurred_at"]),
        })
        .collect()
}

fn config_from(fixture: &Value) -> VaultConfig {
    let mut config = VaultConfig::default();
    let assembly = &fixture["input"]["assembly"];
    if let Some(n) = assembly["max_total_chars"].as_u64() {
        config.assembly.max_total_chars = n as usize;
    }
    if let Some(n) = assembly["limit_per_type"].as_u64() {
        config.assembly.limit_per_type = n as usize;
    }
    config
}

// ---------------------------------------------------------------------------
// Explicit-candidate ranking goldens
// ---------------------------------------------------------------------------

#[test]
fn recency_tiebreak_golden() {
    let fixture = load_fixture_value("fixtures/retrieval/recency_tiebreak.json");
    let candidates = parse_candidates(&fixture);
    let query = fixture["input"]["query"].as_str().unwrap();
    let take = fixture["input"]["take"].as_u64().unwrap() as usize;

    let index = FixtureIndex {
        hits: Value::Null,
    };
    let engine = RetrievalEngine::new(&index, VaultConfig::default());
    let ranked = engine
        .rank_explicit(query, None, &candidates, take)
        .expect("ranking");

    let order: Vec<(String, usize)> = ranked
        .iter()
        .map(|c| (c.chunk.source_id.clone(), c.chunk.chunk_index))
        .collect();
    let expected: Vec<(String, usize)> = fixture["expected"]["order"]
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            (
                pair[0].as_str().unwrap().to_string(),
                pair[1].as_u64().unwrap() as usize,
            )
        })
        .collect();
    assert_eq!(order, expected);
}

// ---------------------------------------------------------------------------
// Open-domain context-pack goldens
// ---------------------------------------------------------------------------

#[test]
fn context_pack_golden() {
    let fixture = load_fixture_value("fixtures/retrieval/context_pack.json");
    let index = FixtureIndex {
        hits: fixture["input"]["hits"].clone(),
    };
    let engine = RetrievalEngine::new(&index, config_from(&fixture));
    let pack = engine
        .build_context(fixture["input"]["query"].as_str().unwrap())
        .expect("build_context");

    let labels: Vec<&str> = pack.items.iter().map(|i| i.citation_label.as_str()).collect();
    let expected: Vec<&str> = fixture["expected"]["labels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(labels, expected);

    for (type_name, count) in fixture["expected"]["included"].as_object().unwrap() {
        let source_type = match type_name.as_str() {
            "note" => SourceType::Note,
            "document" => SourceType::Document,
            "snippet" => SourceType::Snippet,
            "artifact" => SourceType::Artifact,
            other => panic!("unknown type {other}"),
        };
        assert_eq!(
            pack.log.included_count(source_type),
            count.as_u64().unwrap() as usize,
            "included count for {type_name}"
        );
    }
}

#[test]
fn budget_truncation_golden() {
    let fixture = load_fixture_value("fixtures/retrieval/budget_truncation.json");
    let index = FixtureIndex {
        hits: fixture["input"]["hits"].clone(),
    };
    let engine = RetrievalEngine::new(&index, config_from(&fixture));
    let pack = engine
        .build_context(fixture["input"]["query"].as_str().unwrap())
        .expect("build_context");

    let budget = fixture["expected"]["max_total_chars"].as_u64().unwrap() as usize;
    let total: usize = pack
        .items
        .iter()
        .map(|i| i.text_excerpt.chars().count())
        .sum();
    assert!(total <= budget, "total {total} exceeds budget {budget}");
    assert_eq!(
        pack.items.len(),
        fixture["expected"]["item_count"].as_u64().unwrap() as usize
    );
    assert_eq!(
        pack.items[0].citation_label.as_str(),
        fixture["expected"]["first_label"].as_str().unwrap()
    );
    // The last item was cut into the remaining budget, so it is strictly
    // shorter than its source text.
    let last = pack.items.last().unwrap();
    assert!(last.text_excerpt.chars().count() < "The revolving credit facility remains fully undrawn as of quarter end.".chars().count());
}
