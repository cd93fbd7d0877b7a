//! Hand-rolled tf-idf scorer with title and recency boosts.
//!
//! `score(c) = Σ_t tf(t,c) × idf(t) + 2.25 × title_matches(c) + recency(c)`
//! with `idf(t) = ln((N+1)/(1+df(t))) + 1`, document frequencies computed
//! over the candidate set of one ranking call, not over the corpus.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};

use vault_core::constants::{RECENCY_BOOST_MAX, TITLE_MATCH_BOOST};
use vault_core::models::{Chunk, ScoredCandidate};

use super::tokenizer;

/// Score every candidate chunk against the token set. Output is sorted by
/// score descending, ties broken by ascending chunk index, then source id.
pub fn score(candidates: &[Chunk], tokens: &BTreeSet<String>) -> Vec<ScoredCandidate> {
    let n = candidates.len();
    if n == 0 {
        return Vec::new();
    }

    let chunk_counts: Vec<HashMap<String, usize>> = candidates
        .iter()
        .map(|c| tokenizer::token_counts(&c.text))
        .collect();

    // Document frequency per query token, over this candidate set only.
    let idf: HashMap<&String, f64> = tokens
        .iter()
        .map(|t| {
            let df = chunk_counts.iter().filter(|counts| counts.contains_key(t)).count();
            let idf = ((n as f64 + 1.0) / (1.0 + df as f64)).ln() + 1.0;
            (t, idf)
        })
        .collect();

    let recency = recency_boosts(candidates);

    let mut scored: Vec<ScoredCandidate> = candidates
        .iter()
        .zip(chunk_counts.iter())
        .map(|(chunk, counts)| {
            let title_counts = tokenizer::token_counts(&chunk.title);
            let mut s = 0.0;
            for t in tokens {
                let tf = counts.get(t).copied().unwrap_or(0) as f64;
                s += tf * idf[t];
                if title_counts.contains_key(t) {
                    s += TITLE_MATCH_BOOST;
                }
            }
            s += recency.get(&chunk.source_id).copied().unwrap_or(0.0);
            ScoredCandidate {
                chunk: chunk.clone(),
                score: s,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.chunk.chunk_index.cmp(&b.chunk.chunk_index))
            .then(a.chunk.source_id.cmp(&b.chunk.source_id))
    });

    scored
}

/// Per-source-document recency boost.
///
/// Documents are ranked by their most recent timestamp descending; rank r of
/// R distinct documents earns `((R−1−r)/max(1,R−1)) × 0.35`. Documents with
/// equal or unknown timestamps share the lowest rank position of their tie
/// group, so the boost never depends on iteration order.
fn recency_boosts(candidates: &[Chunk]) -> HashMap<String, f64> {
    let mut latest: HashMap<&str, Option<DateTime<Utc>>> = HashMap::new();
    for c in candidates {
        let entry = latest.entry(c.source_id.as_str()).or_insert(None);
        if c.occurred_at > *entry {
            *entry = c.occurred_at;
        }
    }

    // Newest first; unknown timestamps last; document id as final tie-break.
    let mut docs: Vec<(&str, Option<DateTime<Utc>>)> =
        latest.into_iter().map(|(id, ts)| (id, ts)).collect();
    docs.sort_by(|a, b| match (b.1, a.1) {
        (Some(x), Some(y)) => x.cmp(&y).then(a.0.cmp(b.0)),
        (Some(_), None) => std::cmp::Ordering::Greater,
        (None, Some(_)) => std::cmp::Ordering::Less,
        (None, None) => a.0.cmp(b.0),
    });

    let r_total = docs.len();
    let denom = (r_total.saturating_sub(1)).max(1) as f64;

    let mut boosts = HashMap::with_capacity(r_total);
    let mut i = 0;
    while i < r_total {
        // Extend across the timestamp-equal group; everyone in it gets the
        // group's lowest rank position.
        let mut j = i;
        while j + 1 < r_total && docs[j + 1].1 == docs[i].1 {
            j += 1;
        }
        let rank = j as f64;
        let boost = ((r_total as f64 - 1.0 - rank).max(0.0) / denom) * RECENCY_BOOST_MAX;
        for doc in &docs[i..=j] {
            boosts.insert(doc.0.to_string(), boost);
        }
        i = j + 1;
    }

    boosts
}
