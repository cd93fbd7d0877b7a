//! Near-duplicate suppression within one source document.
//!
//! Overlapping windows of the same passage score almost identically; keeping
//! both wastes budget. Duplicates are demoted, not discarded: if a document
//! has fewer unique chunks than the caller asked for, duplicates still fill
//! the quota.

use std::collections::HashSet;

use vault_core::constants::DEDUP_SIGNATURE_LEN;
use vault_core::models::ScoredCandidate;

/// Reorder a score-sorted candidate list so that, per source document, the
/// first chunk with each content signature precedes all repeats. Relative
/// order within the kept and demoted strata is preserved.
pub fn demote_duplicates(candidates: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    let mut seen: HashSet<(String, blake3::Hash)> = HashSet::new();
    let mut kept = Vec::with_capacity(candidates.len());
    let mut demoted = Vec::new();

    for candidate in candidates {
        let key = (
            candidate.chunk.source_id.clone(),
            signature(&candidate.chunk.text),
        );
        if seen.insert(key) {
            kept.push(candidate);
        } else {
            demoted.push(candidate);
        }
    }

    kept.extend(demoted);
    kept
}

/// Digest of the normalized content signature: lowercase, alphanumeric and
/// single spaces only, truncated to [`DEDUP_SIGNATURE_LEN`] chars.
fn signature(text: &str) -> blake3::Hash {
    let mut normalized = String::with_capacity(DEDUP_SIGNATURE_LEN);
    let mut chars_out = 0usize;
    let mut pending_space = false;
    for c in text.chars() {
        if chars_out >= DEDUP_SIGNATURE_LEN {
            break;
        }
        if c.is_alphanumeric() {
            if pending_space && chars_out > 0 {
                normalized.push(' ');
                chars_out += 1;
                if chars_out >= DEDUP_SIGNATURE_LEN {
                    break;
                }
            }
            pending_space = false;
            for lc in c.to_lowercase() {
                if chars_out >= DEDUP_SIGNATURE_LEN {
                    break;
                }
                normalized.push(lc);
                chars_out += 1;
            }
        } else if c.is_whitespace() {
            pending_space = true;
        }
        // Other punctuation is dropped without becoming a separator.
    }
    blake3::hash(normalized.as_bytes())
}
