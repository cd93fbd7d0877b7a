//! Citation label scanner.
//!
//! Two label grammars, scanned with an explicit single pass instead of
//! regex, so malformed-input handling is exhaustive and there is no
//! backtracking:
//!
//! - `[SNIP:<id>]` — id is any non-empty run of non-`]` characters.
//! - `[<PREFIX>:<id>|chunk:<N>]` — PREFIX ∈ {DOC, NOTE, ART}; id excludes
//!   `]` and `|`; N is a non-negative integer.
//!
//! Anything that fails either grammar is skipped silently: generated text
//! is free-form and imperfect labels are expected, not an error.

use std::collections::HashSet;

use vault_core::models::{Citation, SourceType};

/// Deduplicated citations recovered from one answer text, in first-seen
/// order. Id comparison is case-insensitive for deduplication; the
/// first-seen casing is retained.
#[derive(Debug, Clone, Default)]
pub struct ParsedCitations {
    pub citations: Vec<Citation>,
}

impl ParsedCitations {
    pub fn len(&self) -> usize {
        self.citations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.citations.is_empty()
    }

    pub fn snippet_ids(&self) -> impl Iterator<Item = &str> {
        self.citations.iter().filter_map(|c| match c {
            Citation::Snippet { id } => Some(id.as_str()),
            _ => None,
        })
    }

    pub fn locators(&self) -> impl Iterator<Item = (&SourceType, &str, usize)> {
        self.citations.iter().filter_map(|c| match c {
            Citation::DocumentLocator {
                source_type,
                id,
                chunk_index,
            } => Some((source_type, id.as_str(), *chunk_index)),
            _ => None,
        })
    }
}

/// Scan `answer_text` for citation labels.
pub fn parse_citations(answer_text: &str) -> ParsedCitations {
    let mut out = ParsedCitations::default();
    let mut seen: HashSet<String> = HashSet::new();

    let bytes = answer_text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'[' {
            i += 1;
            continue;
        }
        // Bracketed run ends at the next ']'; a nested '[' restarts the scan
        // so `[[SNIP:a]` still finds the inner label.
        let Some(end) = scan_bracket_body(bytes, i + 1) else {
            i += 1;
            continue;
        };
        if let Some(citation) = parse_label(&answer_text[i + 1..end]) {
            if seen.insert(dedup_key(&citation)) {
                out.citations.push(citation);
            }
        }
        i = end + 1;
    }

    out
}

/// Byte offset of the `]` closing a bracket opened just before `start`, or
/// `None` if a `[` or end of input intervenes.
fn scan_bracket_body(bytes: &[u8], start: usize) -> Option<usize> {
    let mut j = start;
    while j < bytes.len() {
        match bytes[j] {
            b']' => return Some(j),
            b'[' => return None,
            _ => j += 1,
        }
    }
    None
}

/// Parse the interior of one bracketed token against both grammars.
fn parse_label(inner: &str) -> Option<Citation> {
    let (prefix, rest) = inner.split_once(':')?;
    match prefix {
        "SNIP" => {
            if rest.is_empty() {
                return None;
            }
            Some(Citation::Snippet {
                id: rest.to_string(),
            })
        }
        "DOC" | "NOTE" | "ART" => {
            let source_type = SourceType::from_label_prefix(prefix)?;
            let (id, locator) = rest.split_once('|')?;
            if id.is_empty() {
                return None;
            }
            let digits = locator.strip_prefix("chunk:")?;
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let chunk_index: usize = digits.parse().ok()?;
            Some(Citation::DocumentLocator {
                source_type,
                id: id.to_string(),
                chunk_index,
            })
        }
        _ => None,
    }
}

fn dedup_key(citation: &Citation) -> String {
    match citation {
        Citation::Snippet { id } => format!("snip\u{1}{}", id.to_lowercase()),
        Citation::DocumentLocator {
            source_type,
            id,
            chunk_index,
        } => format!(
            "{}\u{1}{}\u{1}{}",
            source_type.label_prefix(),
            id.to_lowercase(),
            chunk_index
        ),
    }
}
