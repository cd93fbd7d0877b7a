use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::label::CitationLabel;
use super::source_type::SourceType;

/// The externally visible, citable unit of an assembled context pack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextItem {
    pub item_type: SourceType,
    pub title: String,
    /// Possibly truncated excerpt; its length counts against the pack budget.
    pub text_excerpt: String,
    /// Id of the source record this excerpt came from.
    pub source_ref: String,
    /// Position locator within the source ("chunk:<N>"), if chunked.
    pub locator: Option<String>,
    pub citation_label: CitationLabel,
}

/// Per-type counts of items actually included in a pack, for observability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrievalLog {
    pub included: BTreeMap<SourceType, usize>,
    pub total_chars: usize,
}

impl RetrievalLog {
    pub fn record(&mut self, item: &ContextItem) {
        *self.included.entry(item.item_type).or_default() += 1;
        self.total_chars += item.text_excerpt.chars().count();
    }

    pub fn included_count(&self, source_type: SourceType) -> usize {
        self.included.get(&source_type).copied().unwrap_or(0)
    }
}

/// Ordered, budget-bounded sequence of context items plus its log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextPack {
    pub items: Vec<ContextItem>,
    pub log: RetrievalLog,
}

impl ContextPack {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render the pack as the context text handed to the generator: one
    /// block per item, prefixed by its citation label and title.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            out.push_str(item.citation_label.as_str());
            out.push(' ');
            out.push_str(&item.title);
            out.push('\n');
            out.push_str(&item.text_excerpt);
            out.push_str("\n\n");
        }
        out
    }
}
