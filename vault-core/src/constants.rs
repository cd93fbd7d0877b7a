/// Hard ceiling on the total character budget of a context pack.
/// Configs asking for more are clamped before use.
pub const MAX_TOTAL_CHARS_CEILING: usize = 60_000;

/// Hard ceiling on per-content-type item caps.
pub const MAX_LIMIT_PER_TYPE: usize = 50;

/// Hard ceiling on the number of items in one context pack, regardless of
/// remaining character budget.
pub const MAX_CONTEXT_ITEMS: usize = 64;

/// Additive boost applied per query token found in a candidate's title.
pub const TITLE_MATCH_BOOST: f64 = 2.25;

/// Maximum recency boost (newest document in the candidate set).
pub const RECENCY_BOOST_MAX: f64 = 0.35;

/// Minimum token length kept by the tokenizer (shorter tokens are noise).
pub const MIN_TOKEN_LEN: usize = 2;

/// Length the normalized content signature is truncated to before hashing
/// for near-duplicate suppression.
pub const DEDUP_SIGNATURE_LEN: usize = 240;
