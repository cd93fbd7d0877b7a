//! Alias expansion: union an entity's alias tokens (ticker, short name,
//! alternate spellings) into the query token set so "MSFT" matches notes
//! that only say "Microsoft".

use std::collections::BTreeSet;

use tracing::debug;

use vault_core::errors::{RetrievalError, VaultResult};
use vault_core::traits::IAliasProvider;

use crate::ranking::tokenizer;

/// Fetch aliases for `entity_id` and union their tokens into `tokens`.
/// Alias strings go through the same tokenizer as the query, so multi-word
/// aliases contribute one token each.
pub fn expand_with_aliases(
    tokens: &mut BTreeSet<String>,
    provider: &dyn IAliasProvider,
    entity_id: &str,
) -> VaultResult<()> {
    let aliases = provider
        .aliases(entity_id)
        .map_err(|e| RetrievalError::AliasLookupFailed {
            entity_id: entity_id.to_string(),
            reason: e.to_string(),
        })?;
    let before = tokens.len();
    for alias in &aliases {
        tokens.extend(tokenizer::token_set(alias));
    }
    debug!(
        entity_id,
        aliases = aliases.len(),
        added_tokens = tokens.len() - before,
        "expanded query with entity aliases"
    );
    Ok(())
}
