use crate::errors::VaultResult;

/// Supplies alias tokens for an entity (ticker, short name, identifier)
/// that are unioned into the ranking token set.
pub trait IAliasProvider: Send + Sync {
    fn aliases(&self, entity_id: &str) -> VaultResult<Vec<String>>;
}
