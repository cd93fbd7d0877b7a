use crate::errors::VaultResult;
use crate::models::ScoredCandidate;

/// One ranking capability, two implementations: index-delegated ranking for
/// open-domain queries and hand-rolled tf-idf over an explicit candidate
/// set. Call sites pick the implementation; there is no hierarchy.
pub trait Ranker {
    fn rank(&self, query: &str, take: usize) -> VaultResult<Vec<ScoredCandidate>>;
}
