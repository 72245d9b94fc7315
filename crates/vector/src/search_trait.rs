use async_trait::async_trait;
use crosswalk_common::config::{DEFAULT_MATCH_COUNT, DEFAULT_MIN_SIMILARITY};
use crosswalk_common::{MatchCandidate, Result};

/// Search scope and cut-offs
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    /// Only standards owned by this jurisdiction are candidates
    pub target_jurisdiction_id: String,

    /// Maximum number of candidates returned
    pub limit: usize,

    /// Candidates below this similarity are discarded
    pub min_similarity: f64,
}

impl SearchParams {
    pub fn new(target_jurisdiction_id: impl Into<String>) -> Self {
        Self {
            target_jurisdiction_id: target_jurisdiction_id.into(),
            limit: DEFAULT_MATCH_COUNT,
            min_similarity: DEFAULT_MIN_SIMILARITY,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_min_similarity(mut self, min_similarity: f64) -> Self {
        self.min_similarity = min_similarity;
        self
    }
}

/// Nearest-neighbour search seeded by a stored standard's embedding
#[async_trait]
pub trait VectorSearch: Send + Sync {
    /// Rank the target jurisdiction's standards against the embedding of `source_id`.
    ///
    /// Returns candidates ordered by similarity descending, ties by id
    /// ascending. A source without a record or without an embedding yields
    /// an empty list; errors are retrieval failures only.
    async fn search(&self, source_id: &str, params: &SearchParams) -> Result<Vec<MatchCandidate>>;

    /// Short backend name for logs and health output
    fn backend_name(&self) -> &'static str;
}
