use async_trait::async_trait;
use crosswalk_common::{Catalog, CrosswalkError, MatchCandidate, Result};
use tracing::{debug, info};

use crate::search_trait::{SearchParams, VectorSearch};
use crate::similarity::cosine_similarity;

/// Sort by similarity descending, ties by id ascending
pub fn rank_candidates(candidates: &mut [MatchCandidate]) {
    candidates.sort_by(|a, b| {
        b.similarity
            .total_cmp(&a.similarity)
            .then_with(|| a.standard.id.cmp(&b.standard.id))
    });
}

/// Vector search engine scanning an in-memory catalog
#[derive(Debug, Clone)]
pub struct MemoryVectorSearch {
    catalog: Catalog,
}

impl MemoryVectorSearch {
    pub fn new(catalog: Catalog) -> Self {
        info!(
            "In-memory vector search initialized - {} embedded standards",
            catalog.embedded_count()
        );
        Self { catalog }
    }
}

#[async_trait]
impl VectorSearch for MemoryVectorSearch {
    async fn search(&self, source_id: &str, params: &SearchParams) -> Result<Vec<MatchCandidate>> {
        debug!(
            "Searching matches for {} (jurisdiction={}, limit={}, min_similarity={})",
            source_id, params.target_jurisdiction_id, params.limit, params.min_similarity
        );

        let Some(source) = self
            .catalog
            .get(source_id)
            .and_then(|row| row.embedding.as_deref())
        else {
            debug!("No embedding for {}, nothing to match", source_id);
            return Ok(Vec::new());
        };

        let mut total_candidates = 0;
        let mut results = Vec::new();
        for row in self.catalog.rows() {
            if row.standard.jurisdiction_id.as_deref() != Some(params.target_jurisdiction_id.as_str()) {
                continue;
            }
            let Some(embedding) = row.embedding.as_deref() else {
                continue;
            };
            if embedding.len() != source.len() {
                return Err(CrosswalkError::vector_search(format!(
                    "Embedding dimension mismatch: {} has {}, {} has {}",
                    source_id,
                    source.len(),
                    row.standard.id,
                    embedding.len()
                )));
            }
            total_candidates += 1;

            let Some(similarity) = cosine_similarity(source, embedding) else {
                continue;
            };
            let similarity = similarity.min(1.0);
            if similarity < params.min_similarity {
                continue;
            }

            results.push(MatchCandidate::new(row.standard.clone(), similarity));
        }

        rank_candidates(&mut results);
        results.truncate(params.limit);

        info!(
            "Search completed - {} results (filtered from {} candidates)",
            results.len(),
            total_candidates
        );
        Ok(results)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
