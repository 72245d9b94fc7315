use crosswalk_common::Result;
use crosswalk_vector::SearchParams;
use tracing::debug;

use crate::assemble::assemble;
use crate::state::AppState;
use crate::types::{MatchRequest, MatchResult};

/// Fetch the source record and search its neighbours concurrently, then assemble.
///
/// Any store or search failure fails the whole match; there are no partial results.
pub async fn find_matches(state: &AppState, request: &MatchRequest) -> Result<MatchResult> {
    let params = SearchParams::new(request.jurisdiction_id.as_str())
        .with_limit(request.count)
        .with_min_similarity(state.config.min_similarity);

    let (source, candidates) = futures::try_join!(
        state.store.fetch_standard(&request.standard_id),
        state.search.search(&request.standard_id, &params),
    )?;

    debug!(
        "Match {} -> {}: source found: {}, {} candidates",
        request.standard_id,
        request.jurisdiction_id,
        source.is_some(),
        candidates.len()
    );

    Ok(assemble(source, candidates, &request.jurisdiction_id))
}
