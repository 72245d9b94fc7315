use crosswalk_common::{MatchCandidate, Standard};

use crate::types::{MatchResult, MatchingFrom, MatchingTo};

/// Combine the source record and ranked candidates into a two-sided result.
///
/// Either side is `None` when its input is empty; both being `None` is a
/// valid "no match" result.
pub fn assemble(
    source: Option<Standard>,
    candidates: Vec<MatchCandidate>,
    requested_jurisdiction_id: &str,
) -> MatchResult {
    let matching_from = source.map(|standard| MatchingFrom {
        jurisdiction_id: standard.jurisdiction_id.clone(),
        jurisdiction_title: standard.jurisdiction_title.clone(),
        standard,
    });

    let matching_to = match candidates.first() {
        Some(first) => Some(MatchingTo {
            jurisdiction_id: requested_jurisdiction_id.to_string(),
            jurisdiction_title: first.standard.jurisdiction_title.clone(),
            matched_standards: candidates,
        }),
        None => None,
    };

    MatchResult {
        matching_from,
        matching_to,
    }
}
