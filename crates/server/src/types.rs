use crosswalk_common::{MatchCandidate, Standard};
use serde::{Deserialize, Serialize};

/// Raw match query parameters, as received
#[derive(Debug, Default, Deserialize)]
pub struct MatchQuery {
    /// Source standard id
    pub standard_id: Option<String>,

    /// Target jurisdiction id
    pub jurisdiction_id: Option<String>,

    /// Requested number of matches (coerced, see `params::parse_count`)
    pub count: Option<String>,
}

/// Validated match request
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRequest {
    pub standard_id: String,
    pub jurisdiction_id: String,
    pub count: usize,
}

/// Source side of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingFrom {
    /// The source's own jurisdiction
    pub jurisdiction_id: Option<String>,
    pub jurisdiction_title: Option<String>,
    pub standard: Standard,
}

/// Target side of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingTo {
    /// The requested target jurisdiction
    pub jurisdiction_id: String,

    /// Title taken from the best candidate
    pub jurisdiction_title: Option<String>,

    /// Ordered by similarity descending
    pub matched_standards: Vec<MatchCandidate>,
}

/// Match response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matching_from: Option<MatchingFrom>,
    pub matching_to: Option<MatchingTo>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store: &'static str,
    pub search: &'static str,
}
