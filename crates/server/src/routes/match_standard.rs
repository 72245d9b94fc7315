use actix_web::{http::Method, web, HttpRequest, HttpResponse};
use std::sync::Arc;
use tracing::{error, info, warn};

use super::error_response;
use crate::matcher::find_matches;
use crate::state::AppState;
use crate::types::{MatchQuery, MatchRequest};

/// Match a standard against a target jurisdiction.
///
/// Accepts any method; parameters come from the query string only.
pub async fn match_standard(
    req: HttpRequest,
    state: web::Data<Arc<AppState>>,
) -> HttpResponse {
    // Preflight: acknowledge without touching the store
    if req.method() == Method::OPTIONS {
        return HttpResponse::Ok().body("ok");
    }

    // Repeated keys are allowed; the first occurrence wins
    let query = match web::Query::<Vec<(String, String)>>::from_query(req.query_string()) {
        Ok(pairs) => MatchQuery::from_pairs(pairs.into_inner()),
        Err(e) => {
            warn!("Rejected match query {:?}: {}", req.query_string(), e);
            return HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Invalid query string: {}", e));
        }
    };

    let request = match MatchRequest::from_query(&query, state.config.max_match_count) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected match request: {}", e);
            return error_response(&e);
        }
    };

    info!(
        "Matching {} against jurisdiction {} (count={})",
        request.standard_id, request.jurisdiction_id, request.count
    );

    match find_matches(&state, &request).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            error!(
                "Match failed for {} -> {}: {}",
                request.standard_id, request.jurisdiction_id, e
            );
            error_response(&e)
        }
    }
}
