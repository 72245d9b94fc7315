use actix_web::{http::StatusCode, web, HttpResponse};
use crosswalk_common::CrosswalkError;

mod match_standard;
mod system;

pub use match_standard::match_standard;
pub use system::health;

/// Register all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(
        web::resource("/match_standard").route(web::route().to(match_standard)),
    );
}

/// Plain-text error response carrying the error message
pub fn error_response(err: &CrosswalkError) -> HttpResponse {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status)
        .content_type("text/plain; charset=utf-8")
        .body(err.to_string())
}
