//! Crosswalk HTTP server
//!
//! Actix-web service answering "which standards in a target jurisdiction are
//! closest to this one?"

use actix_cors::Cors;
use actix_web::{middleware::DefaultHeaders, web, App, HttpServer};
use crosswalk_common::{AppConfig, Result};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub mod assemble;
pub mod matcher;
pub mod params;
pub mod routes;
pub mod state;
pub mod types;

pub use assemble::assemble;
pub use matcher::find_matches;
pub use state::AppState;
pub use types::{MatchQuery, MatchRequest, MatchResult, MatchingFrom, MatchingTo};

/// Request headers browsers may send cross-origin
pub const ALLOWED_HEADERS: [&str; 4] = ["authorization", "x-client-info", "apikey", "content-type"];

/// CORS policy for cross-origin requests.
///
/// Preflights pass through to the handlers, which acknowledge any `OPTIONS`
/// with or without an Origin.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allowed_headers(ALLOWED_HEADERS)
        .disable_preflight()
}

/// Access-control headers attached to every response, with or without an Origin
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Headers", ALLOWED_HEADERS.join(", ")))
}

/// Start the HTTP server and run until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let state = Arc::new(AppState::new(config)?);

    info!("Starting HTTP server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_headers())
            .wrap(cors())
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("HTTP server stopped");
    Ok(())
}
