pub mod health;
pub mod resume;

use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::config::Config;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/resume", post(resume::save_resume_result))
        .route("/resume/page", get(resume::page_resume_results))
        .route(
            "/resume/:id",
            get(resume::get_resume_result)
                .put(resume::update_resume_result)
                .delete(resume::delete_resume_result),
        )
        .with_state(state)
}

/// Build the CORS middleware layer from configuration.
///
/// Panics at startup on an invalid origin rather than serving with a broken
/// policy. Wildcard headers/methods are rejected on credentialed requests,
/// so the layer mirrors whatever the request asks for, which permits
/// everything for the single configured origin.
pub fn build_cors_layer(config: &Config) -> CorsLayer {
    let origin: HeaderValue = config
        .cors_origin
        .parse()
        .unwrap_or_else(|e| panic!("Invalid CORS origin '{}': {e}", config.cors_origin));

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
