use crate::config::Config;
use crate::service::ResumeResultService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub service: ResumeResultService,
    pub config: Config,
}
