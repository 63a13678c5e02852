use std::sync::Arc;

use crate::analysis::GhostJobDetector;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Stateless between calls; shared by every request.
    pub detector: Arc<GhostJobDetector>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let detector = Arc::new(GhostJobDetector::new(config.analysis_seed));
        Self { config, detector }
    }
}
