use std::sync::Arc;

use crate::analytics::AnalyticsSink;
use crate::icebreaker::session::ResultSlot;
use crate::llm_client::{GenerationBackend, SamplingParams};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation service. `LlmClient` in production.
    pub backend: Arc<dyn GenerationBackend>,
    pub analytics: Arc<dyn AnalyticsSink>,
    /// The one outcome currently visible to the user.
    pub results: Arc<ResultSlot>,
    pub sampling: SamplingParams,
}

impl AppState {
    pub fn new(backend: Arc<dyn GenerationBackend>, analytics: Arc<dyn AnalyticsSink>) -> Self {
        Self {
            backend,
            analytics,
            results: Arc::new(ResultSlot::default()),
            sampling: SamplingParams::default(),
        }
    }
}
