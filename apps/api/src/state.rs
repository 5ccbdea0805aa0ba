use std::sync::Arc;

use crate::generation::processor::ResumeProcessor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Stateless pipeline; the enhancement backend is fixed at startup.
    pub processor: Arc<ResumeProcessor>,
}
