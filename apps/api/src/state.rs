use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generative backend. `LlmClient` in production, scripted in tests.
    pub llm: Arc<dyn TextGenerator>,
    pub sessions: SessionStore,
    pub config: Config,
}
