use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatCompleter;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The LLM client is held behind the `ChatCompleter` trait so handler tests can
/// swap in a stub without touching the request flow.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn ChatCompleter>,
    /// Runtime settings; read at startup, kept for handlers that need them.
    #[allow(dead_code)]
    pub config: Config,
}
