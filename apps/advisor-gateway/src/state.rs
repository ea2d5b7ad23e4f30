use crate::chat::registry::SessionRegistry;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Every live chat session, each with its own controller.
    pub sessions: SessionRegistry,
    pub config: Config,
}
