pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};

use crate::chat::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/suggestions", get(handlers::handle_suggestions))
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        .route("/api/v1/sessions/:id/input", put(handlers::handle_set_input))
        .route(
            "/api/v1/sessions/:id/attachments",
            post(handlers::handle_upload_attachments),
        )
        .route(
            "/api/v1/sessions/:id/attachments/:attachment_id",
            delete(handlers::handle_remove_attachment),
        )
        .route("/api/v1/sessions/:id/messages", post(handlers::handle_send))
        .route(
            "/api/v1/sessions/:id/reset",
            post(handlers::handle_reset_session),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
