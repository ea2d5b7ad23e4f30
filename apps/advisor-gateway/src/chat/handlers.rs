//! Axum route handlers for the Chat API.

use anyhow::Context;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::advice_client::dispatch;
use crate::chat::attachments::{is_supported_file_name, AttachmentSummary};
use crate::chat::controller::{SendOutcome, SessionController, SessionState};
use crate::chat::prompts::SUGGESTED_QUESTIONS;
use crate::chat::registry::SharedSession;
use crate::chat::transcript::Turn;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub questions: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub state: SessionState,
    pub input: String,
    pub transcript: Vec<Turn>,
    pub attachments: Vec<AttachmentSummary>,
}

impl SessionView {
    fn of(session_id: Uuid, controller: &SessionController) -> Self {
        Self {
            session_id,
            state: controller.state(),
            input: controller.input().to_string(),
            transcript: controller.transcript().to_vec(),
            attachments: controller.attachments().iter().map(|a| a.summary()).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SetInputRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SendRequest {
    /// Omitted: send the session's live input instead.
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub added: Vec<AttachmentSummary>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

async fn find_session(state: &AppState, id: Uuid) -> Result<SharedSession, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

/// GET /api/v1/suggestions
pub async fn handle_suggestions() -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        questions: SUGGESTED_QUESTIONS.to_vec(),
    })
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreateSessionResponse>) {
    let session_id = state.sessions.create().await;
    (StatusCode::CREATED, Json(CreateSessionResponse { session_id }))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = find_session(&state, id).await?;
    let controller = session.lock().await;
    Ok(Json(SessionView::of(id, &controller)))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.sessions.destroy(id).await {
        return Err(AppError::NotFound(format!("Session {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/input
pub async fn handle_set_input(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SetInputRequest>,
) -> Result<StatusCode, AppError> {
    let session = find_session(&state, id).await?;
    session.lock().await.set_input(request.text);
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/attachments
///
/// Multipart upload. Every field carrying a file name becomes one attachment,
/// in upload order. Files are read fully before the session is locked.
pub async fn handle_upload_attachments(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let session = find_session(&state, id).await?;

    let mut files: Vec<(String, Bytes)> = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        let Some(file_name) = field.file_name().map(|f| f.to_string()) else {
            debug!("Skipping non-file multipart field {:?}", field.name());
            continue;
        };
        let data = field.bytes().await?;
        files.push((file_name, data));
    }

    if files.is_empty() {
        return Err(AppError::Validation(
            "upload contained no files".to_string(),
        ));
    }

    let mut controller = session.lock().await;
    let mut added = Vec::with_capacity(files.len());
    for (name, data) in files {
        if !is_supported_file_name(&name) {
            warn!("Session {id}: '{name}' is not a pdf/txt/doc/docx file");
        }
        let size_bytes = data.len();
        let attachment_id = controller.add_attachment(name.clone(), data);
        added.push(AttachmentSummary {
            id: attachment_id,
            name,
            size_bytes,
        });
    }

    Ok(Json(UploadResponse { added }))
}

/// DELETE /api/v1/sessions/:id/attachments/:attachment_id
///
/// Succeeds whether or not the attachment was still queued.
pub async fn handle_remove_attachment(
    State(state): State<AppState>,
    Path((id, attachment_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    let session = find_session(&state, id).await?;
    if !session.lock().await.remove_attachment(attachment_id) {
        debug!("Session {id}: attachment {attachment_id} already gone");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/messages
///
/// Runs one send. The session lock is released while the advice service is
/// called, so `GET /sessions/:id` reports `sending` in the meantime and a
/// second send is rejected with 409 instead of queuing behind the first.
///
/// Once accepted, the send finishes on its own task. A client that hangs up
/// mid-flight still leaves the session `idle` with its assistant turn.
pub async fn handle_send(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SendRequest>,
) -> Result<Json<SendOutcome>, AppError> {
    let session = find_session(&state, id).await?;

    let (pending, service) = {
        let mut controller = session.lock().await;
        let text = match request.text {
            Some(text) => text,
            None => controller.input().to_string(),
        };
        (controller.begin_send(&text)?, controller.service())
    };

    let task = tokio::spawn(async move {
        let result = dispatch(service.as_ref(), pending.request()).await;
        session.lock().await.complete_send(pending, result)
    });

    let outcome = task.await.context("send task did not finish")??;
    Ok(Json(outcome))
}

/// POST /api/v1/sessions/:id/reset
pub async fn handle_reset_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let session = find_session(&state, id).await?;
    session.lock().await.reset_session();
    Ok(StatusCode::NO_CONTENT)
}
