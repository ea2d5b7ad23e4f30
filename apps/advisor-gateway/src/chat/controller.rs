//! Session controller — drives one chat conversation.
//!
//! State machine: `Idle → Sending → Idle`, no terminal state.
//!
//! A send runs in three phases so the host can release its lock while the
//! remote call is in flight and `is_sending()` stays observable:
//!
//! 1. `begin_send`    — validate, snapshot attachments, append the user turn.
//! 2. `dispatch`      — the only await point; needs no access to the session.
//! 3. `complete_send` — append the assistant turn, clear files on success.
//!
//! `send` chains the three for callers that own the controller outright.
//!
//! INVARIANT: every accepted send produces exactly one user turn followed by
//! exactly one assistant turn. Remote failures are answered by the fallback
//! synthesizer and never surface as errors.

use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::advice_client::{dispatch, AdviceError, AdviceService, Advisory};
use crate::chat::attachments::{Attachment, AttachmentQueue};
use crate::chat::composer::{compose, OutboundRequest};
use crate::chat::fallback::synthesize;
use crate::chat::transcript::{Transcript, Turn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    Sending,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("message is empty and no files are attached")]
    InvalidSend,

    #[error("a message is already being sent in this session")]
    ReentrancyViolation,

    #[error("session was reset while the message was in flight")]
    Superseded,
}

/// Where the assistant's reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseSource {
    Remote,
    Fallback,
}

/// An accepted send awaiting its remote answer.
#[derive(Debug)]
pub struct PendingSend {
    generation: u64,
    user_turn: Turn,
    request: OutboundRequest,
}

impl PendingSend {
    pub fn request(&self) -> &OutboundRequest {
        &self.request
    }
}

/// Result of a resolved send, handed back to the host.
#[derive(Debug, Clone, Serialize)]
pub struct SendOutcome {
    pub user_turn: Turn,
    pub assistant_turn: Turn,
    pub source: ResponseSource,
    pub extracted_skills: Vec<String>,
}

pub struct SessionController {
    service: Arc<dyn AdviceService>,
    attachments: AttachmentQueue,
    transcript: Transcript,
    state: SessionState,
    input: String,
    /// Bumped on every reset so late completions from before it are dropped.
    generation: u64,
}

impl SessionController {
    pub fn new(service: Arc<dyn AdviceService>) -> Self {
        Self {
            service,
            attachments: AttachmentQueue::new(),
            transcript: Transcript::new(),
            state: SessionState::Idle,
            input: String::new(),
            generation: 0,
        }
    }

    pub fn service(&self) -> Arc<dyn AdviceService> {
        Arc::clone(&self.service)
    }

    pub fn transcript(&self) -> &[Turn] {
        self.transcript.turns()
    }

    pub fn attachments(&self) -> &[Attachment] {
        self.attachments.list()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == SessionState::Sending
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn add_attachment(&mut self, name: impl Into<String>, content: impl Into<Bytes>) -> Uuid {
        self.attachments.add(name, content)
    }

    pub fn remove_attachment(&mut self, id: Uuid) -> bool {
        self.attachments.remove(id)
    }

    /// Clears transcript, attachments and input, and returns to `Idle`.
    /// A send still in flight will be discarded when it completes.
    pub fn reset_session(&mut self) {
        let dropped_in_flight = self.is_sending();
        let dropped_turns = self.transcript.len();
        self.transcript.reset();
        self.attachments.clear();
        self.input.clear();
        self.state = SessionState::Idle;
        self.generation = self.generation.wrapping_add(1);
        info!(
            "Session reset: {} turn(s) dropped, in-flight send discarded: {}",
            dropped_turns, dropped_in_flight
        );
    }

    /// `Idle → Sending`. Appends the user turn immediately and clears the
    /// live input. Rejects without side effects on empty sends and while a
    /// previous send is still outstanding.
    pub fn begin_send(&mut self, text: &str) -> Result<PendingSend, SendError> {
        if self.is_sending() {
            return Err(SendError::ReentrancyViolation);
        }

        let text = text.trim();
        if text.is_empty() && self.attachments.is_empty() {
            return Err(SendError::InvalidSend);
        }

        let snapshot = self.attachments.snapshot();
        let file_names: Vec<String> = snapshot.iter().map(|a| a.name.clone()).collect();

        let user_turn = self
            .transcript
            .append(Turn::user(text, file_names))
            .clone();
        self.input.clear();
        self.state = SessionState::Sending;

        let request = compose(text, &snapshot);
        debug!(
            "Send accepted: query of {} chars, files {:?}",
            request.query().len(),
            request.attachment_names()
        );

        Ok(PendingSend {
            generation: self.generation,
            user_turn,
            request,
        })
    }

    /// `Sending → Idle`. On success the advisory becomes the reply and the
    /// attachment queue is cleared; on failure the fallback answers and the
    /// files stay queued for another try.
    pub fn complete_send(
        &mut self,
        pending: PendingSend,
        result: Result<Advisory, AdviceError>,
    ) -> Result<SendOutcome, SendError> {
        if pending.generation != self.generation {
            debug!("Dropping reply for a send issued before the last reset");
            return Err(SendError::Superseded);
        }

        let file_names = pending.user_turn.file_names.clone();
        let (content, source, extracted_skills) = match result {
            Ok(advisory) => {
                self.attachments.clear();
                (advisory.text, ResponseSource::Remote, advisory.extracted_skills)
            }
            Err(e) => {
                warn!("Advice service failed, answering from fallback: {e}");
                (
                    synthesize(&pending.user_turn.content).to_string(),
                    ResponseSource::Fallback,
                    Vec::new(),
                )
            }
        };

        let assistant_turn = self
            .transcript
            .append(Turn::assistant(content, file_names))
            .clone();
        self.state = SessionState::Idle;

        Ok(SendOutcome {
            user_turn: pending.user_turn,
            assistant_turn,
            source,
            extracted_skills,
        })
    }

    /// Full send for a caller that owns the controller.
    pub async fn send(&mut self, text: &str) -> Result<SendOutcome, SendError> {
        let pending = self.begin_send(text)?;
        let service = self.service();
        let result = dispatch(service.as_ref(), pending.request()).await;
        self.complete_send(pending, result)
    }

    /// Sends whatever is in the live input.
    pub async fn send_input(&mut self) -> Result<SendOutcome, SendError> {
        let text = self.input.clone();
        self.send(&text).await
    }
}
