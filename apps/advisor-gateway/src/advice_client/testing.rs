//! Scripted `AdviceService` double for controller and route tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{AdviceError, AdviceService, Advisory};
use crate::chat::attachments::Attachment;

/// What the double was asked to do.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub query: String,
    /// Primary first, then auxiliary. Empty for plain queries.
    pub file_names: Vec<String>,
}

/// Replays queued outcomes in order. An empty script answers with a 503.
#[derive(Default)]
pub struct ScriptedAdviceService {
    script: Mutex<VecDeque<Result<Advisory, AdviceError>>>,
    calls: Mutex<Vec<RecordedCall>>,
    latency: Duration,
}

impl ScriptedAdviceService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call waits `latency` before answering.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            ..Self::default()
        }
    }

    pub fn push_ok(&self, text: &str) {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(Advisory::new(text)));
    }

    pub fn push_advisory(&self, advisory: Advisory) {
        self.script.lock().unwrap().push_back(Ok(advisory));
    }

    pub fn push_err(&self, status: u16) {
        self.script.lock().unwrap().push_back(Err(AdviceError::Api {
            status,
            message: "scripted failure".to_string(),
        }));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, call: RecordedCall) -> Result<Advisory, AdviceError> {
        self.calls.lock().unwrap().push(call);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(AdviceError::Api {
                    status: 503,
                    message: "no scripted response".to_string(),
                })
            })
    }
}

#[async_trait]
impl AdviceService for ScriptedAdviceService {
    async fn send_query(&self, query: &str) -> Result<Advisory, AdviceError> {
        tokio::time::sleep(self.latency).await;
        self.next(RecordedCall {
            query: query.to_string(),
            file_names: Vec::new(),
        })
    }

    async fn send_query_with_attachments(
        &self,
        query: &str,
        primary: &Attachment,
        auxiliary: &[Attachment],
    ) -> Result<Advisory, AdviceError> {
        tokio::time::sleep(self.latency).await;
        self.next(RecordedCall {
            query: query.to_string(),
            file_names: std::iter::once(primary)
                .chain(auxiliary.iter())
                .map(|a| a.name.clone())
                .collect(),
        })
    }
}
