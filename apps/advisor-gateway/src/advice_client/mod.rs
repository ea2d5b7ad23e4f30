/// Advice client — the single point of entry for calls to the remote career
/// advice backend.
///
/// The chat controller only sees the `AdviceService` trait. `HttpAdviceClient`
/// is the production implementation; tests swap in a scripted double.
///
/// Every call is a single attempt. The controller treats any `AdviceError` as
/// "remote unavailable" and answers from the fallback synthesizer instead.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::chat::attachments::Attachment;
use crate::chat::composer::OutboundRequest;

#[cfg(test)]
pub mod testing;

const CHAT_PATH: &str = "/chat";
const CHAT_WITH_FILE_PATH: &str = "/chat/with-file";

#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("advice service returned no advice text")]
    EmptyAdvice,
}

/// A successful reply from the advice backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub text: String,
    /// Skills the backend pulled out of uploaded files. Empty for plain queries.
    pub extracted_skills: Vec<String>,
}

impl Advisory {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            extracted_skills: Vec::new(),
        }
    }
}

/// The remote advice backend, as consumed by the chat controller.
#[async_trait]
pub trait AdviceService: Send + Sync {
    async fn send_query(&self, query: &str) -> Result<Advisory, AdviceError>;

    async fn send_query_with_attachments(
        &self,
        query: &str,
        primary: &Attachment,
        auxiliary: &[Attachment],
    ) -> Result<Advisory, AdviceError>;
}

/// Sends a composed request through the matching service call.
pub async fn dispatch(
    service: &dyn AdviceService,
    request: &OutboundRequest,
) -> Result<Advisory, AdviceError> {
    match request {
        OutboundRequest::Plain { query } => service.send_query(query).await,
        OutboundRequest::WithAttachments {
            query,
            primary,
            auxiliary,
        } => {
            service
                .send_query_with_attachments(query, primary, auxiliary)
                .await
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    query: &'a str,
}

/// Body returned by both chat endpoints. The backend fills `advice` and
/// mirrors it into `response`; older builds only set one of them.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    advice: Option<String>,
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    extracted_skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct BackendError {
    detail: String,
}

/// HTTP implementation of `AdviceService` against the career backend.
#[derive(Clone)]
pub struct HttpAdviceClient {
    client: Client,
    base_url: String,
}

impl HttpAdviceClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AdviceError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_advisory(response: reqwest::Response) -> Result<Advisory, AdviceError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // FastAPI wraps errors as {"detail": "..."}; fall back to the raw body.
            let message = serde_json::from_str::<BackendError>(&body)
                .map(|e| e.detail)
                .unwrap_or(body);
            return Err(AdviceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)?;
        let text = [parsed.advice, parsed.response]
            .into_iter()
            .flatten()
            .find(|t| !t.trim().is_empty())
            .ok_or(AdviceError::EmptyAdvice)?;

        debug!(
            "Advice received: {} chars, {} extracted skills",
            text.len(),
            parsed.extracted_skills.len()
        );

        Ok(Advisory {
            text,
            extracted_skills: parsed.extracted_skills,
        })
    }
}

fn file_part(attachment: &Attachment) -> Part {
    Part::bytes(attachment.content.to_vec()).file_name(attachment.name.clone())
}

#[async_trait]
impl AdviceService for HttpAdviceClient {
    async fn send_query(&self, query: &str) -> Result<Advisory, AdviceError> {
        let response = self
            .client
            .post(self.url(CHAT_PATH))
            .json(&ChatRequest { query })
            .send()
            .await?;

        Self::read_advisory(response).await
    }

    /// Multipart upload: `file` is the primary attachment, `query` the text,
    /// and every auxiliary attachment goes in as `additional_file_{i}`.
    async fn send_query_with_attachments(
        &self,
        query: &str,
        primary: &Attachment,
        auxiliary: &[Attachment],
    ) -> Result<Advisory, AdviceError> {
        let mut form = Form::new()
            .part("file", file_part(primary))
            .text("query", query.to_string());
        for (idx, attachment) in auxiliary.iter().enumerate() {
            form = form.part(format!("additional_file_{idx}"), file_part(attachment));
        }

        let response = self
            .client
            .post(self.url(CHAT_WITH_FILE_PATH))
            .multipart(form)
            .send()
            .await?;

        Self::read_advisory(response).await
    }
}
