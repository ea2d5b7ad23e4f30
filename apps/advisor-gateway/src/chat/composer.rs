//! Outbound request composer — turns the user's text and an attachment
//! snapshot into exactly one request for the advice service.

use crate::chat::attachments::Attachment;
use crate::chat::prompts::DEFAULT_ATTACHMENT_QUERY;

/// A single request to the advice service, built fresh for each send.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundRequest {
    Plain {
        query: String,
    },
    WithAttachments {
        query: String,
        primary: Attachment,
        auxiliary: Vec<Attachment>,
    },
}

impl OutboundRequest {
    pub fn query(&self) -> &str {
        match self {
            OutboundRequest::Plain { query } => query,
            OutboundRequest::WithAttachments { query, .. } => query,
        }
    }

    /// Display names of the attached files, primary first.
    pub fn attachment_names(&self) -> Vec<String> {
        match self {
            OutboundRequest::Plain { .. } => Vec::new(),
            OutboundRequest::WithAttachments {
                primary, auxiliary, ..
            } => std::iter::once(primary)
                .chain(auxiliary.iter())
                .map(|a| a.name.clone())
                .collect(),
        }
    }
}

/// Builds the request for `user_text` and `snapshot`. Pure: touches neither
/// the queue nor the transcript.
///
/// The first attachment in snapshot order is the primary file; the rest ride
/// along as auxiliary files. Empty text is replaced by the default query.
pub fn compose(user_text: &str, snapshot: &[Attachment]) -> OutboundRequest {
    let query = if user_text.is_empty() {
        DEFAULT_ATTACHMENT_QUERY.to_string()
    } else {
        user_text.to_string()
    };

    match snapshot.split_first() {
        None => OutboundRequest::Plain { query },
        Some((primary, rest)) => OutboundRequest::WithAttachments {
            query,
            primary: primary.clone(),
            auxiliary: rest.to_vec(),
        },
    }
}
