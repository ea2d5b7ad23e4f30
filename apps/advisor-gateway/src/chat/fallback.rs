//! Fallback synthesizer — offline, deterministic advice used when the remote
//! advice service cannot answer.
//!
//! Topic selection is an ordered table walked top to bottom: the first topic
//! with a keyword contained in the lower-cased text wins. Nothing is scored,
//! so "resume" beats "interview" even when both appear.

use serde::{Deserialize, Serialize};

use crate::chat::prompts::{
    COVER_LETTER_TEMPLATE, GENERAL_TEMPLATE, INTERVIEW_TEMPLATE, JOB_SEARCH_TEMPLATE,
    RESUME_TEMPLATE, SALARY_TEMPLATE, SKILLS_TEMPLATE,
};

/// Advice topic a user message is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceTopic {
    Resume,
    Interview,
    Salary,
    CoverLetter,
    JobSearch,
    Skills,
    General,
}

/// Priority-ordered (topic, keywords) table. `General` is the implicit tail.
const TOPIC_TABLE: &[(AdviceTopic, &[&str])] = &[
    (AdviceTopic::Resume, &["resume", "cv"]),
    (AdviceTopic::Interview, &["interview"]),
    (AdviceTopic::Salary, &["salary", "negotiate"]),
    (AdviceTopic::CoverLetter, &["cover letter"]),
    (AdviceTopic::JobSearch, &["job search", "find job"]),
    (AdviceTopic::Skills, &["skill", "learn"]),
];

impl AdviceTopic {
    /// The canned advice returned verbatim for this topic.
    pub fn template(self) -> &'static str {
        match self {
            AdviceTopic::Resume => RESUME_TEMPLATE,
            AdviceTopic::Interview => INTERVIEW_TEMPLATE,
            AdviceTopic::Salary => SALARY_TEMPLATE,
            AdviceTopic::CoverLetter => COVER_LETTER_TEMPLATE,
            AdviceTopic::JobSearch => JOB_SEARCH_TEMPLATE,
            AdviceTopic::Skills => SKILLS_TEMPLATE,
            AdviceTopic::General => GENERAL_TEMPLATE,
        }
    }
}

/// Classifies `text` into the first matching topic in priority order.
pub fn classify(text: &str) -> AdviceTopic {
    let lowered = text.to_lowercase();
    TOPIC_TABLE
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(topic, _)| *topic)
        .unwrap_or(AdviceTopic::General)
}

/// Returns the canned advice for `text`. Total: never empty, never fails.
pub fn synthesize(text: &str) -> &'static str {
    classify(text).template()
}
