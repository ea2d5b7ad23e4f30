use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry. Only attachment names are kept, never content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub file_names: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn user(content: impl Into<String>, file_names: Vec<String>) -> Self {
        Self::new(Role::User, content.into(), file_names)
    }

    pub fn assistant(content: impl Into<String>, file_names: Vec<String>) -> Self {
        Self::new(Role::Assistant, content.into(), file_names)
    }

    fn new(role: Role, content: String, file_names: Vec<String>) -> Self {
        Self {
            role,
            content,
            file_names,
            timestamp: Utc::now(),
        }
    }
}

/// Append-only ordered sequence of turns for one session.
#[derive(Debug, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, turn: Turn) -> &Turn {
        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Drops every turn. Only a session reset may do this.
    pub(crate) fn reset(&mut self) {
        self.turns.clear();
    }
}
