//! Conversation message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::intent::Intent;

/// Represents the role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the coach.
    Assistant,
}

/// A single message in a conversation history.
///
/// Messages are created once by the [`MessageStore`](super::MessageStore) and
/// only ever handed out by shared reference or clone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Position-derived identifier, unique within its conversation.
    pub id: u64,
    pub role: MessageRole,
    pub content: String,
    /// Set on assistant messages only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub(crate) fn user(id: u64, content: String) -> Self {
        Self {
            id,
            role: MessageRole::User,
            content,
            intent: None,
            created_at: Utc::now(),
        }
    }

    pub(crate) fn assistant(id: u64, content: String, intent: Intent) -> Self {
        Self {
            id,
            role: MessageRole::Assistant,
            content,
            intent: Some(intent),
            created_at: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }

    pub fn is_assistant(&self) -> bool {
        self.role == MessageRole::Assistant
    }

    /// Badge text for assistant messages, e.g. `"Skills Diagnosis Agent"`.
    pub fn agent_badge(&self) -> Option<String> {
        self.intent
            .map(|intent| format!("{} Agent", intent.display_name()))
    }
}
