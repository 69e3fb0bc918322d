use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    User,
    Model,
}

/// One turn of the assistant conversation.
///
/// Model text is an opaque display string; nothing in the system parses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl ChatMessage {
    #[must_use]
    pub fn user(text: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            at,
        }
    }

    #[must_use]
    pub fn model(text: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
            at,
        }
    }

    #[must_use]
    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}
