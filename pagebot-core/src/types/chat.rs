//! Preview chat transcript types

use serde::{Deserialize, Serialize};

/// Author of a preview chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The operator typing test messages.
    User,
    /// The text-generation collaborator.
    Model,
    /// A user-safe inline failure notice.
    Error,
}

/// One entry of a preview transcript. Append-only, session-scoped, never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn error(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Error,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_values() {
        assert_eq!(serde_json::to_string(&ChatRole::User).unwrap(), r#""user""#);
        assert_eq!(
            serde_json::to_string(&ChatRole::Model).unwrap(),
            r#""model""#
        );
        assert_eq!(
            serde_json::to_string(&ChatRole::Error).unwrap(),
            r#""error""#
        );
    }

    #[test]
    fn constructors_set_role() {
        assert_eq!(ChatMessage::user("hi").role, ChatRole::User);
        assert_eq!(ChatMessage::model("hello").role, ChatRole::Model);
        assert_eq!(ChatMessage::error("oops").role, ChatRole::Error);
    }
}
