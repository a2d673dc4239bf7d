use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// A message within a channel.
///
/// Drafts are built client-side with an empty id; once accepted by the
/// service both `id` and the rendered `html` body are populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Server-assigned identifier; empty until the message has been sent.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub text: String,
    /// Rendered body, populated by the server.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub html: String,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "MessageKind::is_regular"
    )]
    pub kind: MessageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Parent message identifier for threaded replies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Create a draft message with the given text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Create a threaded reply draft to the given parent message.
    pub fn reply_to(parent_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parent_id: Some(parent_id.into()),
            kind: MessageKind::Reply,
            ..Self::default()
        }
    }

    /// Attach the author reference to a draft.
    pub fn from_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    /// Whether the message has been accepted by the server.
    pub fn is_sent(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Message kind distinguishing plain messages from threaded replies and
/// service-generated system messages. Unrecognized kinds are carried
/// verbatim in `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageKind {
    Regular,
    Reply,
    System,
    Custom(String),
}

impl MessageKind {
    pub fn is_regular(&self) -> bool {
        matches!(self, MessageKind::Regular)
    }
}

impl Default for MessageKind {
    fn default() -> Self {
        MessageKind::Regular
    }
}

impl From<String> for MessageKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "regular" => MessageKind::Regular,
            "reply" => MessageKind::Reply,
            "system" => MessageKind::System,
            _ => MessageKind::Custom(value),
        }
    }
}

impl From<&str> for MessageKind {
    fn from(value: &str) -> Self {
        MessageKind::from(value.to_string())
    }
}

impl From<MessageKind> for String {
    fn from(kind: MessageKind) -> Self {
        match kind {
            MessageKind::Regular => "regular".to_string(),
            MessageKind::Reply => "reply".to_string(),
            MessageKind::System => "system".to_string(),
            MessageKind::Custom(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_serializes_without_server_fields() {
        let draft = Message::text("hello");
        let value = serde_json::to_value(&draft).expect("draft should serialize");
        assert_eq!(value, serde_json::json!({ "text": "hello" }));
    }

    #[test]
    fn reply_draft_carries_parent_and_kind() {
        let draft = Message::reply_to("m-1", "agreed");
        assert_eq!(draft.parent_id.as_deref(), Some("m-1"));
        assert_eq!(draft.kind, MessageKind::Reply);

        let value = serde_json::to_value(&draft).expect("draft should serialize");
        assert_eq!(
            value,
            serde_json::json!({ "text": "agreed", "type": "reply", "parent_id": "m-1" })
        );
    }

    #[test]
    fn sent_state_follows_id() {
        let mut message = Message::text("hello");
        assert!(!message.is_sent());

        message.id = "m-42".to_string();
        assert!(message.is_sent());
    }

    #[test]
    fn kind_conversion_round_trips() {
        assert_eq!(MessageKind::from("regular"), MessageKind::Regular);
        assert_eq!(MessageKind::from("reply"), MessageKind::Reply);
        assert_eq!(MessageKind::from("system"), MessageKind::System);
        assert_eq!(
            MessageKind::from("ephemeral"),
            MessageKind::Custom("ephemeral".to_string())
        );

        assert_eq!(String::from(MessageKind::Reply), "reply");
    }

    #[test]
    fn server_message_deserializes() {
        let message: Message = serde_json::from_str(
            r#"{
                "id": "m-1",
                "text": "hello",
                "html": "<p>hello</p>",
                "type": "regular",
                "user": {"id": "ann"},
                "created_at": "2024-05-01T12:00:00Z"
            }"#,
        )
        .expect("message should deserialize");

        assert!(message.is_sent());
        assert_eq!(message.kind, MessageKind::Regular);
        assert_eq!(message.user.as_ref().map(|u| u.id.as_str()), Some("ann"));
        assert!(message.created_at.is_some());
    }
}
