//! Response types for channel operations.
//!
//! The state-bearing envelope lives in [`crate::state`]; these cover the
//! remaining message-scoped endpoints.

use serde::Deserialize;

use crate::entities::Message;

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SendMessageResponse {
    #[serde(default)]
    pub message: Message,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RepliesResponse {
    #[serde(default)]
    pub messages: Vec<Message>,
}
