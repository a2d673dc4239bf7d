//! Channel-scoped operations against the chat service.
//!
//! Every operation validates its required arguments locally, failing fast
//! before any request is made, then performs a single request/response
//! round trip. Whether the response is merged back into the local handle
//! differs per operation and mirrors the service's API surface: endpoints
//! that return fresh channel state are merged, the rest leave cached lists
//! untouched until an explicit [`Channel::refresh`](crate::Channel::refresh).
//! Operations that never merge take `&self`; the type system itself
//! guarantees they cannot mutate the handle.

mod lifecycle;
mod members;
mod messages;
mod moderation;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::entities::Channel;
use crate::types::{ChannelError, ChannelResult};

pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> ChannelResult<T> {
    serde_json::from_value(value).map_err(ChannelError::from)
}

pub(crate) fn require_user_ids(user_ids: &[&str], operation: &str) -> ChannelResult<()> {
    if user_ids.is_empty() {
        return Err(ChannelError::validation(format!(
            "{operation} requires at least one user id"
        )));
    }
    Ok(())
}

pub(crate) fn to_owned_ids(user_ids: &[&str]) -> Vec<String> {
    user_ids.iter().map(|id| id.to_string()).collect()
}

impl Channel {
    /// `channels/{type}/{id}`
    pub(crate) fn root_path(&self) -> [&str; 3] {
        ["channels", self.channel_type.as_str(), self.id.as_str()]
    }

    /// `channels/{type}/{id}/{suffix}`
    pub(crate) fn sub_path<'a>(&'a self, suffix: &'a str) -> [&'a str; 4] {
        [
            "channels",
            self.channel_type.as_str(),
            self.id.as_str(),
            suffix,
        ]
    }
}
