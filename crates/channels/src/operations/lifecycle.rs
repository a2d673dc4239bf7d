//! Channel lifecycle: creation, refresh, property updates, deletion,
//! truncation.

use std::sync::Arc;

use serde_json::{json, Map, Value};
use tracing::debug;

use crosstalk_transport::Transport;

use crate::entities::{Channel, Message, User};
use crate::state::ChannelState;
use crate::types::requests::{QueryRequest, UpdateRequest};
use crate::types::{ChannelError, ChannelOptions, ChannelResult, QueryFlags};

use super::decode;

impl Channel {
    /// Create a channel of the given type and id, or fetch the existing one.
    ///
    /// Creating a channel whose id already exists is not an error: the
    /// service returns the existing channel's state, which is merged into
    /// the returned handle. The id may be left empty when `options.data`
    /// carries a `members` list; the server then assigns an id and the
    /// merged snapshot fills it in.
    pub async fn create_or_get(
        transport: Arc<dyn Transport>,
        options: ChannelOptions,
    ) -> ChannelResult<Self> {
        if options.channel_type.is_empty() {
            return Err(ChannelError::validation("channel type is empty"));
        }
        if options.created_by.is_empty() {
            return Err(ChannelError::validation("user id is empty"));
        }
        let has_member_data = options
            .data
            .as_ref()
            .map(|data| data.contains_key("members"))
            .unwrap_or(false);
        if options.id.is_empty() && !has_member_data {
            return Err(ChannelError::validation(
                "channel id is empty and no members are provided",
            ));
        }

        let mut channel = Channel::new(
            transport,
            &options.channel_type,
            &options.id,
            User::with_id(options.created_by.as_str()),
        );
        channel.query(QueryFlags::default(), options.data).await?;

        Ok(channel)
    }

    /// Re-fetch the full channel state and merge it into this handle.
    pub async fn refresh(&mut self) -> ChannelResult<()> {
        self.query(QueryFlags::default(), None).await
    }

    /// Query the channel endpoint and merge the returned state.
    pub(crate) async fn query(
        &mut self,
        flags: QueryFlags,
        data: Option<Map<String, Value>>,
    ) -> ChannelResult<()> {
        let mut data = data.unwrap_or_default();
        let created_by_id = self
            .created_by
            .as_ref()
            .map(|user| user.id.clone())
            .unwrap_or_default();
        data.insert("created_by".to_string(), json!({ "id": created_by_id }));

        let payload = QueryRequest { flags, data };
        let body = serde_json::to_value(&payload)?;

        // Creation without an id posts to the type-level query endpoint.
        let mut path: Vec<&str> = vec!["channels", self.channel_type.as_str()];
        if !self.id.is_empty() {
            path.push(self.id.as_str());
        }
        path.push("query");

        let response = self.transport.post(&path, &[], Some(body)).await?;
        let state: ChannelState = decode(response)?;
        state.apply_to(self);

        debug!(cid = %self.cid, members = self.members.len(), "channel state merged");
        Ok(())
    }

    /// Patch the channel's custom properties, optionally posting a system
    /// message announcing the change.
    ///
    /// The endpoint returns no channel state; cached members, messages, and
    /// read markers are left untouched until a [`Channel::refresh`].
    pub async fn update(
        &self,
        properties: Map<String, Value>,
        message: Option<Message>,
    ) -> ChannelResult<()> {
        let payload = UpdateRequest {
            data: properties,
            message,
        };
        let body = serde_json::to_value(&payload)?;

        self.transport
            .post(&self.root_path(), &[], Some(body))
            .await?;
        Ok(())
    }

    /// Permanently delete the channel and its messages.
    ///
    /// Remote deletion leaves this handle dangling; callers are expected to
    /// discard it afterwards.
    pub async fn delete(&self) -> ChannelResult<()> {
        self.transport.delete(&self.root_path(), &[]).await?;
        debug!(cid = %self.cid, "channel deleted");
        Ok(())
    }

    /// Remove every message while keeping the channel and its members.
    ///
    /// No state is returned; refresh to observe the emptied message list.
    pub async fn truncate(&self) -> ChannelResult<()> {
        self.transport
            .post(&self.sub_path("truncate"), &[], None)
            .await?;
        Ok(())
    }
}
