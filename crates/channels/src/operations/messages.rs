//! Message operations: sending, thread replies, read markers.

use crate::entities::{Channel, Message, User};
use crate::types::requests::{MarkReadRequest, SendMessageRequest};
use crate::types::responses::{RepliesResponse, SendMessageResponse};
use crate::types::{ChannelError, ChannelResult, MarkReadOptions, ReplyPagination};

use super::decode;

impl Channel {
    /// Send a message to the channel on behalf of `user_id`.
    ///
    /// Returns the accepted message with its server-assigned id and
    /// rendered body filled in. The cached message list is not updated;
    /// refresh to see the message in [`Channel::messages`](crate::Channel).
    pub async fn send_message(&self, draft: Message, user_id: &str) -> ChannelResult<Message> {
        if user_id.is_empty() {
            return Err(ChannelError::validation("user id is empty"));
        }
        if draft.text.trim().is_empty() {
            return Err(ChannelError::validation("message text is empty"));
        }

        let mut message = draft;
        message.user = Some(User::with_id(user_id));

        let payload = SendMessageRequest { message };
        let body = serde_json::to_value(&payload)?;

        let response = self
            .transport
            .post(&self.sub_path("message"), &[], Some(body))
            .await?;
        let response: SendMessageResponse = decode(response)?;
        Ok(response.message)
    }

    /// List threaded replies to the given parent message.
    pub async fn get_replies(
        &self,
        parent_id: &str,
        pagination: ReplyPagination,
    ) -> ChannelResult<Vec<Message>> {
        if parent_id.is_empty() {
            return Err(ChannelError::validation("parent message id is empty"));
        }

        let params = pagination.to_params();
        let response = self
            .transport
            .get(&["messages", parent_id, "replies"], &params)
            .await?;
        let response: RepliesResponse = decode(response)?;
        Ok(response.messages)
    }

    /// Record the read marker for `user_id`.
    ///
    /// Only effective when the channel's configuration has `read_events`
    /// enabled. No state is returned.
    pub async fn mark_read(&self, user_id: &str, options: MarkReadOptions) -> ChannelResult<()> {
        if user_id.is_empty() {
            return Err(ChannelError::validation("user id is empty"));
        }

        let payload = MarkReadRequest {
            user: User::with_id(user_id),
            options,
        };
        let body = serde_json::to_value(&payload)?;

        self.transport
            .post(&self.sub_path("read"), &[], Some(body))
            .await?;
        Ok(())
    }
}
