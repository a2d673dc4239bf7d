//! Channel-scoped moderation: banning and unbanning users.

use tracing::debug;

use crate::entities::Channel;
use crate::types::requests::BanRequest;
use crate::types::{BanOptions, ChannelError, ChannelResult};

const BAN_PATH: [&str; 2] = ["moderation", "ban"];

impl Channel {
    /// Ban the target user from this channel.
    ///
    /// `banned_by` is the acting moderator. The ban is scoped to this
    /// channel through the type/id pair in the payload; recognized options
    /// are a timeout and a reason. No channel state is returned.
    pub async fn ban_user(
        &self,
        target_id: &str,
        banned_by: &str,
        options: BanOptions,
    ) -> ChannelResult<()> {
        if target_id.is_empty() {
            return Err(ChannelError::validation("target user id is empty"));
        }
        if banned_by.is_empty() {
            return Err(ChannelError::validation("user id is empty"));
        }

        let payload = BanRequest {
            channel_type: self.channel_type.clone(),
            id: self.id.clone(),
            target_user_id: target_id.to_string(),
            user_id: banned_by.to_string(),
            options,
        };
        let body = serde_json::to_value(&payload)?;

        self.transport.post(&BAN_PATH, &[], Some(body)).await?;
        debug!(cid = %self.cid, target = target_id, "user banned");
        Ok(())
    }

    /// Lift a ban for the target user on this channel.
    ///
    /// The moderation endpoint takes its parameters as query parameters on
    /// a DELETE rather than a body. No channel state is returned.
    pub async fn unban_user(&self, target_id: &str, options: BanOptions) -> ChannelResult<()> {
        if target_id.is_empty() {
            return Err(ChannelError::validation("target user id is empty"));
        }

        let mut params = vec![
            ("type".to_string(), self.channel_type.clone()),
            ("id".to_string(), self.id.clone()),
            ("target_user_id".to_string(), target_id.to_string()),
        ];
        params.extend(options.to_params());

        self.transport.delete(&BAN_PATH, &params).await?;
        debug!(cid = %self.cid, target = target_id, "user unbanned");
        Ok(())
    }
}
