//! Membership operations: adding, removing, inviting, and moderator role
//! changes.

use crate::entities::{Channel, Message};
use crate::state::ChannelState;
use crate::types::requests::{
    AcceptInviteRequest, AddMembersRequest, AddModeratorsRequest, DemoteModeratorsRequest,
    InviteMembersRequest, RejectInviteRequest, RemoveMembersRequest,
};
use crate::types::{ChannelError, ChannelResult};

use super::{decode, require_user_ids, to_owned_ids};

impl Channel {
    /// Add members with the given user ids, optionally posting a system
    /// message.
    ///
    /// The endpoint returns no body; the cached member list only reflects
    /// the addition after a [`Channel::refresh`].
    pub async fn add_members(
        &self,
        user_ids: &[&str],
        message: Option<Message>,
    ) -> ChannelResult<()> {
        require_user_ids(user_ids, "add members")?;

        let payload = AddMembersRequest {
            add_members: to_owned_ids(user_ids),
            message,
        };
        let body = serde_json::to_value(&payload)?;

        self.transport
            .post(&self.root_path(), &[], Some(body))
            .await?;
        Ok(())
    }

    /// Remove members with the given user ids, optionally posting a system
    /// message.
    ///
    /// The response carries a snapshot which is merged into this handle.
    /// The snapshot's `member_count` is not guaranteed to be consistent
    /// with the returned member list; refresh when the exact count matters.
    pub async fn remove_members(
        &mut self,
        user_ids: &[&str],
        message: Option<Message>,
    ) -> ChannelResult<()> {
        require_user_ids(user_ids, "remove members")?;

        let payload = RemoveMembersRequest {
            remove_members: to_owned_ids(user_ids),
            message,
        };
        let body = serde_json::to_value(&payload)?;

        let response = self
            .transport
            .post(&self.root_path(), &[], Some(body))
            .await?;
        let state: ChannelState = decode(response)?;
        state.apply_to(self);
        Ok(())
    }

    /// Invite users to the channel, optionally posting a system message.
    ///
    /// Invited users appear as members with a pending invite once the
    /// channel is refreshed; full membership requires an explicit
    /// [`Channel::accept_invite`].
    pub async fn invite_members(
        &self,
        user_ids: &[&str],
        message: Option<Message>,
    ) -> ChannelResult<()> {
        require_user_ids(user_ids, "invite members")?;

        let payload = InviteMembersRequest {
            invites: to_owned_ids(user_ids),
            message,
        };
        let body = serde_json::to_value(&payload)?;

        self.transport
            .post(&self.root_path(), &[], Some(body))
            .await?;
        Ok(())
    }

    /// Accept a pending invite on behalf of `user_id`.
    ///
    /// The response carries the updated channel state and is merged.
    pub async fn accept_invite(
        &mut self,
        user_id: &str,
        message: Option<Message>,
    ) -> ChannelResult<()> {
        if user_id.is_empty() {
            return Err(ChannelError::validation("user id is empty"));
        }

        let payload = AcceptInviteRequest {
            accept_invite: true,
            user_id: user_id.to_string(),
            message,
        };
        let body = serde_json::to_value(&payload)?;

        let response = self
            .transport
            .post(&self.root_path(), &[], Some(body))
            .await?;
        let state: ChannelState = decode(response)?;
        state.apply_to(self);
        Ok(())
    }

    /// Reject a pending invite on behalf of `user_id`.
    ///
    /// The response carries the updated channel state and is merged.
    pub async fn reject_invite(
        &mut self,
        user_id: &str,
        message: Option<Message>,
    ) -> ChannelResult<()> {
        if user_id.is_empty() {
            return Err(ChannelError::validation("user id is empty"));
        }

        let payload = RejectInviteRequest {
            reject_invite: true,
            user_id: user_id.to_string(),
            message,
        };
        let body = serde_json::to_value(&payload)?;

        let response = self
            .transport
            .post(&self.root_path(), &[], Some(body))
            .await?;
        let state: ChannelState = decode(response)?;
        state.apply_to(self);
        Ok(())
    }

    /// Grant the moderator role to the given members.
    ///
    /// No body is returned; role changes become visible on refresh.
    pub async fn add_moderators(&self, user_ids: &[&str]) -> ChannelResult<()> {
        self.promote_moderators(user_ids, None).await
    }

    /// Grant the moderator role and post a system message announcing it.
    pub async fn add_moderators_with_message(
        &self,
        user_ids: &[&str],
        message: Message,
    ) -> ChannelResult<()> {
        self.promote_moderators(user_ids, Some(message)).await
    }

    async fn promote_moderators(
        &self,
        user_ids: &[&str],
        message: Option<Message>,
    ) -> ChannelResult<()> {
        require_user_ids(user_ids, "add moderators")?;

        let payload = AddModeratorsRequest {
            add_moderators: to_owned_ids(user_ids),
            message,
        };
        let body = serde_json::to_value(&payload)?;

        self.transport
            .post(&self.root_path(), &[], Some(body))
            .await?;
        Ok(())
    }

    /// Revoke the moderator role from the given members.
    ///
    /// No body is returned; role changes become visible on refresh.
    pub async fn demote_moderators(&self, user_ids: &[&str]) -> ChannelResult<()> {
        require_user_ids(user_ids, "demote moderators")?;

        let payload = DemoteModeratorsRequest {
            demote_moderators: to_owned_ids(user_ids),
        };
        let body = serde_json::to_value(&payload)?;

        self.transport
            .post(&self.root_path(), &[], Some(body))
            .await?;
        Ok(())
    }
}
