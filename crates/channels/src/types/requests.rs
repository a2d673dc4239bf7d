//! Request payload types for channel operations.
//!
//! The wire format is flat JSON objects. Every option the service
//! recognizes is an explicit field here; only user-defined custom channel
//! properties remain an open map, because their keys are by definition not
//! known to the client.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::entities::{Message, User};

/// Identity and initial data for [`Channel::create_or_get`](crate::Channel::create_or_get).
#[derive(Debug, Clone, Default)]
pub struct ChannelOptions {
    /// Channel type, for example `messaging`. Required.
    pub channel_type: String,
    /// Channel id. May be left empty when `data` carries a `members` list,
    /// in which case the server derives an id from the member set.
    pub id: String,
    /// Acting user recorded as the channel creator. Required.
    pub created_by: String,
    /// Extra channel data: custom properties plus the service-recognized
    /// `members` and `invites` arrays.
    pub data: Option<Map<String, Value>>,
}

/// Flags controlling what a channel query returns and subscribes to.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QueryFlags {
    /// Subscribe the connection to change events. Meaningless for
    /// server-side clients and off by default.
    pub watch: bool,
    /// Include full channel state (members, messages, read) in the reply.
    pub state: bool,
    /// Subscribe to presence events for channel members.
    pub presence: bool,
}

impl Default for QueryFlags {
    fn default() -> Self {
        Self {
            watch: false,
            state: true,
            presence: false,
        }
    }
}

/// Creation/query payload: flags plus the channel data object.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct QueryRequest {
    #[serde(flatten)]
    pub flags: QueryFlags,
    pub data: Map<String, Value>,
}

/// `update` payload: custom property patch plus an optional system message.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct UpdateRequest {
    pub data: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct AddMembersRequest {
    pub add_members: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RemoveMembersRequest {
    pub remove_members: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct InviteMembersRequest {
    pub invites: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct AcceptInviteRequest {
    pub accept_invite: bool,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RejectInviteRequest {
    pub reject_invite: bool,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct AddModeratorsRequest {
    pub add_moderators: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct DemoteModeratorsRequest {
    pub demote_moderators: Vec<String>,
}

/// Options recognized by the ban endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BanOptions {
    /// Ban duration in seconds; permanent when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    /// Reason shown to moderators alongside the ban record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl BanOptions {
    pub(crate) fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(timeout) = self.timeout {
            params.push(("timeout".to_string(), timeout.to_string()));
        }
        if let Some(reason) = &self.reason {
            params.push(("reason".to_string(), reason.clone()));
        }
        params
    }
}

/// Ban payload, scoped to a channel via the type/id pair.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct BanRequest {
    #[serde(rename = "type")]
    pub channel_type: String,
    pub id: String,
    pub target_user_id: String,
    pub user_id: String,
    #[serde(flatten)]
    pub options: BanOptions,
}

/// Options recognized by the mark-read endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MarkReadOptions {
    /// Identifier of the newest message the user has seen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct MarkReadRequest {
    pub user: User,
    #[serde(flatten)]
    pub options: MarkReadOptions,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SendMessageRequest {
    pub message: Message,
}

/// Pagination for thread-reply listing, sent as query parameters.
#[derive(Debug, Clone, Default)]
pub struct ReplyPagination {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// Only return replies with an id before this one.
    pub id_lt: Option<String>,
}

impl ReplyPagination {
    pub(crate) fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(id_lt) = &self.id_lt {
            params.push(("id_lt".to_string(), id_lt.clone()));
        }
        params
    }
}
