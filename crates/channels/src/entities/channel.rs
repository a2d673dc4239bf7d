use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crosstalk_transport::Transport;

use super::member::ChannelMember;
use super::message::Message;
use super::user::User;

/// Feature and moderation flags attached to a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub typing_events: bool,
    #[serde(default)]
    pub read_events: bool,
    #[serde(default)]
    pub connect_events: bool,
    #[serde(default)]
    pub search: bool,
    #[serde(default)]
    pub reactions: bool,
    #[serde(default)]
    pub replies: bool,
    #[serde(default)]
    pub mutes: bool,
    #[serde(default)]
    pub message_retention: String,
    #[serde(default)]
    pub max_message_length: u32,
    #[serde(default)]
    pub automod: String,
}

/// Wire representation of channel metadata.
///
/// This is the `channel` object carried by state-bearing responses. It is
/// metadata only: member/message/read lists travel next to it in the
/// response envelope, never inside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelSnapshot {
    #[serde(rename = "type", default)]
    pub channel_type: String,
    #[serde(default)]
    pub id: String,
    /// Composite identifier in `type:id` form.
    #[serde(default)]
    pub cid: String,
    #[serde(default)]
    pub config: ChannelConfig,
    #[serde(default)]
    pub created_by: Option<User>,
    #[serde(default)]
    pub frozen: bool,
    #[serde(default)]
    pub member_count: usize,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_message_at: Option<DateTime<Utc>>,
}

/// Locally cached view of a remote channel.
///
/// A `Channel` is a plain mutable record: it performs no internal locking,
/// so a handle must not be mutated from multiple threads without external
/// serialization. The transport handle is injected at construction, may be
/// shared with any number of other channels, and survives every snapshot
/// merge.
pub struct Channel {
    pub channel_type: String,
    pub id: String,
    /// Composite identifier in `type:id` form.
    pub cid: String,
    pub config: ChannelConfig,
    pub created_by: Option<User>,
    pub frozen: bool,
    /// Server-reported member count. Matches `members.len()` after a full
    /// snapshot but may diverge after a partial response until
    /// [`Channel::refresh`](crate::Channel::refresh).
    pub member_count: usize,
    /// Members in arrival order.
    pub members: Vec<ChannelMember>,
    /// Cached messages, most recent last.
    pub messages: Vec<Message>,
    /// Users that have marked the channel read.
    pub read: Vec<User>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_message_at: Option<DateTime<Utc>>,

    pub(crate) transport: Arc<dyn Transport>,
}

impl Channel {
    /// Create a detached handle carrying identity fields only.
    pub(crate) fn new(
        transport: Arc<dyn Transport>,
        channel_type: &str,
        id: &str,
        created_by: User,
    ) -> Self {
        Self {
            channel_type: channel_type.to_string(),
            id: id.to_string(),
            cid: compose_cid(channel_type, id),
            config: ChannelConfig::default(),
            created_by: Some(created_by),
            frozen: false,
            member_count: 0,
            members: Vec::new(),
            messages: Vec::new(),
            read: Vec::new(),
            created_at: None,
            updated_at: None,
            last_message_at: None,
            transport,
        }
    }

    /// Shared transport handle backing this channel.
    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&self.transport)
    }

    /// Whether the cached member list contains the given user.
    pub fn has_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|member| {
            member.user_id == user_id
                || member
                    .user
                    .as_ref()
                    .map(|user| user.id == user_id)
                    .unwrap_or(false)
        })
    }

    /// Replace every metadata field with the snapshot's values.
    ///
    /// List fields and the transport handle are left untouched here; list
    /// replacement is decided by the response envelope (see
    /// [`crate::state::ChannelState`]).
    pub(crate) fn apply_snapshot(&mut self, snapshot: ChannelSnapshot) {
        self.channel_type = snapshot.channel_type;
        self.id = snapshot.id;
        self.cid = snapshot.cid;
        self.config = snapshot.config;
        self.created_by = snapshot.created_by;
        self.frozen = snapshot.frozen;
        self.member_count = snapshot.member_count;
        self.created_at = snapshot.created_at;
        self.updated_at = snapshot.updated_at;
        self.last_message_at = snapshot.last_message_at;
    }
}

pub(crate) fn compose_cid(channel_type: &str, id: &str) -> String {
    format!("{channel_type}:{id}")
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("cid", &self.cid)
            .field("frozen", &self.frozen)
            .field("member_count", &self.member_count)
            .field("members", &self.members.len())
            .field("messages", &self.messages.len())
            .field("read", &self.read.len())
            .finish_non_exhaustive()
    }
}
