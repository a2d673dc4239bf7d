//! Channel state synchronization.
//!
//! State-bearing endpoints answer with a [`ChannelState`] envelope whose
//! fields are all optional:
//!
//! ```json
//! { "channel": {...}, "members": [...], "messages": [...], "read": [...] }
//! ```
//!
//! Presence or absence at the envelope level decides what gets merged into
//! the local handle, which is how partial-response endpoints (an update call
//! returning no member list, for instance) avoid corrupting previously
//! cached data.

use serde::Deserialize;

use crate::entities::{Channel, ChannelMember, ChannelSnapshot, Message, User};

/// Response envelope carrying zero or more pieces of channel state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelState {
    #[serde(default)]
    pub channel: Option<ChannelSnapshot>,
    #[serde(default)]
    pub members: Option<Vec<ChannelMember>>,
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
    #[serde(default)]
    pub read: Option<Vec<User>>,
}

impl ChannelState {
    /// Reconcile this envelope into a long-lived channel handle.
    ///
    /// Replacement is wholesale, not element-wise: when `channel` is present
    /// every metadata field is overwritten (identity fields included) while
    /// the transport handle is preserved, and each list is overwritten only
    /// when the envelope carries it. Absent fields leave the corresponding
    /// cached data untouched. There is no deduplication or incremental
    /// diffing; callers that need guaranteed-fresh full state must refresh
    /// explicitly rather than rely on a partial mutation response.
    pub fn apply_to(self, channel: &mut Channel) {
        if let Some(snapshot) = self.channel {
            channel.apply_snapshot(snapshot);
        }

        if let Some(members) = self.members {
            channel.members = members;
        }
        if let Some(messages) = self.messages {
            channel.messages = messages;
        }
        if let Some(read) = self.read {
            channel.read = read;
        }
    }
}
