//! # Crosstalk Channels Crate
//!
//! Client-side representation of remote chat channels. A [`Channel`] is a
//! locally cached snapshot of a channel's metadata, member list, messages,
//! and read markers, kept consistent with the remote source of truth by
//! feeding state-bearing responses through the merge engine in [`state`].
//!
//! ## Architecture
//!
//! - **Entities**: domain records (Channel, ChannelMember, Message, User)
//!   and their JSON shapes
//! - **State**: the merge engine reconciling full or partial snapshots into
//!   a long-lived channel handle
//! - **Operations**: channel-scoped verbs (create, query, update, delete,
//!   truncate, membership, moderation, messages, read markers)
//! - **Types**: errors and typed request/response payloads
//!
//! ## Synchronization model
//!
//! Not every mutation returns channel state. Endpoints that do (create,
//! query, remove-members, invite responses) are merged into the local
//! handle; the rest leave cached lists untouched and require an explicit
//! [`Channel::refresh`] when freshness matters. This asymmetry mirrors the
//! service's API surface and is documented per operation.
//!
//! A `Channel` performs no internal locking. Share the transport freely,
//! but serialize access to a channel handle externally.

pub mod entities;
pub mod state;
pub mod types;

mod operations;

#[cfg(test)]
pub(crate) mod test_support;

pub use entities::{
    Channel, ChannelConfig, ChannelMember, ChannelSnapshot, MemberRole, Message, MessageKind, User,
};
pub use state::ChannelState;
pub use types::{
    BanOptions, ChannelError, ChannelOptions, ChannelResult, MarkReadOptions, QueryFlags,
    ReplyPagination,
};
