//! Shared types for channel operations.

pub mod errors;
pub mod requests;
pub mod responses;

pub use errors::{ChannelError, ChannelResult};
pub use requests::{BanOptions, ChannelOptions, MarkReadOptions, QueryFlags, ReplyPagination};
