//! Domain entities and their JSON shapes.

pub mod channel;
pub mod member;
pub mod message;
pub mod user;

pub use channel::{Channel, ChannelConfig, ChannelSnapshot};
pub use member::{ChannelMember, MemberRole};
pub use message::{Message, MessageKind};
pub use user::User;
