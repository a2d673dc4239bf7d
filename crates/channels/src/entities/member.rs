use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// Membership record for a single user within a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelMember {
    #[serde(default)]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default)]
    pub is_moderator: bool,

    /// Whether the member joined through an invite.
    #[serde(default)]
    pub invited: bool,
    /// When the member accepted a pending invite. At most one of the
    /// accepted/rejected timestamps is set, and only after `invited`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_accepted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_rejected_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub role: MemberRole,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ChannelMember {
    /// Whether the member accepted or rejected a pending invite.
    pub fn has_responded_to_invite(&self) -> bool {
        self.invite_accepted_at.is_some() || self.invite_rejected_at.is_some()
    }

    /// Whether an invite is still waiting for a response.
    pub fn invite_pending(&self) -> bool {
        self.invited && !self.has_responded_to_invite()
    }
}

/// Member role within a channel.
///
/// Roles the service may introduce beyond the two known ones are carried
/// verbatim in `Custom` so snapshots survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MemberRole {
    Member,
    Moderator,
    Custom(String),
}

impl Default for MemberRole {
    fn default() -> Self {
        MemberRole::Member
    }
}

impl From<String> for MemberRole {
    fn from(value: String) -> Self {
        match value.as_str() {
            "member" => MemberRole::Member,
            "moderator" => MemberRole::Moderator,
            _ => MemberRole::Custom(value),
        }
    }
}

impl From<&str> for MemberRole {
    fn from(value: &str) -> Self {
        MemberRole::from(value.to_string())
    }
}

impl From<MemberRole> for String {
    fn from(role: MemberRole) -> Self {
        match role {
            MemberRole::Member => "member".to_string(),
            MemberRole::Moderator => "moderator".to_string(),
            MemberRole::Custom(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_conversion_round_trips() {
        assert_eq!(MemberRole::from("member"), MemberRole::Member);
        assert_eq!(MemberRole::from("moderator"), MemberRole::Moderator);
        assert_eq!(
            MemberRole::from("caretaker"),
            MemberRole::Custom("caretaker".to_string())
        );

        assert_eq!(String::from(MemberRole::Member), "member");
        assert_eq!(String::from(MemberRole::Moderator), "moderator");
        assert_eq!(
            String::from(MemberRole::Custom("caretaker".to_string())),
            "caretaker"
        );
    }

    #[test]
    fn unknown_roles_survive_deserialization() {
        let member: ChannelMember =
            serde_json::from_str(r#"{"user_id": "ann", "role": "caretaker"}"#)
                .expect("member should deserialize");
        assert_eq!(member.role, MemberRole::Custom("caretaker".to_string()));
    }

    #[test]
    fn invite_state_helpers() {
        let mut member = ChannelMember {
            user_id: "ann".to_string(),
            invited: true,
            ..ChannelMember::default()
        };
        assert!(member.invite_pending());
        assert!(!member.has_responded_to_invite());

        member.invite_accepted_at = Some(chrono::Utc::now());
        assert!(!member.invite_pending());
        assert!(member.has_responded_to_invite());
    }

    #[test]
    fn default_role_is_member() {
        let member: ChannelMember =
            serde_json::from_str(r#"{"user_id": "ann"}"#).expect("member should deserialize");
        assert_eq!(member.role, MemberRole::Member);
        assert!(!member.is_moderator);
    }
}
