use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

/// Reference to a user in the external user directory.
///
/// Channels, members, and messages carry users by value; the records
/// themselves are owned by the directory service and are not managed here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub online: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Reference a user by id only, as used in request payloads.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_reference_serializes_minimally() {
        let user = User::with_id("ann");
        let value = serde_json::to_value(&user).expect("user should serialize");
        assert_eq!(value, serde_json::json!({ "id": "ann" }));
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let user: User = serde_json::from_str(r#"{"id": "ben", "online": true}"#)
            .expect("user should deserialize");
        assert_eq!(user.id, "ben");
        assert!(user.online);
        assert!(user.name.is_none());
        assert!(user.created_at.is_none());
    }
}
