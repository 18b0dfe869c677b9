use serde::{Deserialize, Serialize};

/// Platform role attached to every account.
///
/// The backend stores roles as uppercase strings. Anything the client does
/// not recognize deserializes to `Unknown` rather than failing the whole
/// collection fetch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Student,
    Admin,
    #[default]
    #[serde(other)]
    Unknown,
}

impl UserRole {
    /// Parse a role string. Unknown values fall back to `Unknown`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "STUDENT" => UserRole::Student,
            "ADMIN" => UserRole::Admin,
            _ => UserRole::Unknown,
        }
    }

    /// Uppercase wire/display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "STUDENT",
            UserRole::Admin => "ADMIN",
            UserRole::Unknown => "UNKNOWN",
        }
    }
}

/// An account in the system.
///
/// Legacy records may lack a server id; such users are identified by email
/// instead (see [`User::key`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(
        rename = "meetingLink",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub meeting_link: Option<String>,
}

impl User {
    /// Stable identity within the users collection: id, or email when the
    /// server did not report one.
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.email)
    }
}

/// A scheduled live class session.
///
/// `users` and `group` are populated by the server from the membership
/// tables; the client never computes them locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Class {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub link: String,
    #[serde(rename = "groupId", default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub group: Option<Group>,
}

/// A study resource: a titled link, nothing more.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub link: String,
}

/// A named cohort of users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Group {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub users: Vec<User>,
}
